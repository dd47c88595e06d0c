#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_language::GraphQLLexer;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let _ = GraphQLLexer::new(s).into_tokens();
});
