#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_language::ParseOptions;
use libgraphql_language::parse;
use libgraphql_language::parse_type;
use libgraphql_language::parse_value;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let options = ParseOptions::default()
        .allow_legacy_fragment_variables(true);
    if let Err(err) = parse(s, options.clone()) {
        let _ = err.format_detailed();
    }
    let _ = parse_value(s, options.clone());
    let _ = parse_type(s, options);
});
