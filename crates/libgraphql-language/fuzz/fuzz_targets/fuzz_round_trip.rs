#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_language::ParseOptions;
use libgraphql_language::parse;
use libgraphql_language::print;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let options = ParseOptions::default()
        .no_location(true)
        .allow_legacy_fragment_variables(true);
    let Ok(doc) = parse(s, options.clone()) else {
        return;
    };
    let printed = print(doc.clone());
    let reparsed = parse(printed.as_str(), options)
        .unwrap_or_else(|err| panic!("printed output failed to parse: {err}\n{printed}"));
    assert_eq!(doc, reparsed, "printed output parsed differently:\n{printed}");
    assert_eq!(print(reparsed), printed);
});
