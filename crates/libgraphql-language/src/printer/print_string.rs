/// Prints `value` as a double-quoted GraphQL string literal.
///
/// `"` and `\` are backslash-escaped, as are C0 and C1 control
/// characters (`\n`, `\t`, ... where a short form exists, `\uXXXX`
/// otherwise). Everything else is printed as is.
///
/// ```
/// use libgraphql_language::print_string;
///
/// assert_eq!(print_string("say \"hi\"\n"), r#""say \"hi\"\n""#);
/// assert_eq!(print_string("\u{7F}"), r#""\u007F""#);
/// ```
pub fn print_string(value: &str) -> String {
    let mut printed = String::with_capacity(value.len() + 2);
    printed.push('"');
    for c in value.chars() {
        match c {
            '"' => printed.push_str("\\\""),
            '\\' => printed.push_str("\\\\"),
            '\u{0008}' => printed.push_str("\\b"),
            '\t' => printed.push_str("\\t"),
            '\n' => printed.push_str("\\n"),
            '\u{000C}' => printed.push_str("\\f"),
            '\r' => printed.push_str("\\r"),
            '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}' => {
                printed.push_str(&format!("\\u{:04X}", c as u32));
            },
            c => printed.push(c),
        }
    }
    printed.push('"');
    printed
}
