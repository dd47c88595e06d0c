//! Block string (`"""`) helpers shared by the lexer and the printer.

use crate::split_lines::split_lines;

/// Produces the value of a block string from its raw lines.
///
/// Removes the common indentation of every line after the first (lines
/// consisting only of whitespace do not count towards the common
/// indentation), then drops leading and trailing lines that are entirely
/// whitespace.
///
/// # Example
///
/// ```
/// use libgraphql_language::dedent_block_string_lines;
///
/// let lines = dedent_block_string_lines(&["  a", "    b", "  c"]);
/// assert_eq!(lines, vec!["  a", "  b", "c"]);
/// ```
pub fn dedent_block_string_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut common_indent = usize::MAX;
    let mut first_non_empty_line = None;
    let mut last_non_empty_line = None;

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let indent = leading_whitespace(line);
        if indent == line.len() {
            continue;
        }
        first_non_empty_line.get_or_insert(i);
        last_non_empty_line = Some(i);
        if i != 0 && indent < common_indent {
            common_indent = indent;
        }
    }

    let Some(last) = last_non_empty_line else {
        return Vec::new();
    };
    let first = first_non_empty_line.unwrap_or(0);

    lines
        .iter()
        .enumerate()
        .take(last + 1)
        .skip(first)
        .map(|(i, line)| {
            let line = line.as_ref();
            if i == 0 {
                line.to_string()
            } else {
                // Whitespace-only lines may be shorter than the indent.
                line.get(common_indent..).unwrap_or_default().to_string()
            }
        })
        .collect()
}

/// Number of leading space/tab bytes of `line`.
fn leading_whitespace(line: &str) -> usize {
    line.bytes()
        .take_while(|byte| *byte == b' ' || *byte == b'\t')
        .count()
}

fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Whether `value` would survive a round trip through
/// [`print_block_string`] and the lexer unchanged.
///
/// Values containing non-printable characters, `\r`, leading or trailing
/// blank lines, or indentation common to every line cannot be expressed
/// as a block string.
pub fn is_printable_as_block_string(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }

    let mut is_empty_line = true;
    let mut has_indent = false;
    let mut has_common_indent = true;
    let mut seen_non_empty_line = false;

    for c in value.chars() {
        match c {
            '\u{0000}'..='\u{0008}' | '\u{000B}' | '\u{000C}' | '\u{000E}'..='\u{001F}' => {
                return false;
            },
            '\r' => return false,
            '\n' => {
                if is_empty_line && !seen_non_empty_line {
                    // Leading blank line.
                    return false;
                }
                seen_non_empty_line = true;
                is_empty_line = true;
                has_indent = false;
            },
            '\t' | ' ' => {
                has_indent = has_indent || is_empty_line;
            },
            _ => {
                has_common_indent = has_common_indent && has_indent;
                is_empty_line = false;
            },
        }
    }

    if is_empty_line {
        // Trailing blank line.
        return false;
    }
    if has_common_indent && seen_non_empty_line {
        return false;
    }
    true
}

/// Renders `value` as a `"""` block string.
///
/// Embedded `"""` are escaped. Unless `minimize` is set, multi-line or
/// long (over 70 characters) values are printed with the delimiters on
/// their own lines. A leading newline is forced when every line after
/// the first is blank or indented (so the first line cannot be mistaken
/// for indented content), and a trailing newline when the value ends
/// with `"` or `\`.
pub fn print_block_string(value: &str, minimize: bool) -> String {
    let escaped_value = value.replace("\"\"\"", "\\\"\"\"");

    let lines = split_lines(&escaped_value);
    let is_single_line = lines.len() == 1;

    let force_leading_new_line = lines.len() > 1
        && lines[1..]
            .iter()
            .all(|line| line.is_empty() || line.starts_with(is_whitespace));

    let has_trailing_triple_quotes = escaped_value.ends_with("\\\"\"\"");

    let has_trailing_quote = value.ends_with('"') && !has_trailing_triple_quotes;
    let has_trailing_slash = value.ends_with('\\');
    let force_trailing_newline = has_trailing_quote || has_trailing_slash;

    let print_as_multiple_lines = !minimize
        && (!is_single_line
            || value.chars().count() > 70
            || force_trailing_newline
            || force_leading_new_line
            || has_trailing_triple_quotes);

    let mut result = String::with_capacity(escaped_value.len() + 8);

    let skip_leading_new_line = is_single_line && value.starts_with(is_whitespace);
    if (print_as_multiple_lines && !skip_leading_new_line) || force_leading_new_line {
        result.push('\n');
    }
    result.push_str(&escaped_value);
    if print_as_multiple_lines || force_trailing_newline {
        result.push('\n');
    }

    format!("\"\"\"{result}\"\"\"")
}
