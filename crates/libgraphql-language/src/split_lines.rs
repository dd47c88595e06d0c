/// Splits `text` into lines on `\r\n`, `\n`, and `\r`. The terminators
/// are dropped; a trailing terminator yields a final empty line.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut cursor = 0;
    while let Some(offset) = memchr::memchr2(b'\n', b'\r', &bytes[cursor..]) {
        let terminator = cursor + offset;
        lines.push(&text[line_start..terminator]);
        cursor = if bytes[terminator] == b'\r' && bytes.get(terminator + 1) == Some(&b'\n') {
            terminator + 2
        } else {
            terminator + 1
        };
        line_start = cursor;
    }
    lines.push(&text[line_start..]);
    lines
}
