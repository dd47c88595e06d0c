//! Tests for `split_lines`, shared by excerpt rendering and block string
//! printing.

use crate::split_lines::split_lines;

/// Verifies that every GraphQL line terminator splits, with `\r\n`
/// counting as one.
#[test]
fn splits_on_every_line_terminator() {
    assert_eq!(split_lines("a\nb\rc\r\nd"), vec!["a", "b", "c", "d"]);
    assert_eq!(split_lines("a\n\rb"), vec!["a", "", "b"]);
}

/// Verifies that empty input and trailing terminators yield empty lines.
#[test]
fn keeps_empty_lines() {
    assert_eq!(split_lines(""), vec![""]);
    assert_eq!(split_lines("a\n"), vec!["a", ""]);
    assert_eq!(split_lines("\r\n\r\n"), vec!["", "", ""]);
}

/// Verifies that multi-byte characters are never split.
#[test]
fn keeps_multibyte_characters_whole() {
    assert_eq!(split_lines("é\n😀"), vec!["é", "😀"]);
}
