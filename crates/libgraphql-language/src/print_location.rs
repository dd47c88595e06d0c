use crate::ast::Location;
use crate::split_lines::split_lines;
use crate::Source;
use crate::SourceLocation;

/// Lines longer than this are split into sublines when excerpted.
const MAX_EXCERPT_LINE_LEN: usize = 120;

/// Width of each subline of a split line.
const SUBLINE_LEN: usize = 80;

/// Renders an excerpt of the source around the start of `location`.
pub fn print_location(location: &Location) -> String {
    print_source_location(
        &location.source,
        location.source.location_at(location.start),
    )
}

/// Renders an excerpt of `source` pointing at `location` (a body-relative
/// line/column, as returned by [`Source::location_at`]).
///
/// Produces a `{name}:{line}:{column}` header followed by the line before,
/// the line itself, a caret line, and the line after, each prefixed with
/// its line number:
/// ```text
/// Hero.graphql:2:3
/// 1 | {
/// 2 |   ?
///   |   ^
/// 3 | }
/// ```
///
/// Lines longer than 120 characters (typically minified documents) are
/// shown as 80-character sublines instead, with the caret placed under
/// the subline containing the column.
pub fn print_source_location(source: &Source, location: SourceLocation) -> String {
    let offset = source.location_offset();
    let first_line_column_offset = offset.column - 1;
    let body = format!(
        "{}{}",
        " ".repeat(first_line_column_offset),
        source.body(),
    );
    let line_index = location.line.saturating_sub(1);
    let line_num = location.line + offset.line - 1;
    let column_num = if location.line == 1 {
        location.column + first_line_column_offset
    } else {
        location.column
    };
    let header = format!("{}:{line_num}:{column_num}\n", source.name());

    let lines = split_lines(&body);
    let location_line = lines.get(line_index).copied().unwrap_or_default();

    let line_chars: Vec<char> = location_line.chars().collect();
    if line_chars.len() > MAX_EXCERPT_LINE_LEN {
        let subline_index = column_num / SUBLINE_LEN;
        let subline_column_num = column_num % SUBLINE_LEN;
        let sublines: Vec<String> = line_chars
            .chunks(SUBLINE_LEN)
            .map(|chunk| chunk.iter().collect())
            .collect();

        let mut rows: Vec<(String, Option<String>)> = Vec::new();
        rows.push((format!("{line_num} |"), sublines.first().cloned()));
        for subline in sublines.iter().take(subline_index + 1).skip(1) {
            rows.push(("|".to_string(), Some(subline.clone())));
        }
        rows.push(("|".to_string(), Some(caret_line(subline_column_num))));
        rows.push(("|".to_string(), sublines.get(subline_index + 1).cloned()));
        return header + &print_prefixed_lines(&rows);
    }

    let previous_line = line_index
        .checked_sub(1)
        .and_then(|index| lines.get(index))
        .map(|line| line.to_string());
    let rows = [
        (format!("{} |", line_num.saturating_sub(1)), previous_line),
        (format!("{line_num} |"), Some(location_line.to_string())),
        ("|".to_string(), Some(caret_line(column_num))),
        (
            format!("{} |", line_num + 1),
            lines.get(line_index + 1).map(|line| line.to_string()),
        ),
    ];
    header + &print_prefixed_lines(&rows)
}

/// A caret right-aligned to `column` (1-based): `column - 1` spaces and a
/// `^`.
fn caret_line(column: usize) -> String {
    format!("{}^", " ".repeat(column.saturating_sub(1)))
}

/// Drops rows with no line, right-aligns the prefixes to a common width,
/// and joins the rows with `\n`. Empty lines render as the bare prefix.
fn print_prefixed_lines(rows: &[(String, Option<String>)]) -> String {
    let existing: Vec<(&str, &str)> = rows
        .iter()
        .filter_map(|(prefix, line)| line.as_deref().map(|line| (prefix.as_str(), line)))
        .collect();
    let pad_len = existing
        .iter()
        .map(|(prefix, _)| prefix.len())
        .max()
        .unwrap_or(0);
    existing
        .iter()
        .map(|(prefix, line)| {
            if line.is_empty() {
                format!("{prefix:>pad_len$}")
            } else {
                format!("{prefix:>pad_len$} {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
