//! Tests for `Source`: names, location offsets, and translating byte
//! offsets into lines and columns.

use crate::parse;
use crate::GraphQLErrorKind;
use crate::IntoSource;
use crate::ParseOptions;
use crate::Source;
use crate::SourceLocation;
use std::sync::Arc;

/// Verifies the defaults of a new source.
#[test]
fn new_source_has_defaults() {
    let source = Source::new("{ a }");
    assert_eq!(source.body(), "{ a }");
    assert_eq!(source.name(), "GraphQL request");
    assert_eq!(source.name(), Source::DEFAULT_NAME);
    assert_eq!(source.location_offset(), SourceLocation::new(1, 1));
}

/// Verifies that name and location offset can be set.
#[test]
fn sets_name_and_offset() {
    let source = Source::new("{ a }")
        .with_name("Query.graphql")
        .with_location_offset(SourceLocation::new(4, 2))
        .unwrap();
    assert_eq!(source.name(), "Query.graphql");
    assert_eq!(source.location_offset(), SourceLocation::new(4, 2));
}

/// Verifies that a zero line or column offset is rejected.
#[test]
fn rejects_zero_offsets() {
    let error = Source::new("")
        .with_location_offset(SourceLocation::new(0, 1))
        .unwrap_err();
    assert_eq!(
        error.message(),
        "line in locationOffset is 1-indexed and must be positive.",
    );
    assert_eq!(error.kind(), &GraphQLErrorKind::Other);

    let error = Source::new("")
        .with_location_offset(SourceLocation::new(1, 0))
        .unwrap_err();
    assert_eq!(
        error.message(),
        "column in locationOffset is 1-indexed and must be positive.",
    );
}

/// Verifies line/column translation across every kind of line
/// terminator.
#[test]
fn location_at_handles_all_line_terminators() {
    let source = Source::new("a\nb\r\nc\rd");
    assert_eq!(source.location_at(0), SourceLocation::new(1, 1));
    assert_eq!(source.location_at(1), SourceLocation::new(1, 2));
    assert_eq!(source.location_at(2), SourceLocation::new(2, 1));
    assert_eq!(source.location_at(3), SourceLocation::new(2, 2));
    assert_eq!(source.location_at(5), SourceLocation::new(3, 1));
    assert_eq!(source.location_at(7), SourceLocation::new(4, 1));
}

/// Verifies that columns count characters, not bytes.
#[test]
fn location_at_counts_characters() {
    let source = Source::new("\"é😀\" x");
    assert_eq!(source.location_at("\"é😀\" ".len()), SourceLocation::new(1, 6));
}

/// Verifies that positions past the end are clamped.
#[test]
fn location_at_clamps_to_body() {
    let source = Source::new("ab\ncd");
    assert_eq!(source.location_at(100), SourceLocation::new(2, 3));
    assert_eq!(Source::new("").location_at(0), SourceLocation::new(1, 1));
}

/// Verifies that the location offset shifts the first line's columns and
/// every line number.
#[test]
fn offset_location_applies_offset() {
    let source = Source::new("")
        .with_location_offset(SourceLocation::new(3, 5))
        .unwrap();
    assert_eq!(
        source.offset_location(SourceLocation::new(1, 2)),
        SourceLocation::new(3, 6),
    );
    assert_eq!(
        source.offset_location(SourceLocation::new(2, 2)),
        SourceLocation::new(4, 2),
    );
}

/// Verifies every accepted form of parser input.
#[test]
fn accepts_every_source_form() {
    let text = String::from("{ a }");
    let shared = Arc::new(Source::new("{ a }"));
    assert!(parse("{ a }", ParseOptions::default()).is_ok());
    assert!(parse(&text, ParseOptions::default()).is_ok());
    assert!(parse(text.clone(), ParseOptions::default()).is_ok());
    assert!(parse(Source::new("{ a }"), ParseOptions::default()).is_ok());
    assert!(parse(&shared, ParseOptions::default()).is_ok());
    assert!(parse(Arc::clone(&shared), ParseOptions::default()).is_ok());

    assert!(Arc::ptr_eq(&(&shared).into_source(), &shared));
    assert_eq!(Source::from("x"), Source::new("x"));
    assert_eq!(Source::from(text.clone()), Source::new("{ a }"));
    assert_eq!(Source::from(&text), Source::new("{ a }"));
}

/// Verifies that parse errors carry the source's name.
#[test]
fn errors_carry_source_name() {
    let error = parse(
        Source::new("{").with_name("broken.graphql"),
        ParseOptions::default(),
    )
    .unwrap_err();
    assert_eq!(error.graphql_source().unwrap().name(), "broken.graphql");
    assert!(error.to_string().starts_with("broken.graphql:1:2: "));
}
