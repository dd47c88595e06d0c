//! Various test utils.

use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::Value;
use crate::parse;
use crate::GraphQLError;
use crate::ParseOptions;
use std::sync::Arc;

/// Parses `source` with default options, panicking on failure.
pub(super) fn parse_ok(source: &str) -> Document {
    parse(source, ParseOptions::default())
        .unwrap_or_else(|error| panic!("failed to parse {source:?}: {error}"))
}

/// Parses `source` with default options, panicking if it succeeds.
pub(super) fn parse_err(source: &str) -> GraphQLError {
    match parse(source, ParseOptions::default()) {
        Ok(doc) => panic!("expected {source:?} to fail, got: {doc:#?}"),
        Err(error) => error,
    }
}

/// Parses `source` with locations disabled, so that trees from
/// different sources compare equal.
pub(super) fn parse_no_loc(source: &str) -> Document {
    parse(source, ParseOptions::default().no_location(true))
        .unwrap_or_else(|error| panic!("failed to parse {source:?}: {error}"))
}

/// The first definition of `source`, which must be an operation.
pub(super) fn first_operation(source: &str) -> Arc<OperationDefinition> {
    let doc = parse_ok(source);
    match doc.definitions.into_iter().next() {
        Some(Definition::OperationDefinition(op)) => op,
        other => panic!("expected an operation, got: {other:?}"),
    }
}

/// The first selection of `op`, which must be a field.
pub(super) fn first_field(op: &OperationDefinition) -> Arc<Field> {
    match op.selection_set.selections.first() {
        Some(Selection::Field(field)) => Arc::clone(field),
        other => panic!("expected a field, got: {other:?}"),
    }
}

/// The value of the first argument of the first field of `source`'s
/// first operation.
pub(super) fn first_arg_value(source: &str) -> Value {
    let field = first_field(&first_operation(source));
    match field.arguments.first() {
        Some(argument) => argument.value.clone(),
        None => panic!("expected an argument in {source:?}"),
    }
}
