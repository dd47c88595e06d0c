use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::SelectionSet;
use serde::Serialize;
use std::sync::Arc;

/// A field selection within a selection set, optionally
/// aliased, with arguments, directives, and a nested
/// selection set.
///
/// When `alias` is present, `name` is the field actually selected and
/// `alias` the response key.
///
/// See
/// [Fields](https://spec.graphql.org/September2025/#sec-Language.Fields)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub alias: Option<Arc<Name>>,
    pub name: Arc<Name>,
    pub arguments: Vec<Arc<Argument>>,
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Option<Arc<SelectionSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(Field {
    "alias" => alias: opt,
    "name" => name: one,
    "arguments" => arguments: many,
    "directives" => directives: many,
    "selection_set" => selection_set: opt,
});
