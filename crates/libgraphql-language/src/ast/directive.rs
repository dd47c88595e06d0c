use crate::ast::Argument;
use crate::ast::Location;
use crate::ast::Name;
use serde::Serialize;
use std::sync::Arc;

/// A directive annotation: `@name(arg: value, ...)`.
///
/// See
/// [Directives](https://spec.graphql.org/September2025/#sec-Language.Directives)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Directive {
    pub name: Arc<Name>,
    pub arguments: Vec<Arc<Argument>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(Directive {
    "name" => name: one,
    "arguments" => arguments: many,
});
