use crate::ast::Location;
use crate::ast::Selection;
use serde::Serialize;

/// A `{ ... }` block of selections. Never empty when parsed.
///
/// See
/// [Selection Sets](https://spec.graphql.org/September2025/#sec-Selection-Sets)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(SelectionSet {
    "selections" => selections: many,
});
