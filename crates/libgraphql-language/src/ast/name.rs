use crate::ast::Location;
use serde::Serialize;

/// A GraphQL name: `[_A-Za-z][_0-9A-Za-z]*`.
///
/// See
/// [Names](https://spec.graphql.org/September2025/#sec-Names)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Name {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            loc: None,
        }
    }
}

ast_node!(Name {});
