use crate::ast::Location;
use crate::ast::Type;
use serde::Serialize;

/// `Type!`
///
/// The parser only ever wraps a named or list type; a non-null type
/// nested directly inside another is not expressible in GraphQL syntax.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NonNullType {
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(NonNullType {
    "type" => ty: one,
});
