use crate::ast::Location;
use crate::ast::Type;
use serde::Serialize;

/// `[Type]`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListType {
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(ListType {
    "type" => ty: one,
});
