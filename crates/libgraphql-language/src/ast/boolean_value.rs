use crate::ast::Location;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BooleanValue {
    pub value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(BooleanValue {});
