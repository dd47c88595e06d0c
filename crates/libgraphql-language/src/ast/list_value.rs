use crate::ast::Location;
use crate::ast::Value;
use serde::Serialize;

/// `[value, ...]`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListValue {
    pub values: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(ListValue {
    "values" => values: many,
});
