use crate::ast::Location;
use crate::ast::Name;
use crate::ast::Value;
use serde::Serialize;
use std::sync::Arc;

/// One `name: value` entry of an [`ObjectValue`](crate::ast::ObjectValue).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectField {
    pub name: Arc<Name>,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(ObjectField {
    "name" => name: one,
    "value" => value: one,
});
