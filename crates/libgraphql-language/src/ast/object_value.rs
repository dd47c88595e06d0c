use crate::ast::Location;
use crate::ast::ObjectField;
use serde::Serialize;
use std::sync::Arc;

/// `{ name: value, ... }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectValue {
    pub fields: Vec<Arc<ObjectField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(ObjectValue {
    "fields" => fields: many,
});
