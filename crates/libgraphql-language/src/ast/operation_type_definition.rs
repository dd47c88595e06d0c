use crate::ast::Location;
use crate::ast::NamedType;
use crate::ast::OperationType;
use serde::Serialize;
use std::sync::Arc;

/// One `query: Query` entry of a schema definition or extension.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperationTypeDefinition {
    pub operation: OperationType,
    #[serde(rename = "type")]
    pub ty: Arc<NamedType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(OperationTypeDefinition {
    "type" => ty: one,
});
