use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::OperationTypeDefinition;
use serde::Serialize;
use std::sync::Arc;

/// `extend schema @directives { ... }`. At least one of `directives` or
/// `operation_types` is non-empty when parsed.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaExtension {
    pub directives: Vec<Arc<Directive>>,
    pub operation_types: Vec<Arc<OperationTypeDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(SchemaExtension {
    "directives" => directives: many,
    "operation_types" => operation_types: many,
});
