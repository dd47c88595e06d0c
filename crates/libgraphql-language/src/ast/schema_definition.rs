use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::OperationTypeDefinition;
use crate::ast::StringValue;
use serde::Serialize;
use std::sync::Arc;

/// `schema @directives { query: Query ... }`
///
/// See
/// [Schema](https://spec.graphql.org/September2025/#sec-Schema)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDefinition {
    pub description: Option<Arc<StringValue>>,
    pub directives: Vec<Arc<Directive>>,
    pub operation_types: Vec<Arc<OperationTypeDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(SchemaDefinition {
    "description" => description: opt,
    "directives" => directives: many,
    "operation_types" => operation_types: many,
});
