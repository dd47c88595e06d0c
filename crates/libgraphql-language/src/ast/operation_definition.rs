use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::OperationType;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use serde::Serialize;
use std::sync::Arc;

/// A `query`, `mutation`, or `subscription` operation. A bare selection
/// set (`{ ... }`) parses as an anonymous `query`.
///
/// See
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations)
/// in the GraphQL language reference.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Arc<Name>>,
    pub variable_definitions: Vec<Arc<VariableDefinition>>,
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Arc<SelectionSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(OperationDefinition {
    "name" => name: opt,
    "variable_definitions" => variable_definitions: many,
    "directives" => directives: many,
    "selection_set" => selection_set: one,
});
