use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use serde::Serialize;
use std::sync::Arc;

/// `fragment Name on Type @directives { ... }`
///
/// `variable_definitions` is only ever non-empty when the document was
/// parsed with
/// [`allow_legacy_fragment_variables`](crate::ParseOptions::allow_legacy_fragment_variables).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentDefinition {
    pub name: Arc<Name>,
    pub variable_definitions: Vec<Arc<VariableDefinition>>,
    pub type_condition: Arc<NamedType>,
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Arc<SelectionSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(FragmentDefinition {
    "name" => name: one,
    "variable_definitions" => variable_definitions: many,
    "type_condition" => type_condition: one,
    "directives" => directives: many,
    "selection_set" => selection_set: one,
});
