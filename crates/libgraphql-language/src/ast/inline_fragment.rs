use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use serde::Serialize;
use std::sync::Arc;

/// `... on Type @directives { ... }`. The type condition is optional.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineFragment {
    pub type_condition: Option<Arc<NamedType>>,
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Arc<SelectionSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(InlineFragment {
    "type_condition" => type_condition: opt,
    "directives" => directives: many,
    "selection_set" => selection_set: one,
});
