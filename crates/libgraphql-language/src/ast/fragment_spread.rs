use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::Name;
use serde::Serialize;
use std::sync::Arc;

/// `...FragmentName @directives`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FragmentSpread {
    pub name: Arc<Name>,
    pub directives: Vec<Arc<Directive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(FragmentSpread {
    "name" => name: one,
    "directives" => directives: many,
});
