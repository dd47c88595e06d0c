use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::Name;
use serde::Serialize;
use std::sync::Arc;

/// `extend scalar Name @directives`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScalarTypeExtension {
    pub name: Arc<Name>,
    pub directives: Vec<Arc<Directive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(ScalarTypeExtension {
    "name" => name: one,
    "directives" => directives: many,
});
