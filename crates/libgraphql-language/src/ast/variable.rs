use crate::ast::Location;
use crate::ast::Name;
use serde::Serialize;
use std::sync::Arc;

/// A `$name` variable reference.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Variable {
    pub name: Arc<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(Variable {
    "name" => name: one,
});
