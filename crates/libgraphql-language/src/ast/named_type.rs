use crate::ast::Location;
use crate::ast::Name;
use serde::Serialize;
use std::sync::Arc;

/// A reference to a type by name, e.g. `String`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NamedType {
    pub name: Arc<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(NamedType {
    "name" => name: one,
});
