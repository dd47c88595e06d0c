use crate::ast::Location;
use crate::ast::Name;
use crate::ast::Value;
use serde::Serialize;
use std::sync::Arc;

/// A `name: value` argument to a field or directive.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Argument {
    pub name: Arc<Name>,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(Argument {
    "name" => name: one,
    "value" => value: one,
});
