use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::Value;
use serde::Serialize;
use std::sync::Arc;

/// `name: Type = default @directives`, used both for field/directive
/// arguments and for input object fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValueDefinition {
    pub description: Option<Arc<StringValue>>,
    pub name: Arc<Name>,
    #[serde(rename = "type")]
    pub ty: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Arc<Directive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(InputValueDefinition {
    "description" => description: opt,
    "name" => name: one,
    "type" => ty: one,
    "default_value" => default_value: opt,
    "directives" => directives: many,
});
