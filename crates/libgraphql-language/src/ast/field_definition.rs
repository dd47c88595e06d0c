use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::StringValue;
use crate::ast::Type;
use serde::Serialize;
use std::sync::Arc;

/// `name(args): Type @directives` inside an object or interface type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub description: Option<Arc<StringValue>>,
    pub name: Arc<Name>,
    pub arguments: Vec<Arc<InputValueDefinition>>,
    #[serde(rename = "type")]
    pub ty: Type,
    pub directives: Vec<Arc<Directive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(FieldDefinition {
    "description" => description: opt,
    "name" => name: one,
    "arguments" => arguments: many,
    "type" => ty: one,
    "directives" => directives: many,
});
