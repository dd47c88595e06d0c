use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::StringValue;
use serde::Serialize;
use std::sync::Arc;

/// `input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputObjectTypeDefinition {
    pub description: Option<Arc<StringValue>>,
    pub name: Arc<Name>,
    pub directives: Vec<Arc<Directive>>,
    pub fields: Vec<Arc<InputValueDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(InputObjectTypeDefinition {
    "description" => description: opt,
    "name" => name: one,
    "directives" => directives: many,
    "fields" => fields: many,
});
