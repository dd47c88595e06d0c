use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::Location;
use crate::ast::Name;
use serde::Serialize;
use std::sync::Arc;

/// `extend input Name @directives { fields }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InputObjectTypeExtension {
    pub name: Arc<Name>,
    pub directives: Vec<Arc<Directive>>,
    pub fields: Vec<Arc<InputValueDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(InputObjectTypeExtension {
    "name" => name: one,
    "directives" => directives: many,
    "fields" => fields: many,
});
