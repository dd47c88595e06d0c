use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::StringValue;
use serde::Serialize;
use std::sync::Arc;

/// `interface Name implements A & B @directives { fields }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InterfaceTypeDefinition {
    pub description: Option<Arc<StringValue>>,
    pub name: Arc<Name>,
    pub interfaces: Vec<Arc<NamedType>>,
    pub directives: Vec<Arc<Directive>>,
    pub fields: Vec<Arc<FieldDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(InterfaceTypeDefinition {
    "description" => description: opt,
    "name" => name: one,
    "interfaces" => interfaces: many,
    "directives" => directives: many,
    "fields" => fields: many,
});
