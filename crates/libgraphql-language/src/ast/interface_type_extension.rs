use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use serde::Serialize;
use std::sync::Arc;

/// `extend interface Name implements A @directives { fields }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InterfaceTypeExtension {
    pub name: Arc<Name>,
    pub interfaces: Vec<Arc<NamedType>>,
    pub directives: Vec<Arc<Directive>>,
    pub fields: Vec<Arc<FieldDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(InterfaceTypeExtension {
    "name" => name: one,
    "interfaces" => interfaces: many,
    "directives" => directives: many,
    "fields" => fields: many,
});
