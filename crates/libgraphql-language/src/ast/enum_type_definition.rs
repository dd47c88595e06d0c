use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::StringValue;
use serde::Serialize;
use std::sync::Arc;

/// `enum Name @directives { VALUES }`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumTypeDefinition {
    pub description: Option<Arc<StringValue>>,
    pub name: Arc<Name>,
    pub directives: Vec<Arc<Directive>>,
    pub values: Vec<Arc<EnumValueDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(EnumTypeDefinition {
    "description" => description: opt,
    "name" => name: one,
    "directives" => directives: many,
    "values" => values: many,
});
