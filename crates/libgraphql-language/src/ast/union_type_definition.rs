use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::StringValue;
use serde::Serialize;
use std::sync::Arc;

/// `union Name @directives = A | B`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnionTypeDefinition {
    pub description: Option<Arc<StringValue>>,
    pub name: Arc<Name>,
    pub directives: Vec<Arc<Directive>>,
    pub types: Vec<Arc<NamedType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(UnionTypeDefinition {
    "description" => description: opt,
    "name" => name: one,
    "directives" => directives: many,
    "types" => types: many,
});
