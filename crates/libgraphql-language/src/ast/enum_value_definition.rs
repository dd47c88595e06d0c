use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::StringValue;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumValueDefinition {
    pub description: Option<Arc<StringValue>>,
    pub name: Arc<Name>,
    pub directives: Vec<Arc<Directive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(EnumValueDefinition {
    "description" => description: opt,
    "name" => name: one,
    "directives" => directives: many,
});
