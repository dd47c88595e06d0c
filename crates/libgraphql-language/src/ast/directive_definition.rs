use crate::ast::InputValueDefinition;
use crate::ast::Location;
use crate::ast::Name;
use crate::ast::StringValue;
use serde::Serialize;
use std::sync::Arc;

/// `directive @name(args) repeatable on LOCATION | ...`
///
/// Locations are kept as [`Name`] nodes so they carry their own source
/// positions; the parser only accepts names that are members of
/// [`DirectiveLocation`](crate::ast::DirectiveLocation).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectiveDefinition {
    pub description: Option<Arc<StringValue>>,
    pub name: Arc<Name>,
    pub arguments: Vec<Arc<InputValueDefinition>>,
    pub repeatable: bool,
    pub locations: Vec<Arc<Name>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(DirectiveDefinition {
    "description" => description: opt,
    "name" => name: one,
    "arguments" => arguments: many,
    "locations" => locations: many,
});
