use crate::ast::Definition;
use crate::ast::Location;
use serde::Serialize;

/// The root of a parsed GraphQL document.
///
/// A document may freely mix executable definitions (operations,
/// fragments) with type-system definitions and extensions; definition
/// order is preserved exactly as written.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(Document {
    "definitions" => definitions: many,
});
