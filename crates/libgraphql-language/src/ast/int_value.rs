use crate::ast::Location;
use serde::Serialize;

/// An integer literal, kept as its source text (e.g. `"-42"`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IntValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(IntValue {});
