use crate::ast::Location;
use serde::Serialize;

/// A float literal, kept as its source text (e.g. `"1.5e-3"`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FloatValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(FloatValue {});
