use crate::ast::Location;
use serde::Serialize;

/// A bare name used as a value (any name other than `true`, `false`,
/// or `null`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EnumValue {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(EnumValue {});
