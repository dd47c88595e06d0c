use crate::ast::Location;
use serde::Serialize;

/// A string literal.
///
/// `value` is the interpreted content: escapes are resolved for `"`
/// strings and block strings are dedented. `block` records which form
/// was written so the printer can reproduce it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StringValue {
    pub value: String,
    pub block: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(StringValue {});
