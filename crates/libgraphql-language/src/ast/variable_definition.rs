use crate::ast::Directive;
use crate::ast::Location;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use serde::Serialize;
use std::sync::Arc;

/// `$name: Type = default @directives` in an operation's (or, with
/// legacy fragment variables enabled, a fragment's) variable list.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDefinition {
    pub variable: Arc<Variable>,
    #[serde(rename = "type")]
    pub ty: Type,
    /// Always a constant value.
    pub default_value: Option<Value>,
    pub directives: Vec<Arc<Directive>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

ast_node!(VariableDefinition {
    "variable" => variable: one,
    "type" => ty: one,
    "default_value" => default_value: opt,
    "directives" => directives: many,
});
