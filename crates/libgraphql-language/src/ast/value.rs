use crate::ast::BooleanValue;
use crate::ast::EnumValue;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::ListValue;
use crate::ast::NullValue;
use crate::ast::ObjectValue;
use crate::ast::StringValue;
use crate::ast::Variable;
use serde::Serialize;
use std::sync::Arc;

/// An input value: a literal or a variable reference.
///
/// Values parsed in a constant context (default values, arguments of
/// type-system directives) never contain `Variable`s.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Value {
    Variable(Arc<Variable>),
    #[serde(rename = "IntValue")]
    Int(Arc<IntValue>),
    #[serde(rename = "FloatValue")]
    Float(Arc<FloatValue>),
    #[serde(rename = "StringValue")]
    String(Arc<StringValue>),
    #[serde(rename = "BooleanValue")]
    Boolean(Arc<BooleanValue>),
    #[serde(rename = "NullValue")]
    Null(Arc<NullValue>),
    #[serde(rename = "EnumValue")]
    Enum(Arc<EnumValue>),
    #[serde(rename = "ListValue")]
    List(Arc<ListValue>),
    #[serde(rename = "ObjectValue")]
    Object(Arc<ObjectValue>),
}

ast_union!(Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
});
