use crate::ast::ListType;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use serde::Serialize;
use std::sync::Arc;

/// A type reference, e.g. `String`, `[ID!]`, or `Int!`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Type {
    #[serde(rename = "NamedType")]
    Named(Arc<NamedType>),
    #[serde(rename = "ListType")]
    List(Arc<ListType>),
    #[serde(rename = "NonNullType")]
    NonNull(Arc<NonNullType>),
}

ast_union!(Type {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
});
