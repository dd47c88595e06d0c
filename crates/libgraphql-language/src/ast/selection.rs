use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use serde::Serialize;
use std::sync::Arc;

/// One entry of a [`SelectionSet`](crate::ast::SelectionSet).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Selection {
    Field(Arc<Field>),
    FragmentSpread(Arc<FragmentSpread>),
    InlineFragment(Arc<InlineFragment>),
}

ast_union!(Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
});
