use crate::ast::Kind;
use indexmap::IndexMap;

/// Decides which child keys of each node kind a traversal descends into,
/// and in which order.
///
/// The default table is [`Kind::child_keys`]. A custom table can prune
/// the walk (e.g. skip `directives` everywhere) or reorder it. Keys that
/// a kind does not have are ignored.
pub trait ChildKeyTable {
    fn child_keys(&self, kind: Kind) -> &[&'static str];
}

/// The built-in table, [`Kind::child_keys`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultChildKeys;

impl ChildKeyTable for DefaultChildKeys {
    fn child_keys(&self, kind: Kind) -> &[&'static str] {
        kind.child_keys()
    }
}

/// An explicit table. Kinds missing from the map have no children.
impl ChildKeyTable for IndexMap<Kind, Vec<&'static str>> {
    fn child_keys(&self, kind: Kind) -> &[&'static str] {
        self.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }
}
