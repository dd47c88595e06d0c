use crate::ast::Node;
use serde::Serialize;

/// One step of the path from the traversal root to a node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A child key of the parent node (e.g. `"selection_set"`).
    Key(&'static str),

    /// A position within a list-valued child.
    Index(usize),
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Where the node handed to a [`Visitor`](crate::visitor::Visitor)
/// callback sits in the tree being traversed.
#[derive(Clone, Copy, Debug)]
pub struct VisitContext<'a> {
    /// The node's key under its parent: a child key, or an index when the
    /// node is an element of a list. `None` for the root.
    pub key: Option<PathSegment>,

    /// The closest enclosing node. `None` for the root.
    pub parent: Option<&'a Node>,

    /// Keys and indices leading from the root to this node.
    pub path: &'a [PathSegment],

    /// Every node enclosing `parent`, outermost first.
    pub ancestors: &'a [Node],
}

impl VisitContext<'_> {
    /// The child key of `parent` under which this node is stored: `key`
    /// itself, or for a list element, the key of the list.
    pub fn field_key(&self) -> Option<&'static str> {
        self.path.iter().rev().find_map(|segment| match segment {
            PathSegment::Key(key) => Some(*key),
            PathSegment::Index(_) => None,
        })
    }

    /// The position of this node in its list, if it is a list element.
    pub fn index(&self) -> Option<usize> {
        match self.key {
            Some(PathSegment::Index(index)) => Some(index),
            _ => None,
        }
    }
}
