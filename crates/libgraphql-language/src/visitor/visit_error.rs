use crate::ast::Kind;
use crate::GraphQLError;

/// Failure of a [`visit`](crate::visitor::visit) traversal.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum VisitError {
    /// A visitor callback returned an error. Traversal stops at once and
    /// every pending edit is discarded.
    #[error(transparent)]
    Callback(#[from] GraphQLError),

    /// A replacement node of a kind the parent's field cannot hold, e.g. a
    /// `Name` returned in place of a `SelectionSet`.
    #[error("a {found} node cannot be stored under `{key}` of a {parent} node")]
    InvalidReplacement {
        parent: Kind,
        key: &'static str,
        found: Kind,
    },

    /// A required (non-optional, non-list) child was removed.
    #[error("`{key}` is required on {parent} nodes and cannot be removed")]
    RequiredChildRemoved {
        parent: Kind,
        key: &'static str,
    },

    /// A list was supplied for a single-node field.
    #[error("`{key}` of a {parent} node holds a single node, not a list")]
    UnexpectedList {
        parent: Kind,
        key: &'static str,
    },

    /// A single node was supplied for a list field.
    #[error("`{key}` of a {parent} node holds a list of nodes")]
    ExpectedList {
        parent: Kind,
        key: &'static str,
    },

    /// An edit named a key that is not a child key of the node.
    #[error("{parent} nodes have no child key `{key}`")]
    UnknownChildKey {
        parent: Kind,
        key: &'static str,
    },
}
