use crate::ast::Node;

/// What a [`Visitor`](crate::visitor::Visitor) callback asks the traversal
/// to do next.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum VisitAction {
    /// Keep going, leaving the node as it is.
    #[default]
    Continue,

    /// On enter, do not descend into this node's children (and do not
    /// call `leave` for it). On leave, same as `Continue`.
    Skip,

    /// Remove the node from its parent. On enter, its children are not
    /// visited.
    Remove,

    /// Substitute another node in place of this one. On enter, traversal
    /// continues into the replacement's children instead of the
    /// original's.
    Replace(Node),

    /// Stop the whole traversal. Edits recorded so far are still applied
    /// to the returned tree.
    Break,
}
