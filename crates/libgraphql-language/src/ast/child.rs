use crate::ast::Kind;
use crate::ast::Node;
use crate::visitor::VisitError;

/// What a child key of a node resolves to: a single node, or a list of
/// nodes.
#[derive(Clone, Debug, PartialEq)]
pub enum Child {
    Node(Node),
    List(Vec<Node>),
}

/// Conversion between a typed child slot (`Arc<Field>`, `Selection`,
/// `Value`, ...) and the generic [`Node`].
pub(crate) trait NodeSlot: Sized {
    fn to_node(&self) -> Node;

    /// Converts `node` into this slot type, handing the node back if it
    /// is of a kind this slot cannot hold.
    fn from_node(node: Node) -> Result<Self, Node>;
}

fn convert<T: NodeSlot>(
    parent: Kind,
    key: &'static str,
    node: Node,
) -> Result<T, VisitError> {
    T::from_node(node).map_err(|found| VisitError::InvalidReplacement {
        parent,
        key,
        found: found.kind(),
    })
}

/// Access to a required single-node field.
pub(crate) mod one {
    use super::*;

    pub(crate) fn read<T: NodeSlot>(value: &T) -> Option<Child> {
        Some(Child::Node(value.to_node()))
    }

    pub(crate) fn write<T: NodeSlot>(
        parent: Kind,
        key: &'static str,
        value: Option<Child>,
    ) -> Result<T, VisitError> {
        match value {
            Some(Child::Node(node)) => convert(parent, key, node),
            Some(Child::List(_)) => Err(VisitError::UnexpectedList { parent, key }),
            None => Err(VisitError::RequiredChildRemoved { parent, key }),
        }
    }
}

/// Access to an optional single-node field.
pub(crate) mod opt {
    use super::*;

    pub(crate) fn read<T: NodeSlot>(value: &Option<T>) -> Option<Child> {
        value.as_ref().map(|value| Child::Node(value.to_node()))
    }

    pub(crate) fn write<T: NodeSlot>(
        parent: Kind,
        key: &'static str,
        value: Option<Child>,
    ) -> Result<Option<T>, VisitError> {
        match value {
            Some(Child::Node(node)) => convert(parent, key, node).map(Some),
            Some(Child::List(_)) => Err(VisitError::UnexpectedList { parent, key }),
            None => Ok(None),
        }
    }
}

/// Access to a list-of-nodes field.
pub(crate) mod many {
    use super::*;

    pub(crate) fn read<T: NodeSlot>(value: &[T]) -> Option<Child> {
        Some(Child::List(value.iter().map(NodeSlot::to_node).collect()))
    }

    pub(crate) fn write<T: NodeSlot>(
        parent: Kind,
        key: &'static str,
        value: Option<Child>,
    ) -> Result<Vec<T>, VisitError> {
        match value {
            Some(Child::List(nodes)) => nodes
                .into_iter()
                .map(|node| convert(parent, key, node))
                .collect(),
            Some(Child::Node(_)) => Err(VisitError::ExpectedList { parent, key }),
            None => Ok(Vec::new()),
        }
    }
}
