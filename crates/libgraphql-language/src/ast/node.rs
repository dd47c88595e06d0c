use crate::ast::*;
use crate::visitor::VisitError;
use serde::Serialize;
use std::sync::Arc;

macro_rules! define_nodes {
    ($($kind:ident),* $(,)?) => {
        /// Any AST node.
        ///
        /// Each variant holds its node behind an [`Arc`], so cloning a
        /// `Node` is cheap and never copies a subtree.
        #[derive(Clone, Debug, PartialEq, Serialize)]
        #[serde(tag = "kind")]
        pub enum Node {
            $($kind(Arc<$kind>),)*
        }

        /// The closed set of AST node kinds.
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
        pub enum Kind {
            $($kind,)*
        }

        impl Kind {
            /// Every node kind.
            pub const ALL: &'static [Kind] = &[$(Kind::$kind,)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Kind::$kind => stringify!($kind),)*
                }
            }

            /// The keys of this kind's fields that hold child nodes, in
            /// traversal order. This is the child-key table that drives
            /// [`visit`](crate::visitor::visit).
            pub fn child_keys(&self) -> &'static [&'static str] {
                match self {
                    $(Kind::$kind => $kind::CHILD_KEYS,)*
                }
            }
        }

        #[inherent::inherent]
        impl AstNode for Node {
            pub fn kind(&self) -> Kind {
                match self {
                    $(Node::$kind(_) => Kind::$kind,)*
                }
            }

            pub fn loc(&self) -> Option<&Location> {
                match self {
                    $(Node::$kind(node) => node.loc.as_ref(),)*
                }
            }

            pub fn source_text(&self) -> Option<&str>;
        }

        impl Node {
            /// Reads the child (or list of children) stored under `key`.
            ///
            /// Returns `None` if `key` is not one of this node's child
            /// keys, or if it names an optional child that is absent.
            pub fn child(&self, key: &str) -> Option<Child> {
                match self {
                    $(Node::$kind(node) => node.child(key),)*
                }
            }

            /// Returns a copy of this node with the given children
            /// replaced. A `None` replacement clears an optional child
            /// (or empties a list).
            ///
            /// Only the node itself is copied: every child not named in
            /// `edits` is shared with the original.
            pub fn with_children(
                &self,
                edits: impl IntoIterator<Item = (&'static str, Option<Child>)>,
            ) -> Result<Node, VisitError> {
                match self {
                    $(Node::$kind(node) => {
                        let mut node = (**node).clone();
                        for (key, value) in edits {
                            node.set_child(key, value)?;
                        }
                        Ok(Node::$kind(Arc::new(node)))
                    },)*
                }
            }

            /// Whether both handles point at the very same node.
            pub fn ptr_eq(&self, other: &Node) -> bool {
                match (self, other) {
                    $((Node::$kind(a), Node::$kind(b)) => Arc::ptr_eq(a, b),)*
                    _ => false,
                }
            }
        }

        $(
            impl From<$kind> for Node {
                fn from(node: $kind) -> Self {
                    Node::$kind(Arc::new(node))
                }
            }

            impl From<Arc<$kind>> for Node {
                fn from(node: Arc<$kind>) -> Self {
                    Node::$kind(node)
                }
            }

            impl From<&Arc<$kind>> for Node {
                fn from(node: &Arc<$kind>) -> Self {
                    Node::$kind(Arc::clone(node))
                }
            }

            impl NodeSlot for Arc<$kind> {
                fn to_node(&self) -> Node {
                    Node::$kind(Arc::clone(self))
                }

                fn from_node(node: Node) -> Result<Self, Node> {
                    match node {
                        Node::$kind(node) => Ok(node),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

define_nodes! {
    Name,
    Document,
    OperationDefinition,
    VariableDefinition,
    Variable,
    SelectionSet,
    Field,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,
    Directive,
    NamedType,
    ListType,
    NonNullType,
    SchemaDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition,
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
