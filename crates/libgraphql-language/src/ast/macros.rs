/// Implements generic child access and [`AstNode`](crate::ast::AstNode)
/// for an AST node struct.
///
/// Each entry maps a child key to the struct field holding it along with
/// that field's cardinality: `one` (`T`), `opt` (`Option<T>`), or `many`
/// (`Vec<T>`). Entries are listed in traversal order; together they form
/// the node kind's row of the child-key table.
macro_rules! ast_node {
    ($ty:ident { $($key:literal => $field:ident: $mode:ident),* $(,)? }) => {
        impl $ty {
            /// Keys of the fields holding child nodes, in traversal order.
            pub const CHILD_KEYS: &'static [&'static str] = &[$($key),*];

            #[allow(unused_variables)]
            pub(crate) fn child(
                &self,
                key: &str,
            ) -> Option<$crate::ast::Child> {
                match key {
                    $($key => $crate::ast::child::$mode::read(&self.$field),)*
                    _ => None,
                }
            }

            #[allow(unused_variables)]
            pub(crate) fn set_child(
                &mut self,
                key: &'static str,
                value: Option<$crate::ast::Child>,
            ) -> Result<(), $crate::visitor::VisitError> {
                match key {
                    $($key => {
                        self.$field = $crate::ast::child::$mode::write(
                            $crate::ast::Kind::$ty,
                            key,
                            value,
                        )?;
                        Ok(())
                    },)*
                    _ => Err($crate::visitor::VisitError::UnknownChildKey {
                        parent: $crate::ast::Kind::$ty,
                        key,
                    }),
                }
            }
        }

        #[inherent::inherent]
        impl $crate::ast::AstNode for $ty {
            pub fn kind(&self) -> $crate::ast::Kind {
                $crate::ast::Kind::$ty
            }

            pub fn loc(&self) -> Option<&$crate::ast::Location> {
                self.loc.as_ref()
            }

            pub fn source_text(&self) -> Option<&str>;
        }
    };
}

/// Implements the plumbing shared by the AST's union enums
/// ([`Definition`](crate::ast::Definition),
/// [`Selection`](crate::ast::Selection), [`Value`](crate::ast::Value),
/// [`Type`](crate::ast::Type)): kind/location accessors and conversion
/// to and from [`Node`](crate::ast::Node).
macro_rules! ast_union {
    ($union:ident { $($variant:ident($kind:ident)),* $(,)? }) => {
        #[inherent::inherent]
        impl $crate::ast::AstNode for $union {
            pub fn kind(&self) -> $crate::ast::Kind {
                match self {
                    $($union::$variant(_) => $crate::ast::Kind::$kind,)*
                }
            }

            pub fn loc(&self) -> Option<&$crate::ast::Location> {
                match self {
                    $($union::$variant(node) => node.loc.as_ref(),)*
                }
            }

            pub fn source_text(&self) -> Option<&str>;
        }

        impl $crate::ast::NodeSlot for $union {
            fn to_node(&self) -> $crate::ast::Node {
                match self {
                    $($union::$variant(node) => {
                        $crate::ast::Node::$kind(::std::sync::Arc::clone(node))
                    },)*
                }
            }

            fn from_node(
                node: $crate::ast::Node,
            ) -> Result<Self, $crate::ast::Node> {
                match node {
                    $($crate::ast::Node::$kind(node) => Ok($union::$variant(node)),)*
                    other => Err(other),
                }
            }
        }

        impl From<$union> for $crate::ast::Node {
            fn from(value: $union) -> Self {
                $crate::ast::NodeSlot::to_node(&value)
            }
        }

        impl From<&$union> for $crate::ast::Node {
            fn from(value: &$union) -> Self {
                $crate::ast::NodeSlot::to_node(value)
            }
        }

        $(
            impl From<::std::sync::Arc<$kind>> for $union {
                fn from(node: ::std::sync::Arc<$kind>) -> Self {
                    $union::$variant(node)
                }
            }

            impl From<$kind> for $union {
                fn from(node: $kind) -> Self {
                    $union::$variant(::std::sync::Arc::new(node))
                }
            }
        )*
    };
}
