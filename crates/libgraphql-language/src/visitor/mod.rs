//! Depth-first traversal and transformation of AST trees.
//!
//! [`visit`] walks a tree with an explicit stack, calling a [`Visitor`] on
//! entry to and exit from each node. Callbacks steer the walk by
//! returning a [`VisitAction`]: skip a subtree, remove or replace the
//! current node, or stop altogether. Edits are deferred until the parent
//! is left and then applied copy-on-write, so the original tree is never
//! modified and unedited subtrees are shared between the two.
//!
//! Which fields of a node are children, and in what order they are
//! walked, comes from the child-key table ([`Kind::child_keys`] by
//! default, or any [`ChildKeyTable`] via [`visit_with_key_table`]).
//!
//! [`Kind::child_keys`]: crate::ast::Kind::child_keys

mod child_key_table;
mod parallel_visitor;
mod visit;
mod visit_action;
mod visit_context;
mod visit_error;
#[allow(clippy::module_inception)]
mod visitor;
mod visitor_fns;

pub use child_key_table::ChildKeyTable;
pub use child_key_table::DefaultChildKeys;
pub use parallel_visitor::visit_in_parallel;
pub use parallel_visitor::ParallelVisitor;
pub use visit::visit;
pub use visit::visit_with_key_table;
pub use visit_action::VisitAction;
pub use visit_context::PathSegment;
pub use visit_context::VisitContext;
pub use visit_error::VisitError;
pub use visitor::Visitor;
pub use visitor_fns::VisitorFns;
