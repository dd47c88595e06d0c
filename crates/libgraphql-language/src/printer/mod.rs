//! Rendering AST nodes back to GraphQL source text.
//!
//! The output is canonical: ignored tokens (commas, comments, extra
//! whitespace) are dropped, selection sets and type bodies are printed
//! one member per line with two-space indentation, and field arguments
//! are wrapped onto their own lines once the field would exceed 80
//! columns. Re-parsing printed output yields the same tree, minus
//! locations.

mod print_string;
mod print_visitor;

pub use print_string::print_string;

use crate::ast::Node;
use crate::visitor::visit;
use print_visitor::PrintVisitor;

/// Prints any AST node (a whole [`Document`](crate::ast::Document) or any
/// fragment of one).
///
/// # Example
///
/// ```
/// use libgraphql_language::parse;
/// use libgraphql_language::print;
/// use libgraphql_language::ParseOptions;
///
/// let doc = parse("query Q($id: ID!) { node(id: $id) { id, ...F } }", ParseOptions::default())
///     .unwrap();
/// assert_eq!(
///     print(doc),
///     "query Q($id: ID!) {\n  node(id: $id) {\n    id\n    ...F\n  }\n}",
/// );
/// ```
pub fn print(node: impl Into<Node>) -> String {
    let mut printer = PrintVisitor::default();
    // The printer neither edits nor fails, so the traversal result carries
    // nothing beyond what the printer collected.
    let _ = visit(node, &mut printer);
    printer.into_output()
}
