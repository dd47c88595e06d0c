use crate::ast::Kind;
use crate::ast::Location;

/// Trait implemented by every AST node type (and by [`Node`] and the
/// union enums).
///
/// All implementors use `#[inherent] impl AstNode`, giving each node
/// these methods inherently (no trait import needed) along with a trait
/// bound for generic utilities.
///
/// [`Node`]: crate::ast::Node
pub trait AstNode {
    fn kind(&self) -> Kind;

    fn loc(&self) -> Option<&Location>;

    /// The original source text this node was parsed from, or `None` when
    /// the node carries no location.
    fn source_text(&self) -> Option<&str> {
        self.loc().map(Location::source_text)
    }
}
