/// Coarse grouping of [`GraphQLErrorKind`](crate::GraphQLErrorKind)s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLErrorCategory {
    /// Raised by the lexer while scanning characters.
    Lexical,
    /// Raised by the parser on a well-formed token in the wrong place.
    Syntax,
    /// Raised when a configured parse limit is exceeded.
    ResourceLimit,
    Other,
}
