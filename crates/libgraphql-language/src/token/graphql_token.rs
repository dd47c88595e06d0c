use crate::token::GraphQLTokenKind;
use crate::token::TokenId;
use serde::Serialize;

/// A lexical token along with its position in the source.
///
/// Tokens form a doubly-linked list (via `prev`/`next`) owned by the
/// [`GraphQLLexer`](crate::GraphQLLexer) that produced them. The list
/// begins with a `<SOF>` token, ends with an `<EOF>` token, and includes
/// comment tokens which the lexer's public traversal skips.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GraphQLToken {
    pub kind: GraphQLTokenKind,

    /// Byte offset of the first byte of this token.
    pub start: usize,

    /// Byte offset just past the last byte of this token.
    pub end: usize,

    /// 1-indexed line on which this token starts.
    pub line: usize,

    /// 1-indexed column (in characters) at which this token starts.
    pub column: usize,

    /// The interpreted text of `Name`, `Int`, `Float`, `String`,
    /// `BlockString`, and `Comment` tokens. `None` for punctuators and
    /// stream markers.
    pub value: Option<String>,

    pub prev: Option<TokenId>,
    pub next: Option<TokenId>,
}

impl GraphQLToken {
    /// Describes this token for an error message, e.g. `Name "foo"`,
    /// `"{"`, or `<EOF>`.
    pub fn description(&self) -> String {
        match &self.value {
            Some(value) => format!("{} \"{value}\"", self.kind.description()),
            None => self.kind.description(),
        }
    }

    pub(crate) fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}
