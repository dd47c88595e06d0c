use serde::Serialize;

/// The kind of a GraphQL token.
///
/// Token kinds carry no payload: the text of names, numbers, strings, and
/// comments lives in [`GraphQLToken::value`](crate::token::GraphQLToken).
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (an `Int`
/// token with value `"-123"`), not as separate minus and number tokens.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum GraphQLTokenKind {
    // =========================================================================
    // Synthetic stream markers
    // =========================================================================
    /// Start of file. Always the first token of a stream.
    Sof,
    /// End of file. Always the last token of a stream.
    Eof,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `&`
    Ampersand,
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Valued tokens
    // =========================================================================
    /// `[_A-Za-z][_0-9A-Za-z]*`
    Name,
    Int,
    Float,
    /// A `"`-delimited string. The token value is the unescaped content.
    String,
    /// A `"""`-delimited string. The token value is the dedented content.
    BlockString,
    /// A `#` line comment. The token value excludes the leading `#`.
    Comment,
}

impl GraphQLTokenKind {
    /// The canonical display form of this kind, as used in syntax error
    /// messages (`<EOF>`, `{`, `Name`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sof => "<SOF>",
            Self::Eof => "<EOF>",
            Self::Ampersand => "&",
            Self::At => "@",
            Self::Bang => "!",
            Self::Colon => ":",
            Self::CurlyBraceClose => "}",
            Self::CurlyBraceOpen => "{",
            Self::Dollar => "$",
            Self::Ellipsis => "...",
            Self::Equals => "=",
            Self::ParenClose => ")",
            Self::ParenOpen => "(",
            Self::Pipe => "|",
            Self::SquareBracketClose => "]",
            Self::SquareBracketOpen => "[",
            Self::Name => "Name",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::BlockString => "BlockString",
            Self::Comment => "Comment",
        }
    }

    pub fn is_punctuator(&self) -> bool {
        matches!(
            self,
            Self::Ampersand
                | Self::At
                | Self::Bang
                | Self::Colon
                | Self::CurlyBraceClose
                | Self::CurlyBraceOpen
                | Self::Dollar
                | Self::Ellipsis
                | Self::Equals
                | Self::ParenClose
                | Self::ParenOpen
                | Self::Pipe
                | Self::SquareBracketClose
                | Self::SquareBracketOpen
        )
    }

    /// Describes this kind for an error message: punctuators are quoted
    /// (`"{"`), everything else is shown bare (`Name`, `<EOF>`).
    pub fn description(&self) -> String {
        if self.is_punctuator() {
            format!("\"{}\"", self.as_str())
        } else {
            self.as_str().to_string()
        }
    }
}

impl std::fmt::Display for GraphQLTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
