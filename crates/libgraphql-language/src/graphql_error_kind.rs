use crate::GraphQLErrorCategory;

/// Categorizes errors for programmatic handling.
///
/// The `#[error(...)]` messages are concise/programmatic. Full
/// human-readable messages are in `GraphQLError::message()`.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GraphQLErrorKind {
    // =========================================================================
    // Lexical errors
    // =========================================================================
    /// A valid character that cannot begin any token.
    ///
    /// # Example
    /// ```text
    /// { name 'x' }
    ///        ^ Unexpected single quote character (')
    /// ```
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// A string or block string with no closing quote, or a `"` string
    /// containing a raw line terminator.
    ///
    /// # Example
    /// ```text
    /// { f(a: "unterminated) }
    ///                       ^ Unterminated string.
    /// ```
    #[error("unterminated string")]
    UnterminatedString,

    /// A `\`-escape in a string that is not one of `\" \\ \/ \b \f \n \r
    /// \t`, or a malformed `\u` escape.
    #[error("invalid escape sequence")]
    InvalidEscapeSequence,

    /// A numeric literal with a leading zero, a missing digit, or a
    /// trailing name character.
    ///
    /// # Example
    /// ```text
    /// { f(a: 0123) }
    ///         ^ Invalid number, unexpected digit after 0: "1".
    /// ```
    #[error("invalid number")]
    InvalidNumber,

    // =========================================================================
    // Syntax errors
    // =========================================================================
    /// A token that no production at this point accepts.
    #[error("unexpected token: {found}")]
    UnexpectedToken {
        /// Description of the token found (e.g. `Name "foo"`).
        found: String,
    },

    /// A specific token (or keyword) was required but something else was
    /// found.
    ///
    /// # Example
    /// ```text
    /// { a(b: 1
    ///         ^ Expected Name, found <EOF>.
    /// ```
    #[error("expected {expected}, found {found}")]
    ExpectedToken {
        expected: String,
        found: String,
    },

    /// A description string preceding something other than a type-system
    /// definition.
    #[error("unexpected description")]
    UnexpectedDescription,

    /// `true`, `false`, or `null` used as an enum value name.
    #[error("reserved name: {name}")]
    ReservedName {
        name: String,
    },

    /// A `$variable` inside a value that must be constant (default values,
    /// type-system directive arguments).
    #[error("unexpected variable `${name}` in constant value")]
    UnexpectedVariable {
        name: String,
    },

    /// A directive definition naming a location outside the
    /// `DirectiveLocation` set.
    #[error("invalid directive location: {name}")]
    InvalidDirectiveLocation {
        name: String,
    },

    // =========================================================================
    // Resource limits
    // =========================================================================
    /// The document has more tokens than `ParseOptions::max_tokens`
    /// allows.
    #[error("token limit of {max_tokens} exceeded")]
    TokenLimitExceeded {
        max_tokens: usize,
    },

    /// The document nests selections, values, or types deeper than
    /// `ParseOptions::max_depth` allows.
    #[error("nesting limit of {max_depth} exceeded")]
    NestingLimitExceeded {
        max_depth: usize,
    },

    // =========================================================================
    // Everything else
    // =========================================================================
    /// An error raised outside of lexing and parsing, e.g. by a visitor
    /// callback or while constructing a `Source`.
    #[error("error")]
    Other,
}

impl GraphQLErrorKind {
    pub fn category(&self) -> GraphQLErrorCategory {
        match self {
            Self::UnexpectedCharacter
            | Self::UnterminatedString
            | Self::InvalidEscapeSequence
            | Self::InvalidNumber => GraphQLErrorCategory::Lexical,

            Self::UnexpectedToken { .. }
            | Self::ExpectedToken { .. }
            | Self::UnexpectedDescription
            | Self::ReservedName { .. }
            | Self::UnexpectedVariable { .. }
            | Self::InvalidDirectiveLocation { .. } => GraphQLErrorCategory::Syntax,

            Self::TokenLimitExceeded { .. }
            | Self::NestingLimitExceeded { .. } => GraphQLErrorCategory::ResourceLimit,

            Self::Other => GraphQLErrorCategory::Other,
        }
    }
}
