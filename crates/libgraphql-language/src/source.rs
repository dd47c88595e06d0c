use crate::GraphQLError;
use crate::GraphQLErrorKind;
use crate::SourceLocation;
use memchr::memchr2;
use std::sync::Arc;

/// Immutable GraphQL source text together with a human-readable name and
/// the line/column at which the text begins in its enclosing file.
///
/// The location offset exists for GraphQL embedded inside other files (a
/// tagged template literal in a JS file, a heredoc in a Ruby file, etc.):
/// diagnostics computed against the body are shifted by the offset so
/// they point into the enclosing file.
///
/// # Example
///
/// ```
/// use libgraphql_language::Source;
/// use libgraphql_language::SourceLocation;
///
/// let source = Source::new("{ hero { name } }")
///     .with_name("Hero.graphql")
///     .with_location_offset(SourceLocation::new(10, 4))
///     .unwrap();
/// assert_eq!(source.name(), "Hero.graphql");
/// assert_eq!(source.location_offset().line, 10);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    body: String,
    name: String,
    location_offset: SourceLocation,
}

impl Source {
    /// The name given to a source when none is provided.
    pub const DEFAULT_NAME: &'static str = "GraphQL request";

    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: Self::DEFAULT_NAME.to_string(),
            location_offset: SourceLocation::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the 1-based line/column at which the body begins.
    ///
    /// Fails if either component is 0.
    pub fn with_location_offset(
        mut self,
        location_offset: SourceLocation,
    ) -> Result<Self, GraphQLError> {
        if location_offset.line == 0 {
            return Err(GraphQLError::new(
                "line in locationOffset is 1-indexed and must be positive.",
                GraphQLErrorKind::Other,
            ));
        }
        if location_offset.column == 0 {
            return Err(GraphQLError::new(
                "column in locationOffset is 1-indexed and must be positive.",
                GraphQLErrorKind::Other,
            ));
        }
        self.location_offset = location_offset;
        Ok(self)
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location_offset(&self) -> SourceLocation {
        self.location_offset
    }

    /// Translates a byte offset into the body into a 1-based line/column
    /// pair relative to the body (the location offset is not applied).
    ///
    /// `\r\n`, `\n`, and `\r` each terminate a line. Offsets past the end
    /// of the body are clamped to the body length.
    pub fn location_at(&self, position: usize) -> SourceLocation {
        let bytes = self.body.as_bytes();
        let position = position.min(bytes.len());
        let mut line = 1;
        let mut line_start = 0;
        let mut cursor = 0;
        while cursor < position
            && let Some(offset) = memchr2(b'\n', b'\r', &bytes[cursor..position])
        {
            let terminator = cursor + offset;
            let terminator_len =
                if bytes[terminator] == b'\r' && bytes.get(terminator + 1) == Some(&b'\n') {
                    2
                } else {
                    1
                };
            line += 1;
            line_start = terminator + terminator_len;
            cursor = line_start;
        }

        // A position pointing at the `\n` of a `\r\n` pair lands "before"
        // the start of the line that pair opens.
        let column = if line_start > position {
            0
        } else {
            match self.body.get(line_start..position) {
                Some(prefix) => prefix.chars().count() + 1,
                None => position - line_start + 1,
            }
        };
        SourceLocation { line, column }
    }

    /// Shifts a body-relative location by this source's location offset.
    /// The column offset only applies on the first line.
    pub fn offset_location(&self, location: SourceLocation) -> SourceLocation {
        let column_offset = if location.line == 1 {
            self.location_offset.column - 1
        } else {
            0
        };
        SourceLocation {
            line: location.line + self.location_offset.line - 1,
            column: location.column + column_offset,
        }
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Source::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Source::new(body)
    }
}

impl From<&String> for Source {
    fn from(body: &String) -> Self {
        Source::new(body.as_str())
    }
}

/// Anything that can be handed to the parser as GraphQL source text.
///
/// Implemented for string types (which are wrapped in a default-named
/// [`Source`]), for [`Source`] itself, and for an already-shared
/// `Arc<Source>` so that many parses can share one source.
pub trait IntoSource {
    fn into_source(self) -> Arc<Source>;
}

impl IntoSource for Arc<Source> {
    fn into_source(self) -> Arc<Source> {
        self
    }
}

impl IntoSource for &Arc<Source> {
    fn into_source(self) -> Arc<Source> {
        Arc::clone(self)
    }
}

impl IntoSource for Source {
    fn into_source(self) -> Arc<Source> {
        Arc::new(self)
    }
}

impl IntoSource for &str {
    fn into_source(self) -> Arc<Source> {
        Arc::new(Source::new(self))
    }
}

impl IntoSource for String {
    fn into_source(self) -> Arc<Source> {
        Arc::new(Source::new(self))
    }
}

impl IntoSource for &String {
    fn into_source(self) -> Arc<Source> {
        Arc::new(Source::new(self.as_str()))
    }
}
