use crate::token::GraphQLToken;
use crate::Source;
use serde::Serialize;
use serde::ser::SerializeStruct;
use std::sync::Arc;

/// The span of source text a node was parsed from: from the start of its
/// first token to the end of its last token.
#[derive(Clone, Debug)]
pub struct Location {
    /// Byte offset at which the node begins.
    pub start: usize,

    /// Byte offset just past the node's last token.
    pub end: usize,

    /// The node's first token, detached from the lexer's token list:
    /// `prev` and `next` are always `None`.
    pub start_token: GraphQLToken,

    /// The node's last token, detached like `start_token`.
    pub end_token: GraphQLToken,

    pub source: Arc<Source>,
}

impl Location {
    /// Creates the location spanning `start_token` to `end_token`. The
    /// tokens' list links are cleared, since the list they index into
    /// does not outlive the parse.
    pub fn new(
        mut start_token: GraphQLToken,
        mut end_token: GraphQLToken,
        source: Arc<Source>,
    ) -> Self {
        for token in [&mut start_token, &mut end_token] {
            token.prev = None;
            token.next = None;
        }
        Self {
            start: start_token.start,
            end: end_token.end,
            start_token,
            end_token,
            source,
        }
    }

    /// The slice of the source body this location spans.
    pub fn source_text(&self) -> &str {
        self.source
            .body()
            .get(self.start..self.end)
            .unwrap_or_default()
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.start_token == other.start_token
            && self.end_token == other.end_token
            && (Arc::ptr_eq(&self.source, &other.source) || self.source == other.source)
    }
}

/// Serializes as `{ "start": .., "end": .. }`.
impl Serialize for Location {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Location", 2)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.end()
    }
}
