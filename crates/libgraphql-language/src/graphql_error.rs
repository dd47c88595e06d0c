use crate::ast::Node;
use crate::print_location::print_location;
use crate::print_location::print_source_location;
use crate::GraphQLErrorKind;
use crate::Source;
use crate::SourceLocation;
use smallvec::SmallVec;
use std::sync::Arc;

/// A structured error carrying a message, the AST nodes it concerns, and
/// the source position(s) it points at.
///
/// Every failure surfaced by the lexer and parser is a `GraphQLError`, as
/// is any error a visitor callback chooses to raise. Positions are byte
/// offsets into [`Source::body`]; [`locations()`](Self::locations)
/// translates them into 1-based line/column pairs.
///
/// Positions and source are taken from the explicit values given to
/// [`with_source`](Self::with_source)/[`with_positions`](Self::with_positions)
/// when present, and otherwise derived from the `loc` of the attached
/// nodes.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLError {
    message: String,
    kind: GraphQLErrorKind,
    nodes: Vec<Node>,
    graphql_source: Option<Arc<Source>>,
    positions: SmallVec<[usize; 1]>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>, kind: GraphQLErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
            nodes: Vec::new(),
            graphql_source: None,
            positions: SmallVec::new(),
        }
    }

    /// Creates a syntax error located at a single byte offset of
    /// `source`. The message is prefixed with `Syntax Error: `.
    pub fn syntax(
        source: &Arc<Source>,
        position: usize,
        description: impl AsRef<str>,
        kind: GraphQLErrorKind,
    ) -> Self {
        Self {
            message: format!("Syntax Error: {}", description.as_ref()),
            kind,
            nodes: Vec::new(),
            graphql_source: Some(Arc::clone(source)),
            positions: smallvec::smallvec![position],
        }
    }

    /// Attaches AST nodes to this error.
    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    pub fn with_source(mut self, source: Arc<Source>) -> Self {
        self.graphql_source = Some(source);
        self
    }

    pub fn with_positions(mut self, positions: impl IntoIterator<Item = usize>) -> Self {
        self.positions = positions.into_iter().collect();
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &GraphQLErrorKind {
        &self.kind
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The source this error points into: the explicit source if one was
    /// given, else the source of the first attached node with a location.
    pub fn graphql_source(&self) -> Option<&Arc<Source>> {
        self.graphql_source.as_ref().or_else(|| {
            self.nodes
                .iter()
                .find_map(|node| node.loc())
                .map(|loc| &loc.source)
        })
    }

    /// Positions this error points at: the explicit positions if any
    /// were given, else the start of every attached node's location.
    ///
    /// Each position is a UTF-8 byte offset into
    /// [`Source::body`](crate::Source::body), not a character count. Use
    /// [`locations()`](Self::locations) for line and character column.
    pub fn positions(&self) -> Vec<usize> {
        if !self.positions.is_empty() {
            return self.positions.to_vec();
        }
        self.nodes
            .iter()
            .filter_map(|node| node.loc())
            .map(|loc| loc.start)
            .collect()
    }

    /// Line/column pairs (relative to the source body) for
    /// [`positions()`](Self::positions).
    pub fn locations(&self) -> Vec<SourceLocation> {
        if !self.positions.is_empty()
            && let Some(source) = &self.graphql_source
        {
            return self
                .positions
                .iter()
                .map(|position| source.location_at(*position))
                .collect();
        }
        self.nodes
            .iter()
            .filter_map(|node| node.loc())
            .map(|loc| loc.source.location_at(loc.start))
            .collect()
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// schema.graphql:5:12: Syntax Error: Expected Name, found <EOF>.
    /// ```
    ///
    /// The line/column include the source's location offset. Errors with
    /// no known location render as the bare message.
    pub fn format_oneline(&self) -> String {
        let located = self
            .graphql_source()
            .zip(self.locations().first().copied());
        match located {
            Some((source, location)) => {
                let location = source.offset_location(location);
                format!(
                    "{}:{}:{}: {}",
                    source.name(),
                    location.line,
                    location.column,
                    self.message,
                )
            },
            None => self.message.clone(),
        }
    }

    /// Formats this error as the message followed by a source excerpt for
    /// every location it points at.
    ///
    /// Produces output like:
    /// ```text
    /// Syntax Error: Expected Name, found <EOF>.
    ///
    /// GraphQL request:1:9
    /// 1 | { a(b: 1
    ///   |         ^
    /// ```
    pub fn format_detailed(&self) -> String {
        let mut output = self.message.clone();
        if !self.nodes.is_empty() {
            for loc in self.nodes.iter().filter_map(|node| node.loc()) {
                output.push_str("\n\n");
                output.push_str(&print_location(loc));
            }
        } else if let Some(source) = &self.graphql_source {
            for location in self.locations() {
                output.push_str("\n\n");
                output.push_str(&print_source_location(source, location));
            }
        }
        output
    }
}

impl PartialEq for GraphQLError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.kind == other.kind
            && self.positions() == other.positions()
    }
}
