/// Options accepted by [`parse`](crate::parse) and the other parse entry
/// points.
///
/// # Example
///
/// ```
/// use libgraphql_language::ParseOptions;
///
/// let options = ParseOptions::default()
///     .no_location(true)
///     .max_tokens(Some(10_000));
/// assert_eq!(options.max_tokens, Some(10_000));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseOptions {
    /// Omit `loc` from every produced node.
    pub no_location: bool,

    /// Accept variable definitions on fragment definitions, e.g.
    /// `fragment A($v: Int) on T { ... }`. This is a deprecated syntax
    /// that some older tooling still emits.
    pub allow_legacy_fragment_variables: bool,

    /// Abort once more than this many tokens (not counting `<EOF>` or
    /// comments) have been consumed.
    pub max_tokens: Option<usize>,

    /// Abort once selection sets, values, or type references nest deeper
    /// than this. Parsing recurses once per level, so `None` is only safe
    /// for trusted input or on a thread with a correspondingly large
    /// stack.
    pub max_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            no_location: false,
            allow_legacy_fragment_variables: false,
            max_tokens: None,
            max_depth: Some(Self::DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParseOptions {
    /// Default for [`max_depth`](Self::max_depth).
    ///
    /// Real documents rarely nest more than 15 levels. 64 keeps the
    /// recursion within a 2 MiB thread stack even in unoptimized builds,
    /// where each level costs several kilobytes of stack.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    pub fn no_location(mut self, no_location: bool) -> Self {
        self.no_location = no_location;
        self
    }

    pub fn allow_legacy_fragment_variables(mut self, allow: bool) -> Self {
        self.allow_legacy_fragment_variables = allow;
        self
    }

    pub fn max_tokens(mut self, max_tokens: Option<usize>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}
