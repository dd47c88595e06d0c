use libgraphql_language::ParseOptions;

/// Parser settings shared by every command that parses documents.
#[derive(Clone, Debug, clap::Args)]
pub(crate) struct ParseArgs {
    #[arg(
        help="Accept variable definitions on fragments \
             (`fragment F($v: Int) on T`).",
        long,
    )]
    allow_legacy_fragment_variables: bool,

    #[arg(
        help="Abort parsing a document with more than this many tokens.",
        long,
    )]
    max_tokens: Option<usize>,

    #[arg(
        help="Abort parsing a document whose selection sets, values, or \
             types nest deeper than this (default: 64).",
        long,
    )]
    max_depth: Option<usize>,
}

impl ParseArgs {
    pub(crate) fn parse_options(&self) -> ParseOptions {
        let options = ParseOptions::default()
            .allow_legacy_fragment_variables(self.allow_legacy_fragment_variables)
            .max_tokens(self.max_tokens);
        match self.max_depth {
            Some(max_depth) => options.max_depth(Some(max_depth)),
            None => options,
        }
    }
}
