use crate::graphql_files;
use crate::parse_args::ParseArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_language::parse;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct AstCmd {
    #[arg(
        help="Omit `loc` from every node.",
        long,
    )]
    no_location: bool,

    #[command(flatten)]
    parse_args: ParseArgs,

    #[arg(
        help="Path to the GraphQL file to dump.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

impl AstCmd {
    async fn dump(self) -> anyhow::Result<String> {
        let source = graphql_files::read_source(&self.file_path).await?;
        let options = self.parse_args
            .parse_options()
            .no_location(self.no_location);
        tokio::task::spawn_blocking(move || {
            let doc = parse(source, options)
                .map_err(|error| anyhow::anyhow!(error.format_detailed()))?;
            serde_json::to_string_pretty(&doc)
                .context("Failed to serialize the syntax tree")
        })
        .await
        .context("The parse task panicked or was cancelled")?
    }
}

#[inherent::inherent]
impl RunnableCommand for AstCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.dump().await {
            Ok(json) => CommandResult::stdout(format_args!("{json}")),
            Err(error) => error.into(),
        }
    }
}
