use crate::graphql_files;
use crate::graphql_files::FileDiscoveryArgs;
use crate::output_utils;
use crate::parse_args::ParseArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_language::parse;
use std::fmt::Write;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[command(flatten)]
    files: FileDiscoveryArgs,

    #[command(flatten)]
    parse_args: ParseArgs,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let file_paths = match self.files.discover() {
            Ok(file_paths) => file_paths,
            Err(error) => return error.into(),
        };

        let options = self.parse_args.parse_options();
        let results = graphql_files::run_per_file(file_paths, move |source| {
            parse(source, options.clone())
                .map(|doc| doc.definitions.len())
                .map_err(|error| anyhow::anyhow!(error.format_detailed()))
        }).await;
        let results = match results {
            Ok(results) => results,
            Err(error) => return error.into(),
        };

        let mut stdout = String::new();
        let mut stderr = String::new();
        let mut num_failed = 0;
        let mut num_definitions = 0;
        for (path, result) in &results {
            match result {
                Ok(definitions) => {
                    num_definitions += definitions;
                    let _ = writeln!(stdout, "{} {}", output_utils::GREEN_CHECK, path.display());
                },
                Err(error) => {
                    num_failed += 1;
                    let _ = writeln!(
                        stderr,
                        "{} {}\n{error:#}\n",
                        output_utils::RED_X,
                        path.display(),
                    );
                },
            }
        }

        if num_failed == 0 {
            let _ = write!(
                stdout,
                "{} Parsed {} ({}).",
                output_utils::GREEN_CHECK,
                output_utils::pluralize(results.len(), "file"),
                output_utils::pluralize(num_definitions, "definition"),
            );
        } else {
            let _ = write!(
                stderr,
                "{} {} of {} failed to parse.",
                output_utils::RED_X,
                num_failed,
                output_utils::pluralize(results.len(), "file"),
            );
        }
        CommandResult::split(stdout, stderr, num_failed > 0)
    }
}
