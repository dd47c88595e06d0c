use crate::graphql_files;
use crate::graphql_files::FileDiscoveryArgs;
use crate::output_utils;
use crate::parse_args::ParseArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_language::parse;
use libgraphql_language::print;
use std::fmt::Write;

#[derive(Debug, clap::Args)]
pub(crate) struct FmtCmd {
    #[arg(
        help="Print nothing but the paths of files that are not already in \
             canonical form, and fail if there are any.",
        long,
    )]
    check: bool,

    #[command(flatten)]
    files: FileDiscoveryArgs,

    #[command(flatten)]
    parse_args: ParseArgs,
}

struct Formatted {
    is_canonical: bool,
    printed: String,
}

/// Whether `body` already is `printed`, give or take a final newline.
fn is_canonical(body: &str, printed: &str) -> bool {
    body.strip_suffix('\n').unwrap_or(body) == printed
}

#[inherent::inherent]
impl RunnableCommand for FmtCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let file_paths = match self.files.discover() {
            Ok(file_paths) => file_paths,
            Err(error) => return error.into(),
        };

        let options = self.parse_args.parse_options();
        let results = graphql_files::run_per_file(file_paths, move |source| {
            let body = source.body().to_string();
            let doc = parse(source, options.clone())
                .map_err(|error| anyhow::anyhow!(error.format_detailed()))?;
            let printed = print(doc);
            Ok(Formatted {
                is_canonical: is_canonical(&body, &printed),
                printed,
            })
        }).await;
        let results = match results {
            Ok(results) => results,
            Err(error) => return error.into(),
        };

        let print_headers = results.len() > 1;
        let mut stdout = String::new();
        let mut stderr = String::new();
        let mut num_failed = 0;
        let mut num_changed = 0;
        for (path, result) in &results {
            let formatted = match result {
                Ok(formatted) => formatted,
                Err(error) => {
                    num_failed += 1;
                    let _ = writeln!(
                        stderr,
                        "{} {}\n{error:#}\n",
                        output_utils::RED_X,
                        path.display(),
                    );
                    continue;
                },
            };

            if self.check {
                if !formatted.is_canonical {
                    num_changed += 1;
                    let _ = writeln!(stdout, "{}", path.display());
                }
            } else {
                if print_headers {
                    let _ = writeln!(stdout, "# {}", path.display());
                }
                let _ = writeln!(stdout, "{}", formatted.printed);
            }
        }

        if self.check && num_changed > 0 {
            let _ = write!(
                stderr,
                "{} {} not in canonical form.",
                output_utils::RED_X,
                output_utils::pluralize(num_changed, "file"),
            );
        }
        CommandResult::split(
            stdout.trim_end().to_string(),
            stderr.trim_end().to_string(),
            num_failed > 0 || num_changed > 0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::is_canonical;

    /// Verifies that a single trailing newline does not count as a
    /// formatting difference.
    #[test]
    fn trailing_newline_is_canonical() {
        assert!(is_canonical("{\n  a\n}\n", "{\n  a\n}"));
        assert!(is_canonical("{\n  a\n}", "{\n  a\n}"));
        assert!(!is_canonical("{\n  a\n}\n\n", "{\n  a\n}"));
        assert!(!is_canonical("{ a }", "{\n  a\n}"));
    }
}
