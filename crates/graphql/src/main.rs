mod cli;
mod command;
mod command_result;
mod commands;
mod graphql_files;
mod output_utils;
mod parse_args;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;
const VERBOSE_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("{error:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let default_level =
        if cli.verbose {
            VERBOSE_LOG_LEVEL
        } else {
            DEFAULT_LOG_LEVEL
        };
    let env_val =
        std::env::var("LOG_LEVEL")
            .map(|s| s.trim().to_string());
    let log_level =
        match env_val.as_deref() {
            Ok("ERROR" | "error") => tracing::Level::ERROR,
            Ok("WARN" | "warn") => tracing::Level::WARN,
            Ok("INFO" | "info") => tracing::Level::INFO,
            Ok("DEBUG" | "debug") => tracing::Level::DEBUG,
            Ok("VERBOSE" | "verbose") => tracing::Level::DEBUG,
            Ok("TRACE" | "trace") => tracing::Level::TRACE,
            Ok(other) => {
                log_level_warnings.push(format!(
                    "Invalid `LOG_LEVEL` environment variable value: \
                    `{other}`"
                ));
                default_level
            },
            Err(_) => default_level,
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}
