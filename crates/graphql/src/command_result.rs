use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Output split across both streams; fails if `failed` is set.
    pub fn split(stdout: String, stderr: String, failed: bool) -> Self {
        Self {
            exit_code: if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS },
            stderr: (!stderr.is_empty()).then_some(stderr),
            stdout: (!stdout.is_empty()).then_some(stdout),
        }
    }
}

impl From<anyhow::Error> for CommandResult {
    fn from(error: anyhow::Error) -> Self {
        Self::stderr(format_args!("{} {error:#}", crate::output_utils::RED_X))
    }
}
