mod ast;
mod check;
mod fmt;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use ast::AstCmd;
use check::CheckCmd;
use fmt::FmtCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Dump a document's syntax tree as JSON.
    Ast(Box<AstCmd>),

    /// Check that GraphQL files parse.
    Check(Box<CheckCmd>),

    /// Print GraphQL files in canonical form.
    Fmt(Box<FmtCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Ast(cmd) => cmd.run(cli).await,
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Fmt(cmd) => cmd.run(cli).await,
        }
    }
}
