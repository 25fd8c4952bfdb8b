use crate::Cli;
use crate::CommandResult;

/// A `graphql-lang` subcommand.
///
/// Each subcommand runs once per process. Global flags are read from `cli`;
/// anything the command prints goes to stdout, diagnostics go to the log.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
