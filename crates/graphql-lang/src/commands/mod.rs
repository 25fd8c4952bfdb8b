mod complete;
mod extract;
mod validate;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use complete::CompleteCmd;
use extract::ExtractCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-lang")]
pub(crate) enum CommandEnum {
    /// Prints autocomplete suggestions for a position in a file.
    Complete(Box<CompleteCmd>),
    /// Prints the GraphQL documents found in a file.
    Extract(Box<ExtractCmd>),
    /// Assembles and validates a GraphQL project.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Complete(cmd) => cmd.run(cli).await,
            Self::Extract(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
