use clap::CommandFactory;
use crate::commands;

/// Command-line front end for the GraphQL language service: validates
/// schema projects, extracts embedded documents and runs completions.
#[derive(clap::Parser, Debug)]
#[command(
    name = "graphql-lang",
    about = "Validate GraphQL schemas and query embedded GraphQL documents.",
    version,
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Log debug-level diagnostics to stderr.",
        global=true,
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand there is nothing to run; print usage instead.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        println!();
        Ok(())
    }
}
