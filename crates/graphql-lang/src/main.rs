mod cli;
mod command;
mod command_result;
mod commands;
mod file_discovery;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

#[cfg(test)]
mod tests;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        };
    };

    let CommandResult { exit_code, stdout, stderr } = command.run(&cli).await;
    if let Some(stdout) = stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = stderr {
        eprintln!("{stderr}");
    }
    exit_code
}

/// Picks the log level from `--verbose`, then the `LOG_LEVEL` environment
/// variable, then [`DEFAULT_LOG_LEVEL`].
fn setup_logger(cli: &Cli) {
    let (log_level, rejected) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            match std::env::var("LOG_LEVEL") {
                Ok(value) => match parse_log_level(&value) {
                    Some(level) => (level, None),
                    None => (DEFAULT_LOG_LEVEL, Some(value)),
                },
                Err(_) => (DEFAULT_LOG_LEVEL, None),
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{log_level}`.");

    if let Some(value) = rejected {
        log::warn!("Ignoring invalid `LOG_LEVEL` environment variable value: `{value}`");
    }
}

/// Accepts `tracing`'s level names (any case) plus `verbose` as an alias
/// for `debug`.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("verbose") {
        return Some(tracing::Level::DEBUG);
    }
    value.parse::<tracing::Level>().ok()
}
