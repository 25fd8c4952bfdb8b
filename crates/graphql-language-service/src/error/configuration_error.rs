use crate::file_reader::ReadContentError;
use graphql_online_parser::DelimiterPatternError;
use std::path::PathBuf;
use thiserror::Error;

/// A fatal problem with the project configuration. Only ever produced while
/// loading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Invalid embedded-document delimiter in configuration: {0}")]
    InvalidDelimiterPattern(#[from] DelimiterPatternError),

    #[error(
        "Unable to parse configuration{}: {err}",
        path.as_ref()
            .map(|path| format!(" file `{}`", path.display()))
            .unwrap_or_default(),
    )]
    InvalidJson {
        path: Option<PathBuf>,
        #[source]
        err: serde_json::Error,
    },

    #[error(transparent)]
    Unreadable(#[from] ReadContentError),
}
