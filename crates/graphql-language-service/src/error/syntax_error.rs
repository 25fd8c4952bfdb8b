use crate::error::GQLError;
use crate::error::Severity;
use crate::error::ToGQLError;
use crate::loc;
use graphql_online_parser::Document;
use graphql_online_parser::Position;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

/// A GraphQL grammar error in one document.
///
/// `graphql_parser` bakes the error position into its message text
/// (`"schema parse error: Parse error at 3:7\nUnexpected ..."`); that prefix
/// is stripped from `message` and kept as `location` so editors don't show
/// the position twice.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("Syntax Error: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub location: loc::FilePosition,
}
impl SyntaxError {
    pub fn from_parse_error(file: &Path, err: &impl std::fmt::Display) -> Self {
        static PARSE_ERROR_PREFIX: OnceLock<Regex> = OnceLock::new();
        let prefix = PARSE_ERROR_PREFIX.get_or_init(|| {
            Regex::new(
                r"(?s)^(?:\w+ )?parse error: Parse error at (\d+):(\d+)\s*(.*)$"
            ).expect("parse error prefix regex is valid")
        });

        let raw = err.to_string();
        let Some(caps) = prefix.captures(&raw) else {
            return Self {
                message: raw.trim().to_string(),
                location: loc::FilePosition::new(file, 1, 1),
            };
        };

        let line = caps[1].parse().unwrap_or(1);
        let col = caps[2].parse().unwrap_or(1);
        let message =
            caps[3].lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("; ");
        Self {
            message:
                if message.is_empty() {
                    "Unexpected end of input".to_string()
                } else {
                    message
                },
            location: loc::FilePosition::new(file, line, col),
        }
    }

    /// Moves this error to another position in the same file (used when the
    /// parsed text was extracted from a host file).
    pub fn relocated(mut self, line: usize, col: usize) -> Self {
        self.location.line = line;
        self.location.col = col;
        self
    }

    /// Maps a location reported against `document`'s text onto `host`, the
    /// file the document was extracted from.
    pub fn mapped_to_host(self, host: &str, document: &Document) -> Self {
        let position = document.to_host_position(
            host,
            Position::new(self.location.line, self.location.col),
        );
        self.relocated(position.line, position.column)
    }
}
impl ToGQLError for SyntaxError {
    fn to_gql_error(&self) -> GQLError {
        GQLError::new(self.to_string(), Severity::Error, [&self.location])
    }
}
