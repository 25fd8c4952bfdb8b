use crate::loc;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warn,
    Error,
}

/// A 1-indexed position within an (absolute) file path.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct GQLErrorLocation {
    pub line: usize,
    pub column: usize,
    pub path: PathBuf,
}
impl std::convert::From<&loc::FilePosition> for GQLErrorLocation {
    fn from(value: &loc::FilePosition) -> Self {
        Self {
            line: value.line,
            column: value.col,
            path: value.file.to_owned(),
        }
    }
}

/// The diagnostic every parse, build and validation failure is normalized
/// into before it is shown to a user.
///
/// `locations` is `None` for project-level diagnostics that can't be pinned
/// to a specific place in a file (e.g. "no schema files matched").
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct GQLError {
    pub message: String,
    pub severity: Severity,
    pub locations: Option<Vec<GQLErrorLocation>>,
}
impl GQLError {
    pub fn new<'a>(
        message: impl Into<String>,
        severity: Severity,
        locations: impl IntoIterator<Item = &'a loc::FilePosition>,
    ) -> Self {
        let locations =
            locations.into_iter()
                .map(GQLErrorLocation::from)
                .collect::<Vec<_>>();
        Self {
            message: message.into(),
            severity,
            locations: if locations.is_empty() { None } else { Some(locations) },
        }
    }

    /// Builds an error from [`SourceLocation`](loc::SourceLocation)s,
    /// dropping any that point at GraphQL built-ins.
    pub fn at_source_locations<'a>(
        message: impl Into<String>,
        severity: Severity,
        locations: impl IntoIterator<Item = &'a loc::SourceLocation>,
    ) -> Self {
        Self::new(
            message,
            severity,
            locations.into_iter().filter_map(|loc| loc.file_position()),
        )
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
impl std::fmt::Display for GQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(location) = self.locations.as_ref().and_then(|locs| locs.first()) {
            write!(
                f,
                "{}:{}:{}: ",
                location.path.display(),
                location.line,
                location.column,
            )?;
        }
        write!(f, "{}", self.message)
    }
}

/// Conversion of an error kind into its user-facing [`GQLError`].
pub trait ToGQLError {
    fn to_gql_error(&self) -> GQLError;
}
