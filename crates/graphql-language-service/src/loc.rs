use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes the path of the file it points into.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}
impl FilePosition {
    pub fn new(file: impl Into<PathBuf>, line: usize, col: usize) -> Self {
        Self {
            col,
            file: file.into(),
            line,
        }
    }

    pub(crate) fn from_pos(file: &Path, pos: graphql_parser::Pos) -> Self {
        Self {
            col: pos.column,
            file: file.to_path_buf(),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Where something in a [`Schema`](crate::schema::Schema) was defined.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum SourceLocation {
    /// Implicitly defined by GraphQL itself (e.g. `String`, `@deprecated`).
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl SourceLocation {
    pub fn file_position(&self) -> Option<&FilePosition> {
        match self {
            Self::GraphQLBuiltIn => None,
            Self::Schema(pos) => Some(pos),
        }
    }
}
impl std::convert::From<FilePosition> for SourceLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}
