use crate::ast;
use crate::error::SyntaxError;
use crate::loc;
use graphql_online_parser::Document;
use graphql_online_parser::Position;
use graphql_parser::Pos;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// One GraphQL document's worth of SDL together with its parse result.
///
/// `source` is the text that was parsed. For documents extracted from host
/// files this is the offset-preserving document text: byte offsets and
/// lines agree with `host`, columns may not.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDocument {
    pub(crate) ast: Result<ast::schema::Document, SyntaxError>,
    /// The file `source` was extracted from, when it is not the whole file.
    pub(crate) host: Option<Arc<str>>,
    pub(crate) path: PathBuf,
    pub(crate) source: String,
}
impl SchemaDocument {
    pub fn parse(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        let path = path.into();
        let source = source.into();
        let ast =
            graphql_parser::schema::parse_schema::<String>(&source)
                .map(|doc| doc.into_static())
                .map_err(|err| SyntaxError::from_parse_error(&path, &err));
        Self {
            ast,
            host: None,
            path,
            source,
        }
    }

    /// Parses a document extracted from the host file at `path`. Every
    /// location derived from it, syntax errors included, is reported
    /// against `host`.
    pub fn parse_extracted(path: impl Into<PathBuf>, host: &Arc<str>, document: &Document) -> Self {
        let mut parsed = Self::parse(path, document.text.as_str());
        if document.is_embedded() {
            parsed.ast = parsed.ast.map_err(|err| err.mapped_to_host(host, document));
            parsed.host = Some(Arc::clone(host));
        }
        parsed
    }

    /// The location in the host file of an AST position from this document.
    pub fn file_position(&self, pos: Pos) -> loc::FilePosition {
        let Some(host) = &self.host else {
            return loc::FilePosition::from_pos(&self.path, pos);
        };
        let offset = Position::new(pos.line, pos.column).to_offset(&self.source);
        let position = Position::from_offset(host, offset);
        loc::FilePosition::new(&self.path, position.line, position.column)
    }

    pub fn ast(&self) -> Result<&ast::schema::Document, &SyntaxError> {
        self.ast.as_ref()
    }

    /// Number of top-level definitions (zero when the document didn't parse).
    pub fn definition_count(&self) -> usize {
        self.ast.as_ref().map_or(0, |doc| doc.definitions.len())
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    pub fn syntax_error(&self) -> Option<&SyntaxError> {
        self.ast.as_ref().err()
    }
}
