use crate::error::GQLError;
use crate::error::SchemaBuildError;
use crate::error::SyntaxError;
use crate::error::ToGQLError;
use crate::file_reader::ReadContentError;
use crate::loc;
use crate::schema::SchemaDocument;
use graphql_online_parser::Document;
use std::path::Path;
use std::sync::Arc;

/// Whether a file contributes to the schema or holds executable documents.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    Executable,
    Schema,
}

/// The cached parse results for one project file. Reused as-is for every
/// change batch that does not touch the file.
#[derive(Clone, Debug)]
pub(crate) struct ParsedFile {
    pub(crate) documents: Vec<Document>,
    /// Problems that belong to this file alone: unreadable content and
    /// syntax errors in executable documents. Schema syntax errors are
    /// reported by the assembler.
    pub(crate) errors: Vec<GQLError>,
    pub(crate) role: FileRole,
    pub(crate) schema_documents: Vec<Arc<SchemaDocument>>,
    /// `None` when the file could not be read.
    pub(crate) source: Option<String>,
}
impl ParsedFile {
    pub(crate) fn parse(
        path: &Path,
        role: FileRole,
        source: String,
        documents: Vec<Document>,
    ) -> Self {
        let documents =
            documents.into_iter()
                .filter(|document| !document.body().trim().is_empty())
                .collect::<Vec<_>>();

        let mut errors = vec![];
        let mut schema_documents = vec![];
        match role {
            FileRole::Schema => {
                let host: Arc<str> = Arc::from(source.as_str());
                schema_documents.extend(documents.iter().map(|document| {
                    Arc::new(SchemaDocument::parse_extracted(path, &host, document))
                }));
            },
            FileRole::Executable => {
                for document in &documents {
                    if let Err(err) = graphql_parser::query::parse_query::<String>(&document.text) {
                        let mut syntax_error = SyntaxError::from_parse_error(path, &err);
                        if document.is_embedded() {
                            syntax_error = syntax_error.mapped_to_host(&source, document);
                        }
                        errors.push(syntax_error.to_gql_error());
                    }
                }
            },
        }

        Self {
            documents,
            errors,
            role,
            schema_documents,
            source: Some(source),
        }
    }

    pub(crate) fn unreadable(path: &Path, role: FileRole, err: &ReadContentError) -> Self {
        let error = SchemaBuildError::UnreadableFile {
            location: loc::FilePosition::new(path, 1, 1),
            message: err.to_string(),
        };
        Self {
            documents: vec![],
            errors: vec![error.to_gql_error()],
            role,
            schema_documents: vec![],
            source: None,
        }
    }

    /// Whether this entry was parsed from exactly `source` in `role`.
    pub(crate) fn is_current(&self, role: FileRole, source: &str) -> bool {
        self.role == role && self.source.as_deref() == Some(source)
    }
}
