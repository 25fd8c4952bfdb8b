use crate::error::ConfigurationError;
use crate::error::GQLError;
use crate::file_reader;
use crate::project::FileRole;
use crate::project::ProjectConfig;
use crate::project::SchemaExtensionSource;
use crate::project::parsed_file::ParsedFile;
use crate::schema::Schema;
use crate::schema::SchemaAssembler;
use crate::schema::SchemaDocument;
use crate::schema::extend_schema;
use graphql_online_parser::Document;
use graphql_online_parser::DocumentExtractor;
use graphql_online_parser::EmbeddedLanguageParser;
use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// One entry of a change batch delivered by a file watcher.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize)]
pub struct FileChange {
    pub path: PathBuf,
    /// `false` when the file was deleted.
    pub exists: bool,
}
impl FileChange {
    pub fn changed(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), exists: true }
    }

    pub fn deleted(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), exists: false }
    }
}

/// An immutable view of a project after one change batch.
///
/// Cloning is cheap: both the schema and the error list are shared.
#[derive(Clone, Debug)]
pub struct ProjectSnapshot {
    pub schema: Schema,
    pub errors: Arc<Vec<GQLError>>,
}
impl ProjectSnapshot {
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(GQLError::is_error)
    }
}

/// The set of schema and executable files of one GraphQL project, with the
/// schema assembled from them.
///
/// Every change batch re-parses only the files it names; every other file's
/// parse result is reused from the previous batch. The schema is then
/// reassembled and revalidated from scratch, and the resulting error list
/// replaces the previous one wholesale.
#[derive(Debug)]
pub struct Project {
    config: ProjectConfig,
    embedded_parsers: Vec<EmbeddedLanguageParser>,
    /// One entry per configured [`SchemaExtensionSource`], in config order.
    extensions: Vec<ParsedFile>,
    pub(crate) files: BTreeMap<PathBuf, ParsedFile>,
    snapshot: ProjectSnapshot,
}
impl Project {
    pub fn new(config: ProjectConfig) -> Result<Self, ConfigurationError> {
        let embedded_parsers = config.embedded_parsers()?;
        let mut project = Self {
            config,
            embedded_parsers,
            extensions: vec![],
            files: BTreeMap::new(),
            snapshot: ProjectSnapshot {
                schema: Schema::empty(),
                errors: Arc::new(vec![]),
            },
        };
        project.load_extensions();
        project.rebuild();
        Ok(project)
    }

    /// Applies a batch of file changes, reading every changed file that
    /// still exists, and returns the new snapshot.
    pub fn apply_changes(&mut self, changes: &[FileChange]) -> ProjectSnapshot {
        if changes.iter().any(|change| self.config.is_extension_file(&change.path)) {
            self.load_extensions();
        }
        for change in changes {
            let Some(role) = self.role_of(&change.path) else {
                tracing::trace!("{}: not part of the project, ignoring", change.path.display());
                continue;
            };
            if !change.exists {
                self.remove_file(&change.path);
                continue;
            }
            match file_reader::read_content(&change.path) {
                Ok(source) => self.update_file(&change.path, role, source),
                Err(err) => {
                    tracing::debug!("{}: {err}", change.path.display());
                    self.files.insert(
                        change.path.to_path_buf(),
                        ParsedFile::unreadable(&change.path, role, &err),
                    );
                },
            }
        }
        self.rebuild();
        self.snapshot()
    }

    /// Sets (or, with `None`, removes) the content of one file without
    /// touching the filesystem, e.g. for an unsaved editor buffer.
    pub fn set_file_content(
        &mut self,
        path: impl Into<PathBuf>,
        content: Option<String>,
    ) -> ProjectSnapshot {
        let path = path.into();
        match (self.role_of(&path), content) {
            (None, _) =>
                tracing::trace!("{}: not part of the project, ignoring", path.display()),
            (Some(_), None) => self.remove_file(&path),
            (Some(role), Some(source)) => self.update_file(&path, role, source),
        }
        self.rebuild();
        self.snapshot()
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// The documents extracted from `path`, if it is a known file.
    pub fn documents(&self, path: &Path) -> Option<&[Document]> {
        self.files
            .get(path)
            .map(|file| file.documents.as_slice())
    }

    /// Every known file, in path order.
    pub fn file_paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    pub fn file_role(&self, path: &Path) -> Option<FileRole> {
        self.files.get(path).map(|file| file.role)
    }

    pub fn snapshot(&self) -> ProjectSnapshot {
        self.snapshot.clone()
    }

    /// Splits `source` into GraphQL documents: the whole file for plain
    /// GraphQL files, otherwise every region found by the embedded parsers,
    /// in order of where each starts in `source`.
    pub fn extract_documents(&self, path: &Path, source: &str) -> Vec<Document> {
        if self.config.is_graphql_file(path) {
            return vec![Document::whole_file(source)];
        }
        let mut documents =
            self.embedded_parsers
                .iter()
                .flat_map(|parser| DocumentExtractor::new(parser.clone()).get_documents(source))
                .collect::<Vec<_>>();
        documents.sort_by_key(|document| document.span.start);
        documents
    }

    fn role_of(&self, path: &Path) -> Option<FileRole> {
        if self.config.is_extension_file(path) {
            None
        } else if self.config.is_schema_file(path) {
            Some(FileRole::Schema)
        } else if self.config.is_document_file(path) {
            Some(FileRole::Executable)
        } else {
            None
        }
    }

    fn load_extensions(&mut self) {
        let sources = self.config.extensions.clone();
        self.extensions =
            sources.iter()
                .enumerate()
                .map(|(index, source)| match source {
                    SchemaExtensionSource::Path(path) => match file_reader::read_content(path) {
                        Ok(content) => {
                            let documents = self.extract_documents(path, &content);
                            ParsedFile::parse(path, FileRole::Schema, content, documents)
                        },
                        Err(err) => {
                            tracing::debug!("{}: {err}", path.display());
                            ParsedFile::unreadable(path, FileRole::Schema, &err)
                        },
                    },
                    SchemaExtensionSource::Sdl(sdl) => {
                        let path = PathBuf::from(format!("<extension {index}>"));
                        ParsedFile::parse(&path, FileRole::Schema, sdl.clone(), vec![Document::whole_file(sdl)])
                    },
                })
                .collect();
        tracing::trace!("loaded {} schema extensions", self.extensions.len());
    }

    fn remove_file(&mut self, path: &Path) {
        if self.files.remove(path).is_some() {
            tracing::trace!("{}: removed", path.display());
        }
    }

    fn update_file(&mut self, path: &Path, role: FileRole, source: String) {
        if self.files.get(path).is_some_and(|file| file.is_current(role, &source)) {
            tracing::trace!("{}: unchanged, reusing cached parse", path.display());
            return;
        }
        let documents = self.extract_documents(path, &source);
        tracing::trace!("{}: parsing {} documents", path.display(), documents.len());
        self.files.insert(
            path.to_path_buf(),
            ParsedFile::parse(path, role, source, documents),
        );
    }

    fn rebuild(&mut self) {
        let schema_documents =
            self.files
                .values()
                .filter(|file| file.role == FileRole::Schema)
                .flat_map(|file| file.schema_documents.iter().cloned())
                .collect::<Vec<_>>();
        let assembly =
            SchemaAssembler::new()
                .options(self.config.build_options.clone())
                .load_documents(schema_documents)
                .assemble();

        let mut errors =
            self.files
                .values()
                .chain(&self.extensions)
                .flat_map(|file| file.errors.iter().cloned())
                .collect::<Vec<_>>();
        errors.extend(assembly.gql_errors());

        let extension_documents =
            self.extensions
                .iter()
                .flat_map(|file| file.schema_documents.iter().cloned())
                .collect::<Vec<Arc<SchemaDocument>>>();
        let assembly =
            if extension_documents.is_empty() {
                assembly
            } else {
                let extended = extend_schema(
                    &assembly.schema,
                    &extension_documents,
                    &self.config.build_options,
                );
                errors.extend(extended.gql_errors());
                extended
            };

        tracing::debug!(
            "rebuilt project from {} files: {} types, {} diagnostics",
            self.files.len(),
            assembly.schema.type_map().len(),
            errors.len(),
        );
        self.snapshot = ProjectSnapshot {
            schema: assembly.schema,
            errors: Arc::new(errors),
        };
    }
}
