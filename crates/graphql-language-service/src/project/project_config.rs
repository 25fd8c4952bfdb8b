use crate::error::ConfigurationError;
use crate::file_reader;
use crate::schema::BuildOptions;
use graphql_online_parser::DelimiterPatternError;
use graphql_online_parser::EmbeddedLanguageParser;
use graphql_online_parser::OnlineParser;
use std::path::Path;
use std::path::PathBuf;

/// Tags recognized in front of template literals when no `embeddedTags` are
/// configured.
pub const DEFAULT_TEMPLATE_TAGS: &[&str] = &["graphql", "gql", "Relay.QL"];

/// File extensions treated as plain GraphQL when no `graphqlFileExts` are
/// configured.
pub const DEFAULT_GRAPHQL_FILE_EXTS: &[&str] = &["graphql", "graphqls", "gql"];

/// A pair of delimiter patterns marking GraphQL regions inside host-language
/// files.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedTagConfig {
    /// Regex matching the text that opens a region.
    pub start: String,

    /// Regex matching the text that closes a region, anchored at the cursor.
    pub end: String,

    /// Whether `${...}` holes inside a region are skipped.
    #[serde(default)]
    pub interpolation: bool,
}
impl EmbeddedTagConfig {
    /// Tagged template literals (``tag`...` ``) for each of `tags`, with
    /// interpolation enabled.
    pub fn tagged_templates(tags: &[&str]) -> Self {
        let tags =
            tags.iter()
                .map(|tag| regex::escape(tag))
                .collect::<Vec<_>>()
                .join("|");
        Self {
            start: format!(r"\b(?:{tags})\s*`"),
            end: "`".to_string(),
            interpolation: true,
        }
    }

    pub fn parser(&self) -> Result<EmbeddedLanguageParser, DelimiterPatternError> {
        Ok(
            EmbeddedLanguageParser::new(OnlineParser::new(), &self.start, &self.end)?
                .with_interpolation(self.interpolation)
        )
    }
}

/// SDL applied with [`extend_schema`](crate::schema::extend_schema) on top
/// of the schema assembled from the project's schema files.
///
/// Deserialized from `{"path": "..."}` or `{"sdl": "..."}`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaExtensionSource {
    /// A file of SDL (or a host file with embedded SDL). Re-read whenever a
    /// change batch names it.
    Path(PathBuf),

    /// SDL given inline, e.g. contributed by a preset.
    Sdl(String),
}

/// Which files make up a project and how they are read.
///
/// Deserialized from a camelCase JSON object; every key is optional.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Files or directories whose files hold the schema.
    pub schema_paths: Vec<PathBuf>,

    /// Files or directories whose files hold operations and fragments.
    pub document_paths: Vec<PathBuf>,

    /// Delimiters for GraphQL embedded in files whose extension is not one of
    /// [`graphql_file_exts`](Self::graphql_file_exts).
    pub embedded_tags: Vec<EmbeddedTagConfig>,

    pub build_options: BuildOptions,

    /// Applied in order after the schema files are assembled. Extension
    /// files are never treated as schema or document files.
    pub extensions: Vec<SchemaExtensionSource>,

    /// Extensions (with or without the leading `.`) of plain GraphQL files.
    pub graphql_file_exts: Vec<String>,
}
impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            schema_paths: vec![],
            document_paths: vec![],
            embedded_tags: vec![EmbeddedTagConfig::tagged_templates(DEFAULT_TEMPLATE_TAGS)],
            build_options: BuildOptions::default(),
            extensions: vec![],
            graphql_file_exts:
                DEFAULT_GRAPHQL_FILE_EXTS
                    .iter()
                    .map(|ext| ext.to_string())
                    .collect(),
        }
    }
}
impl ProjectConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let json = file_reader::read_content(path)?;
        Self::parse(&json, Some(path))
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        Self::parse(json, None)
    }

    fn parse(json: &str, path: Option<&Path>) -> Result<Self, ConfigurationError> {
        let config: Self =
            serde_json::from_str(json)
                .map_err(|err| ConfigurationError::InvalidJson {
                    path: path.map(Path::to_path_buf),
                    err,
                })?;
        // Surface bad delimiter patterns at load time rather than on the
        // first change batch.
        config.embedded_parsers()?;
        Ok(config)
    }

    /// One parser per configured [`EmbeddedTagConfig`].
    pub fn embedded_parsers(&self) -> Result<Vec<EmbeddedLanguageParser>, ConfigurationError> {
        self.embedded_tags
            .iter()
            .map(|tag| tag.parser().map_err(ConfigurationError::from))
            .collect()
    }

    /// Whether `path` has one of the plain GraphQL file extensions.
    pub fn is_graphql_file(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().map(|ext| ext.to_string_lossy()) else {
            return false;
        };
        self.graphql_file_exts
            .iter()
            .any(|configured| configured.trim_start_matches('.') == ext)
    }

    /// Whether `path` is one of the configured extension files.
    pub fn is_extension_file(&self, path: &Path) -> bool {
        self.extensions
            .iter()
            .any(|source| matches!(source, SchemaExtensionSource::Path(ext_path) if ext_path == path))
    }

    pub fn is_schema_file(&self, path: &Path) -> bool {
        self.schema_paths.iter().any(|root| path.starts_with(root))
    }

    pub fn is_document_file(&self, path: &Path) -> bool {
        self.document_paths.iter().any(|root| path.starts_with(root))
    }
}
