use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::file_discovery;
use crate::output_utils;
use graphql_language_service::GQLError;
use graphql_language_service::project::FileChange;
use graphql_language_service::project::Project;
use graphql_language_service::project::ProjectConfig;
use graphql_language_service::project::ProjectSnapshot;
use graphql_language_service::project::SchemaExtensionSource;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        help="Path to a JSON project configuration. Its `schemaPaths` and \
             `documentPaths` are used in addition to FILE_OR_DIR_PATHS.",
        long,
    )]
    config: Option<PathBuf>,

    #[arg(
        help="Set of file extensions to filter to when searching for files \
             within a directory. Overrides the configured extensions.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Option<Vec<String>>,

    #[arg(
        help="Print diagnostics as a JSON array.",
        long,
    )]
    json: bool,

    #[arg(
        help="Paths to one or more schema files or directories containing \
             schema files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required_unless_present="config",
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl ValidateCmd {
    fn project_config(&self) -> anyhow::Result<ProjectConfig> {
        let mut config = match &self.config {
            Some(path) => ProjectConfig::from_file(path)?,
            None => ProjectConfig::default(),
        };
        config.schema_paths.extend(self.file_or_dir_paths.iter().cloned());
        // Files are classified by path prefix, and discovered paths are
        // canonical.
        config.schema_paths = config.schema_paths.iter().map(|p| canonical(p)).collect();
        config.document_paths = config.document_paths.iter().map(|p| canonical(p)).collect();
        for extension in &mut config.extensions {
            if let SchemaExtensionSource::Path(path) = extension {
                *path = canonical(path);
            }
        }
        if let Some(exts) = &self.graphql_file_exts {
            config.graphql_file_exts = exts.clone();
        }
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<(ProjectSnapshot, usize, usize)> {
        let config = self.project_config()?;
        let roots =
            config.schema_paths
                .iter()
                .chain(config.document_paths.iter())
                .cloned()
                .collect::<Vec<_>>();
        let discovered =
            file_discovery::find_files(&roots, |path| config.is_graphql_file(path))?;

        let changes =
            discovered.files
                .iter()
                .map(FileChange::changed)
                .collect::<Vec<_>>();
        let mut project = Project::new(config)?;
        let snapshot = project.apply_changes(&changes);
        Ok((snapshot, discovered.files.len(), discovered.num_skipped))
    }
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let (snapshot, num_files, num_skipped) = match self.validate() {
            Ok(result) => result,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };
        let exit_code =
            if snapshot.has_errors() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };

        if self.json {
            return match serde_json::to_string_pretty(snapshot.errors.as_slice()) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")).with_exit_code(exit_code),
                Err(err) => CommandResult::stderr(format_args!(
                    "{} Failed to serialize diagnostics: {err}",
                    output_utils::RED_X,
                )),
            };
        }

        if snapshot.has_errors() {
            return CommandResult::stderr(format_args!(
                "{} GraphQL validation errors:\n{}",
                output_utils::RED_X,
                format_errors(&snapshot.errors),
            ));
        }

        let num_directives =
            snapshot.schema
                .directives()
                .filter(|directive| !directive.is_builtin())
                .count();
        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.{}",
            ),
            output_utils::GREEN_CHECK,
            num_files,
            num_skipped,
            snapshot.schema.defined_types().count(),
            num_directives,
            if snapshot.errors.is_empty() {
                String::new()
            } else {
                format!("\n{}", format_errors(&snapshot.errors))
            },
        ))
    }
}

fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn format_errors(errors: &[GQLError]) -> String {
    errors.iter()
        .map(|err| format!("  * [{:?}] {err}", err.severity))
        .collect::<Vec<_>>()
        .join("\n")
}
