mod parsed_file;
#[allow(clippy::module_inception)]
mod project;
mod project_config;

pub use parsed_file::FileRole;
pub use project::FileChange;
pub use project::Project;
pub use project::ProjectSnapshot;
pub use project_config::DEFAULT_GRAPHQL_FILE_EXTS;
pub use project_config::DEFAULT_TEMPLATE_TAGS;
pub use project_config::EmbeddedTagConfig;
pub use project_config::ProjectConfig;
pub use project_config::SchemaExtensionSource;

#[cfg(test)]
mod tests;
