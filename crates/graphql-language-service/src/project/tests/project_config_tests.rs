use crate::error::ConfigurationError;
use crate::project::EmbeddedTagConfig;
use crate::project::ProjectConfig;
use crate::project::SchemaExtensionSource;
use std::path::Path;
use std::path::PathBuf;

#[test]
fn missing_keys_take_defaults() {
    let config = ProjectConfig::from_json_str(r#"{ "schemaPaths": ["schema"] }"#).unwrap();
    assert_eq!(config.schema_paths, vec![PathBuf::from("schema")]);
    assert!(config.document_paths.is_empty());
    assert_eq!(config.graphql_file_exts, vec!["graphql", "graphqls", "gql"]);
    assert_eq!(config.embedded_tags.len(), 1);
    assert!(!config.build_options.comment_descriptions);
}

#[test]
fn reads_every_key() {
    let config = ProjectConfig::from_json_str(r#"{
        "schemaPaths": ["schema"],
        "documentPaths": ["src"],
        "embeddedTags": [{ "start": "<gql>", "end": "</gql>" }],
        "buildOptions": { "commentDescriptions": true, "assumeValid": true },
        "graphqlFileExts": [".graphql"]
    }"#).unwrap();
    assert_eq!(config.document_paths, vec![PathBuf::from("src")]);
    assert_eq!(
        config.embedded_tags,
        vec![EmbeddedTagConfig {
            start: "<gql>".to_string(),
            end: "</gql>".to_string(),
            interpolation: false,
        }],
    );
    assert!(config.build_options.comment_descriptions);
    assert!(config.build_options.assume_valid);
    assert!(config.is_graphql_file(Path::new("schema/a.graphql")));
    assert!(!config.is_graphql_file(Path::new("schema/a.gql")));
}

#[test]
fn invalid_json_is_a_configuration_error() {
    let err = ProjectConfig::from_json_str("{ schemaPaths: }").unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidJson { path: None, .. }));
}

#[test]
fn invalid_delimiter_is_a_configuration_error() {
    let err =
        ProjectConfig::from_json_str(r#"{ "embeddedTags": [{ "start": "(", "end": "`" }] }"#)
            .unwrap_err();
    assert!(matches!(err, ConfigurationError::InvalidDelimiterPattern(_)));
}

#[test]
fn from_file_reports_the_path_of_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graphql.config.json");
    std::fs::write(&path, "[").unwrap();
    let err = ProjectConfig::from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigurationError::InvalidJson { path: Some(ref err_path), .. } if *err_path == path,
    ));
}

#[test]
fn from_file_reports_unreadable_files() {
    let dir = tempfile::tempdir().unwrap();
    let err = ProjectConfig::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, ConfigurationError::Unreadable(_)));
}

#[test]
fn file_roles_follow_configured_roots() {
    let config = ProjectConfig {
        schema_paths: vec![PathBuf::from("/p/schema"), PathBuf::from("/p/extra.graphql")],
        document_paths: vec![PathBuf::from("/p/src")],
        ..ProjectConfig::default()
    };
    assert!(config.is_schema_file(Path::new("/p/schema/nested/a.graphql")));
    assert!(config.is_schema_file(Path::new("/p/extra.graphql")));
    assert!(!config.is_schema_file(Path::new("/p/schemata/a.graphql")));
    assert!(config.is_document_file(Path::new("/p/src/app.js")));
}

#[test]
fn tagged_templates_escape_tags() {
    let tag = EmbeddedTagConfig::tagged_templates(&["Relay.QL"]);
    assert_eq!(tag.start, r"\b(?:Relay\.QL)\s*`");
    assert_eq!(tag.end, "`");
    assert!(tag.interpolation);
    assert!(tag.parser().is_ok());
}

#[test]
fn extensions_take_paths_or_inline_sdl() {
    let config = ProjectConfig::from_json_str(r#"{
        "extensions": [
            { "path": "presets/relay.graphql" },
            { "sdl": "extend type Query { node(id: ID!): Node }" }
        ]
    }"#).unwrap();
    assert_eq!(
        config.extensions,
        vec![
            SchemaExtensionSource::Path(PathBuf::from("presets/relay.graphql")),
            SchemaExtensionSource::Sdl("extend type Query { node(id: ID!): Node }".to_string()),
        ],
    );
    assert!(config.is_extension_file(Path::new("presets/relay.graphql")));
    assert!(!config.is_extension_file(Path::new("presets/other.graphql")));
}
