use crate::error::GQLError;
use crate::error::SchemaBuildError;
use crate::error::SchemaError;
use crate::error::Severity;
use crate::error::ToGQLError;
use crate::loc;
use serde_json::json;

#[test]
fn serializes_to_wire_shape() {
    let error = GQLError::new(
        "Type \"User\" not found.",
        Severity::Error,
        [&loc::FilePosition::new("/schema/a.graphql", 3, 7)],
    );
    assert_eq!(
        serde_json::to_value(&error).unwrap(),
        json!({
            "message": "Type \"User\" not found.",
            "severity": "error",
            "locations": [{ "line": 3, "column": 7, "path": "/schema/a.graphql" }],
        }),
    );
}

#[test]
fn unattributable_errors_have_null_locations() {
    let error = SchemaError::from(SchemaBuildError::NoSchemaFilesMatched).to_gql_error();
    assert_eq!(
        serde_json::to_value(&error).unwrap(),
        json!({
            "message": "No schema files matched the project configuration.",
            "severity": "error",
            "locations": null,
        }),
    );
    assert_eq!(error.to_string(), "No schema files matched the project configuration.");
}

#[test]
fn warnings_serialize_as_warn() {
    let error = GQLError::new("careful", Severity::Warn, []);
    assert_eq!(serde_json::to_value(error.severity).unwrap(), json!("warn"));
    assert!(!error.is_error());
}

#[test]
fn builtin_locations_are_dropped() {
    let error = GQLError::at_source_locations(
        "dup",
        Severity::Error,
        [
            &loc::SourceLocation::GraphQLBuiltIn,
            &loc::FilePosition::new("/a.graphql", 2, 1).into(),
        ],
    );
    let locations = error.locations.as_ref().unwrap();
    assert_eq!(locations.len(), 1);
    assert_eq!(error.to_string(), "/a.graphql:2:1: dup");
}

#[test]
fn duplicate_type_points_at_both_definitions() {
    let error = SchemaBuildError::DuplicateTypeDefinition {
        type_name: "Test".to_string(),
        first: loc::FilePosition::new("/b.graphql", 1, 1).into(),
        duplicate: loc::FilePosition::new("/b.graphql", 2, 1),
    }.to_gql_error();
    let lines =
        error.locations
            .unwrap()
            .iter()
            .map(|l| l.line)
            .collect::<Vec<_>>();
    assert_eq!(lines, vec![2, 1]);
}
