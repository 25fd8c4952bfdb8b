use crate::interface::DefinitionLocation;
use crate::interface::get_definition;
use crate::interface::tests::utils::SCHEMA_PATH;
use crate::interface::tests::utils::cursor;
use crate::interface::tests::utils::schema;
use crate::loc::FilePosition;
use graphql_online_parser::OnlineParser;
use graphql_online_parser::Position;
use std::path::Path;

fn definition(marked: &str) -> Option<DefinitionLocation> {
    let (source, position) = cursor(marked);
    get_definition(&schema(), &OnlineParser::new(), &source, position)
}

fn schema_position(location: Option<DefinitionLocation>) -> FilePosition {
    match location {
        Some(DefinitionLocation::Schema(position)) => position,
        other => panic!("expected a schema location, got {other:?}"),
    }
}

#[test]
fn type_definition() {
    let position = schema_position(definition("fragment F on No|de { id }"));
    assert_eq!(position.file, Path::new(SCHEMA_PATH));
    assert_eq!(position.line, 9);
}

#[test]
fn field_definition() {
    let position = schema_position(definition("{ test { na|me } }"));
    assert_eq!(position.file, Path::new(SCHEMA_PATH));
    assert_eq!(position.line, 16);
}

#[test]
fn enum_value_definition() {
    let position = schema_position(definition("{ test(episode: EMP|IRE) { id } }"));
    assert_eq!(position.line, 25);
}

#[test]
fn builtin_type_has_no_definition() {
    assert_eq!(definition("query Q($id: I|D!) { node(id: $id) { id } }"), None);
}

#[test]
fn fragment_definition_in_same_text() {
    assert_eq!(
        definition("{ test { ...Fr|ag } }\nfragment Frag on TestType { id }\n"),
        Some(DefinitionLocation::Source(Position::new(2, 10))),
    );
}

#[test]
fn undefined_fragment_has_no_definition() {
    assert_eq!(definition("{ test { ...Mis|sing } }"), None);
}
