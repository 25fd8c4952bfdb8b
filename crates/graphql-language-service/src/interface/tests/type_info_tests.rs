use crate::interface::TypeInfo;
use crate::interface::tests::utils::cursor;
use crate::interface::tests::utils::schema;
use crate::schema::Schema;
use graphql_online_parser::OnlineParser;
use graphql_online_parser::token_at_position;

fn resolve<'s>(schema: &'s Schema, marked: &str) -> TypeInfo<'s> {
    let parser = OnlineParser::new();
    let (source, position) = cursor(marked);
    let token = token_at_position(&parser, &source, position);
    let state = parser.token_state(&token.state).unwrap();
    TypeInfo::resolve(schema, state)
}

#[test]
fn operation_enters_root_type() {
    let schema = schema();
    let info = resolve(&schema, "query Q { | }");
    assert_eq!(info.parent_type.map(|t| t.name()), Some("Query"));
    assert!(info.field_def.is_none());
}

#[test]
fn selection_set_enters_field_type() {
    let schema = schema();
    let info = resolve(&schema, "{ test { friends { | } } }");
    assert_eq!(info.parent_type.map(|t| t.name()), Some("TestType"));
}

#[test]
fn inline_fragment_switches_parent_type() {
    let schema = schema();
    let info = resolve(&schema, "{ result { ... on TestType { | } } }");
    assert_eq!(info.parent_type.map(|t| t.name()), Some("TestType"));
}

#[test]
fn argument_resolves_input_type() {
    let schema = schema();
    let info = resolve(&schema, "{ test(filter: |) }");
    assert_eq!(info.field_def.map(|f| f.name()), Some("test"));
    assert_eq!(info.argument_def.map(|a| a.name()), Some("filter"));
    assert_eq!(info.input_type.map(|t| t.to_string()).as_deref(), Some("TestInput"));
}

#[test]
fn list_value_unwraps_input_type() {
    let schema = schema();
    let info = resolve(&schema, "{ search(episodes: [|]) }");
    assert_eq!(info.input_type.map(|t| t.to_string()).as_deref(), Some("Episode!"));
    assert_eq!(info.input_named_type(&schema).map(|t| t.name()), Some("Episode"));
}

#[test]
fn sdl_field_definition_resolves_field() {
    let schema = schema();
    let info = resolve(&schema, "type TestType { friends(first: |) }");
    assert_eq!(info.parent_type.map(|t| t.name()), Some("TestType"));
    assert_eq!(info.field_def.map(|f| f.name()), Some("friends"));
    assert!(info.argument_defs.is_some_and(|defs| defs.contains_key("first")));
}
