use crate::interface::CompletionItem;
use crate::interface::CompletionKind;
use crate::interface::autocomplete::lexical_distance;
use crate::interface::get_autocomplete_suggestions;
use crate::interface::tests::utils::cursor;
use crate::interface::tests::utils::schema;
use graphql_online_parser::EmbeddedLanguageParser;
use graphql_online_parser::OnlineParser;
use std::collections::BTreeSet;

fn suggest(marked: &str) -> Vec<CompletionItem> {
    let (source, position) = cursor(marked);
    get_autocomplete_suggestions(&schema(), &OnlineParser::new(), &source, position)
}

fn labels(items: &[CompletionItem]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_str()).collect()
}

fn label_set(items: &[CompletionItem]) -> BTreeSet<&str> {
    items.iter().map(|item| item.label.as_str()).collect()
}

#[test]
fn empty_document_suggests_definition_keywords() {
    let items = suggest("|");
    let labels = labels(&items);
    for keyword in ["query", "mutation", "fragment", "type", "input", "extend"] {
        assert!(labels.contains(&keyword), "missing {keyword}");
    }
    assert!(items.iter().all(|item| item.kind == CompletionKind::Keyword));
}

#[test]
fn selection_set_suggests_fields_of_root_type() {
    let items = suggest("{ | }");
    assert_eq!(
        labels(&items),
        vec!["node", "test", "search", "result", "hero", "__typename"],
    );
    let test = &items[1];
    assert_eq!(test.kind, CompletionKind::Field);
    assert_eq!(test.detail.as_deref(), Some("TestType"));
    assert!(items[4].deprecated);
    assert!(!test.deprecated);
}

#[test]
fn nested_selection_set_suggests_fields_of_field_type() {
    let items = suggest("{ test { | } }");
    assert_eq!(
        labels(&items),
        vec!["id", "name", "isTest", "friends", "__typename"],
    );
}

#[test]
fn union_selection_set_only_suggests_typename() {
    let items = suggest("{ result { | } }");
    assert_eq!(labels(&items), vec!["__typename"]);
}

#[test]
fn typed_prefix_ranks_without_filtering() {
    let items = suggest("{ test { is| } }");
    assert_eq!(items.len(), 5);
    assert_eq!(items[0].label, "isTest");
}

#[test]
fn argument_names() {
    let items = suggest("{ test(|) }");
    assert_eq!(labels(&items), vec!["episode", "filter"]);
    assert!(items.iter().all(|item| item.kind == CompletionKind::Argument));
    assert_eq!(items[1].detail.as_deref(), Some("TestInput"));
}

#[test]
fn enum_values_for_enum_argument() {
    let items = suggest("{ test(episode: |) }");
    assert_eq!(labels(&items), vec!["NEWHOPE", "EMPIRE", "JEDI"]);
    assert!(items.iter().all(|item| item.kind == CompletionKind::EnumValue));
}

#[test]
fn enum_values_inside_list_literal() {
    let items = suggest("{ search(episodes: [|]) }");
    assert_eq!(labels(&items), vec!["NEWHOPE", "EMPIRE", "JEDI"]);
}

#[test]
fn input_object_fields() {
    let items = suggest("{ test(filter: { | }) }");
    assert_eq!(labels(&items), vec!["flag", "episode"]);
    assert!(items.iter().all(|item| item.kind == CompletionKind::InputField));
}

#[test]
fn boolean_values_for_boolean_input_field() {
    let items = suggest("{ test(filter: { flag: | }) }");
    assert_eq!(labels(&items), vec!["true", "false"]);
}

#[test]
fn directive_names_after_at() {
    let items = suggest("{ test @| }");
    assert_eq!(
        label_set(&items),
        BTreeSet::from(["deprecated", "include", "skip", "specifiedBy"]),
    );
}

#[test]
fn fragment_names_after_spread() {
    let items = suggest("{ ...|\n}\nfragment TestFragment on TestType { id }\n");
    assert_eq!(labels(&items), vec!["TestFragment"]);
    assert_eq!(items[0].kind, CompletionKind::Fragment);
    assert_eq!(items[0].detail.as_deref(), Some("on TestType"));
}

#[test]
fn output_types_for_sdl_field_ranked_by_prefix() {
    let items = suggest("type TestType { name: S| }");
    assert_eq!(
        label_set(&items),
        BTreeSet::from([
            "Boolean", "Date", "Episode", "Float", "ID", "Int", "Node", "Query", "Result",
            "String", "TestType",
        ]),
    );
    assert_eq!(items[0].label, "String");
    assert!(items.iter().all(|item| item.kind == CompletionKind::Type));
}

#[test]
fn input_types_for_input_fields() {
    let items = suggest("input I { f: | }");
    assert_eq!(
        label_set(&items),
        BTreeSet::from([
            "Boolean", "Date", "Episode", "Float", "ID", "Int", "String", "TestInput",
        ]),
    );
}

#[test]
fn input_types_for_variables() {
    let items = suggest("query Q($e: |) { test { id } }");
    assert!(label_set(&items).contains("TestInput"));
    assert!(!label_set(&items).contains("TestType"));
}

#[test]
fn interfaces_after_implements() {
    let items = suggest("type T implements | {");
    assert_eq!(labels(&items), vec!["Node"]);
}

#[test]
fn objects_for_union_members() {
    let items = suggest("union U = |");
    assert_eq!(label_set(&items), BTreeSet::from(["Query", "TestType"]));
}

#[test]
fn composite_types_after_on() {
    let items = suggest("fragment F on |");
    assert_eq!(
        label_set(&items),
        BTreeSet::from(["Node", "Query", "Result", "TestType"]),
    );
}

#[test]
fn directive_locations() {
    let items = suggest("directive @d on |");
    assert_eq!(items.len(), 19);
    assert_eq!(items[0].label, "QUERY");
    assert!(items.iter().all(|item| item.kind == CompletionKind::DirectiveLocation));
}

#[test]
fn embedded_document_uses_inner_grammar() {
    let parser = EmbeddedLanguageParser::tagged_templates(OnlineParser::new(), &["gql"]).unwrap();
    let (source, position) = cursor("const q = gql`{ test { | } }`;\n");
    let items = get_autocomplete_suggestions(&schema(), &parser, &source, position);
    assert_eq!(
        labels(&items),
        vec!["id", "name", "isTest", "friends", "__typename"],
    );
}

#[test]
fn host_text_has_no_suggestions() {
    let parser = EmbeddedLanguageParser::tagged_templates(OnlineParser::new(), &["gql"]).unwrap();
    let (source, position) = cursor("const q = 1;|\n");
    let items = get_autocomplete_suggestions(&schema(), &parser, &source, position);
    assert!(items.is_empty());
}

#[test]
fn lexical_distance_counts_edits() {
    assert_eq!(lexical_distance("kitten", "sitting"), 3);
    assert_eq!(lexical_distance("", "abc"), 3);
    assert_eq!(lexical_distance("same", "same"), 0);
}
