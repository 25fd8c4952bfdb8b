use crate::interface::find_references;
use crate::interface::tests::utils::cursor;
use crate::interface::tests::utils::schema;
use graphql_online_parser::OnlineParser;

#[test]
fn references_to_type_under_cursor() {
    let schema = schema();
    let (source, position) = cursor("fragment F on Test|Type { id }");
    let references = find_references(&schema, &OnlineParser::new(), &source, position);
    let mut referrers =
        references.iter()
            .map(|reference| reference.referrer())
            .collect::<Vec<_>>();
    referrers.sort();
    assert_eq!(referrers, vec!["Query.hero", "Query.test", "Result", "TestType.friends"]);
    assert!(references.iter().all(|reference| reference.location().file_position().is_some()));
}

#[test]
fn references_in_sdl_source() {
    let schema = schema();
    let (source, position) = cursor("type T implements No|de { id: ID! }");
    let references = find_references(&schema, &OnlineParser::new(), &source, position);
    let mut referrers =
        references.iter()
            .map(|reference| reference.referrer())
            .collect::<Vec<_>>();
    referrers.sort();
    assert_eq!(referrers, vec!["Query.node", "TestType"]);
}

#[test]
fn non_type_token_has_no_references() {
    let schema = schema();
    let (source, position) = cursor("{ te|st { id } }");
    assert!(find_references(&schema, &OnlineParser::new(), &source, position).is_empty());
}
