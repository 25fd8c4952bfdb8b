use crate::interface::get_hover_information;
use crate::interface::tests::utils::cursor;
use crate::interface::tests::utils::schema;
use graphql_online_parser::OnlineParser;

fn hover(marked: &str) -> Option<String> {
    let (source, position) = cursor(marked);
    get_hover_information(&schema(), &OnlineParser::new(), &source, position)
}

#[test]
fn hover_on_type_condition_shows_type_and_description() {
    assert_eq!(
        hover("fragment F on Test|Type { id }").as_deref(),
        Some("```graphql\ntype TestType\n```\n\nA type for tests."),
    );
}

#[test]
fn hover_on_field_shows_signature() {
    assert_eq!(
        hover("{ test { na|me } }").as_deref(),
        Some("```graphql\nTestType.name: String\n```"),
    );
}

#[test]
fn hover_on_field_with_arguments() {
    assert_eq!(
        hover("{ te|st { id } }").as_deref(),
        Some("```graphql\nQuery.test(episode: Episode = JEDI, filter: TestInput): TestType\n```"),
    );
}

#[test]
fn hover_on_deprecated_field_shows_reason() {
    assert_eq!(
        hover("{ he|ro { id } }").as_deref(),
        Some("```graphql\nQuery.hero: TestType\n```\n\nDeprecated: Use test"),
    );
}

#[test]
fn hover_on_argument() {
    assert_eq!(
        hover("{ test(epi|sode: JEDI) { id } }").as_deref(),
        Some("```graphql\nepisode: Episode = JEDI\n```"),
    );
}

#[test]
fn hover_on_enum_value() {
    assert_eq!(
        hover("{ test(episode: JE|DI) { id } }").as_deref(),
        Some("```graphql\nEpisode.JEDI\n```"),
    );
}

#[test]
fn hover_on_builtin_directive() {
    let markdown = hover("{ test @inc|lude(if: true) { id } }").unwrap();
    assert!(markdown.starts_with(
        "```graphql\ndirective @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT\n```",
    ));
    assert!(markdown.ends_with("only when the `if` argument is true."));
}

#[test]
fn hover_on_unknown_type_is_none() {
    assert_eq!(hover("fragment F on Miss|ing { id }"), None);
}

#[test]
fn hover_on_punctuation_is_none() {
    assert_eq!(hover("{| test }"), None);
}
