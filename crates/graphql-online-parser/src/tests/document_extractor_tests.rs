//! Tests for [`DocumentExtractor`] and interpolation replacement.

use crate::Document;
use crate::DocumentExtractor;
use crate::EmbeddedLanguageParser;
use crate::InterpolationPolicy;
use crate::OnlineParser;
use crate::Position;
use crate::whitespace_copy;

fn gql_extractor() -> DocumentExtractor<EmbeddedLanguageParser> {
    DocumentExtractor::new(
        EmbeddedLanguageParser::tagged_templates(OnlineParser::new(), &["graphql", "gql"])
            .unwrap(),
    )
}

/// Asserts the offset-preservation invariant for an extracted document.
fn assert_offsets_preserved(source: &str, doc: &Document) {
    assert_eq!(doc.text.len(), doc.span.end);
    assert_eq!(&doc.text[..doc.span.start], whitespace_copy(&source[..doc.span.start]));
}

// =============================================================================
// Standalone documents
// =============================================================================

#[test]
fn standalone_parser_yields_whole_file() {
    let extractor = DocumentExtractor::new(OnlineParser::new());
    let source = "type Query {\n  a: Int\n}\n";
    let docs = extractor.get_documents(source);
    assert_eq!(docs, vec![Document::whole_file(source)]);
    assert!(!docs[0].is_embedded());
}

#[test]
fn standalone_parser_on_empty_text_yields_empty_document() {
    let extractor = DocumentExtractor::new(OnlineParser::new());
    let docs = extractor.get_documents("");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].text, "");
}

// =============================================================================
// Embedded documents
// =============================================================================

#[test]
fn relay_fragment_is_extracted_at_original_offsets() {
    let parser =
        EmbeddedLanguageParser::new(OnlineParser::new(), r"Relay\.QL`", "`").unwrap();
    let extractor = DocumentExtractor::new(parser);
    let source = "const a = Relay.QL`fragment on Test { image }`;";

    let docs = extractor.get_documents(source);
    assert_eq!(docs.len(), 1);
    let doc = &docs[0];

    let body_start = source.find("fragment").unwrap();
    let body_end = source.rfind('`').unwrap();
    assert_eq!(doc.span, body_start..body_end);
    assert_eq!(doc.body(), "fragment on Test { image }");
    assert_eq!(doc.text.trim_start(), "fragment on Test { image }");
    assert_offsets_preserved(source, doc);

    let delimiters = doc.delimiters.as_ref().unwrap();
    assert_eq!(delimiters.start, "Relay.QL`");
    assert_eq!(delimiters.end.as_deref(), Some("`"));
}

#[test]
fn multiple_regions_each_keep_host_offsets_and_lines() {
    let extractor = gql_extractor();
    let source = "const a = gql`{ a }`;\nconst b = graphql`\n  { b }\n`;\n";

    let docs = extractor.get_documents(source);
    assert_eq!(docs.len(), 2);
    for doc in &docs {
        assert_offsets_preserved(source, doc);
        assert_eq!(doc.body(), &source[doc.span.clone()]);
    }
    assert_eq!(docs[0].body(), "{ a }");
    assert_eq!(docs[1].body(), "\n  { b }\n");
    assert_eq!(docs[1].delimiters.as_ref().unwrap().start, "graphql`");
    // The second document's text keeps the host's line structure.
    assert_eq!(docs[1].text.lines().count(), 3);
}

#[test]
fn unterminated_region_yields_partial_document() {
    let extractor = gql_extractor();
    let source = "x = gql`query { me";
    let docs = extractor.get_documents(source);
    assert_eq!(docs.len(), 1);
    assert!(docs[0].is_unterminated());
    assert_eq!(docs[0].span.end, source.len());
    assert_eq!(docs[0].body(), "query { me");
}

#[test]
fn multibyte_host_prefix_keeps_byte_offsets() {
    let extractor = gql_extractor();
    let source = "const é = \"ü\"; gql`{ a }`";
    let docs = extractor.get_documents(source);
    assert_eq!(docs.len(), 1);
    assert_offsets_preserved(source, &docs[0]);
    assert_eq!(docs[0].body(), "{ a }");
}

#[test]
fn host_positions_map_back_through_multibyte_padding() {
    let extractor = gql_extractor();
    let source = "é gql`{ a }`";
    let doc = &extractor.get_documents(source)[0];
    // In the document text `é` became two spaces, so `a` sits one column
    // further right than in the host.
    let in_doc = Position::from_offset(&doc.text, source.find(" a ").unwrap() + 1);
    assert_eq!(in_doc, Position::new(1, 10));
    assert_eq!(doc.to_host_position(source, in_doc), Position::new(1, 9));
}

#[test]
fn host_without_regions_yields_no_documents() {
    let extractor = gql_extractor();
    assert!(extractor.get_documents("const x = 1;").is_empty());
}

// =============================================================================
// Interpolation
// =============================================================================

#[test]
fn hole_in_selection_set_becomes_fragment_spread() {
    let extractor = gql_extractor();
    let source = "gql`{ viewer { ${Child.getFragment('viewer')} } }`";
    let docs = extractor.get_documents(source);
    assert_eq!(docs.len(), 1);
    let doc = &docs[0];
    assert_offsets_preserved(source, doc);

    let hole_start = source.find("${").unwrap();
    let hole_end = source.find("')}").unwrap() + 3;
    let replacement = &doc.text[hole_start..hole_end];
    assert!(replacement.starts_with("..."));
    assert!(replacement[3..].chars().all(|ch| ch == '_'));
    assert!(!doc.text.contains("${"));
}

#[test]
fn hole_in_argument_position_becomes_whitespace() {
    let extractor = gql_extractor();
    let source = "gql`{ user(id: ${id}) { name } }`";
    let doc = &extractor.get_documents(source)[0];
    assert_offsets_preserved(source, doc);

    let hole_start = source.find("${").unwrap();
    let hole_end = hole_start + "${id}".len();
    assert_eq!(&doc.text[hole_start..hole_end], "     ");
}

#[test]
fn hole_in_list_value_inside_selection_set_becomes_whitespace() {
    let extractor = gql_extractor();
    let source = "gql`{ users(ids: [1, ${rest}]) { name } }`";
    let doc = &extractor.get_documents(source)[0];

    let hole_start = source.find("${").unwrap();
    let hole_end = hole_start + "${rest}".len();
    assert!(doc.text[hole_start..hole_end].chars().all(|ch| ch == ' '));
}

#[test]
fn hole_at_document_level_becomes_whitespace() {
    let extractor = gql_extractor();
    let source = "gql`\n  query { a }\n  ${UserFields}\n`";
    let doc = &extractor.get_documents(source)[0];
    assert_offsets_preserved(source, doc);

    let hole_start = source.find("${").unwrap();
    let hole_end = hole_start + "${UserFields}".len();
    assert!(doc.text[hole_start..hole_end].chars().all(|ch| ch == ' '));
}

#[test]
fn short_or_multiline_holes_fall_back_to_whitespace_where_needed() {
    assert_eq!(InterpolationPolicy::FragmentSpread.replace("${}"), "   ");
    assert_eq!(InterpolationPolicy::FragmentSpread.replace("${a}"), "..._");
    assert_eq!(InterpolationPolicy::FragmentSpread.replace("${ab}"), "...__");
    assert_eq!(
        InterpolationPolicy::FragmentSpread.replace("${abcd\n}"),
        "...___\n ",
    );
    assert_eq!(InterpolationPolicy::Whitespace.replace("${a\nb}"), "   \n  ");
}
