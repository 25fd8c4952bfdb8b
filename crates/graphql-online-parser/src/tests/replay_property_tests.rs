//! Property tests for replay determinism, restartability and offset
//! preservation.

use crate::CharacterStream;
use crate::DocumentExtractor;
use crate::EmbeddedLanguageParser;
use crate::OnlineParser;
use crate::Parser;
use crate::tests::utils::tokenize_with_states;
use crate::whitespace_copy;
use proptest::prelude::*;

/// Text drawn from GraphQL punctuation, names, strings and comments, plus a
/// few characters the grammar rejects.
fn graphql_like() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("query ".to_string()),
            Just("type ".to_string()),
            Just("fragment ".to_string()),
            Just("on ".to_string()),
            Just("{".to_string()),
            Just("}".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just(":".to_string()),
            Just("$".to_string()),
            Just("...".to_string()),
            Just("!".to_string()),
            Just("\"s\"".to_string()),
            Just("\"\"\"b\nc\"\"\"".to_string()),
            Just("# c\n".to_string()),
            Just("\n".to_string()),
            Just(" ".to_string()),
            Just("%".to_string()),
            Just("é".to_string()),
            "[a-zA-Z_][a-zA-Z0-9_]{0,4}",
            "-?[0-9]{1,3}",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// Host text with a sprinkling of `gql` template regions and holes.
fn host_like() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("gql`".to_string()),
            Just("`".to_string()),
            Just("${x}".to_string()),
            Just("${ {y} }".to_string()),
            Just("{ a { b } }".to_string()),
            Just("query ".to_string()),
            Just("const x = ".to_string()),
            Just(";\n".to_string()),
            Just("ü".to_string()),
            "[a-z ]{0,6}",
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn replay_is_deterministic(source in graphql_like()) {
        let parser = OnlineParser::new();
        prop_assert_eq!(
            tokenize_with_states(&parser, &source),
            tokenize_with_states(&parser, &source),
        );
    }

    #[test]
    fn resuming_from_a_saved_state_matches_uninterrupted_run(
        source in graphql_like(),
        split in any::<prop::sample::Index>(),
    ) {
        let parser = OnlineParser::new();
        let full = tokenize_with_states(&parser, &source);
        prop_assume!(!full.is_empty());

        let split = split.index(full.len());
        let (_, _, offset, saved_state) = full[split].clone();

        let mut stream = CharacterStream::new(&source);
        stream.skip_to(offset);
        let mut state = saved_state;
        let mut resumed = vec![];
        while !stream.at_end() {
            let style = parser.token(&mut stream, &mut state);
            resumed.push((
                style,
                stream.current().to_string(),
                stream.position(),
                state.clone(),
            ));
        }
        prop_assert_eq!(&resumed[..], &full[split + 1..]);
    }

    #[test]
    fn embedded_replay_terminates_and_is_deterministic(source in host_like()) {
        let parser =
            EmbeddedLanguageParser::tagged_templates(OnlineParser::new(), &["gql"])
                .unwrap();
        prop_assert_eq!(
            tokenize_with_states(&parser, &source),
            tokenize_with_states(&parser, &source),
        );
    }

    #[test]
    fn extracted_documents_preserve_offsets(source in host_like()) {
        let parser = EmbeddedLanguageParser::new(OnlineParser::new(), r"gql`", "`")
            .unwrap();
        let extractor = DocumentExtractor::new(parser);
        for doc in extractor.get_documents(&source) {
            prop_assert_eq!(doc.text.len(), doc.span.end);
            prop_assert_eq!(
                &doc.text[..doc.span.start],
                whitespace_copy(&source[..doc.span.start]),
            );
            // Without interpolation every body character is copied verbatim.
            prop_assert_eq!(doc.body(), &source[doc.span.clone()]);
        }
    }

    #[test]
    fn interpolated_documents_preserve_lengths(source in host_like()) {
        let parser =
            EmbeddedLanguageParser::tagged_templates(OnlineParser::new(), &["gql"])
                .unwrap();
        let extractor = DocumentExtractor::new(parser);
        for doc in extractor.get_documents(&source) {
            prop_assert_eq!(doc.text.len(), doc.span.end);
            let host_lines = source[..doc.span.end].matches('\n').count();
            prop_assert_eq!(doc.text.matches('\n').count(), host_lines);
        }
    }
}
