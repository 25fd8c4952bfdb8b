//! Various test utils.

use crate::CharacterStream;
use crate::Parser;
use crate::Style;

/// Tokenizes all of `source`, returning each token's style and text.
pub fn tokenize<P: Parser>(parser: &P, source: &str) -> Vec<(Style, String)> {
    tokenize_with_states(parser, source)
        .into_iter()
        .map(|(style, text, _, _)| (style, text))
        .collect()
}

/// Like [`tokenize`], but skipping whitespace tokens.
pub fn tokenize_significant<P: Parser>(
    parser: &P,
    source: &str,
) -> Vec<(Style, String)> {
    tokenize(parser, source)
        .into_iter()
        .filter(|(style, _)| *style != Style::Whitespace)
        .collect()
}

/// Tokenizes all of `source`, returning each token's style, text, end offset
/// and the parser state right after it.
pub fn tokenize_with_states<P: Parser>(
    parser: &P,
    source: &str,
) -> Vec<(Style, String, usize, P::State)> {
    let mut stream = CharacterStream::new(source);
    let mut state = parser.start_state();
    let mut tokens = vec![];
    while !stream.at_end() {
        let before = stream.position();
        let style = parser.token(&mut stream, &mut state);
        assert!(
            stream.position() > before,
            "parser made no progress at offset {before} of {source:?}",
        );
        tokens.push((
            style,
            stream.current().to_string(),
            stream.position(),
            state.clone(),
        ));
    }
    tokens
}

/// Shorthand for building an expected `(Style, String)` token list.
pub fn toks(expected: &[(Style, &str)]) -> Vec<(Style, String)> {
    expected
        .iter()
        .map(|(style, text)| (*style, text.to_string()))
        .collect()
}
