use crate::CharacterStream;
use crate::Style;
use crate::TokenState;

/// A resumable, single-token-at-a-time tokenizer.
///
/// Implementors never fail: every call to [`Parser::token`] on a stream that
/// is not at its end consumes at least one character and returns a [`Style`]
/// for it, falling back to [`Style::Invalid`] for input that fits nothing.
pub trait Parser {
    type State: Clone + std::fmt::Debug;

    /// The state to begin tokenizing a fresh buffer with.
    fn start_state(&self) -> Self::State;

    /// Consumes one token from `stream`, updating `state`, and returns the
    /// token's style. `stream.current()` is the token's text afterwards.
    fn token(
        &self,
        stream: &mut CharacterStream<'_>,
        state: &mut Self::State,
    ) -> Style;

    /// The GraphQL grammar state nested in `state`, if the cursor is currently
    /// inside GraphQL text.
    fn token_state<'s>(&self, state: &'s Self::State) -> Option<&'s TokenState>;

    /// Whether the buffer begins inside a GraphQL document (as opposed to
    /// host-language text that may contain embedded documents).
    fn starts_inside_document(&self) -> bool {
        true
    }
}
