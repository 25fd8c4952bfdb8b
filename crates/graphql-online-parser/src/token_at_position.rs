use crate::CharacterStream;
use crate::Parser;
use crate::Position;
use crate::Style;

/// The token found under a cursor by [`token_at_position`].
#[derive(Clone, Debug, PartialEq)]
pub struct TokenInfo<S> {
    /// Byte offset of the token's first character.
    pub start: usize,
    /// Byte offset just past the token's last character.
    pub end: usize,
    /// The token text.
    pub string: String,
    /// Parser state right after the token was consumed.
    pub state: S,
    /// The token's style, or `None` for an empty buffer.
    pub style: Option<Style>,
    /// The character immediately before the token, if any.
    pub prev_char: Option<char>,
}

/// Finds the token at (or ending at) `position` in `source`.
///
/// The parser is replayed from the start of the buffer until the stream
/// reaches the cursor, so the returned state is exactly the state an
/// uninterrupted tokenization would have at that point.
pub fn token_at_position<P: Parser>(
    parser: &P,
    source: &str,
    position: Position,
) -> TokenInfo<P::State> {
    let offset = position.to_offset(source);
    let mut stream = CharacterStream::new(source);
    let mut state = parser.start_state();
    let mut style = None;

    while !stream.at_end() {
        let before = stream.position();
        style = Some(parser.token(&mut stream, &mut state));
        if stream.position() == before {
            // Parsers always consume at least one character; never spin if one
            // does not.
            stream.next_char();
        }
        if stream.position() >= offset {
            break;
        }
    }

    let start = stream.start_of_token();
    TokenInfo {
        start,
        end: stream.position(),
        string: stream.current().to_string(),
        state,
        style,
        prev_char: source[..start].chars().next_back(),
    }
}
