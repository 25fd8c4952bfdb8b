use crate::CharacterStream;
use crate::OnlineParser;
use crate::Parser;
use crate::Style;
use crate::TokenState;
use inherent::inherent;
use regex::Regex;

/// Error produced when an [`EmbeddedLanguageParser`] is given delimiter
/// patterns that are not valid regular expressions.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Invalid {which} delimiter pattern `{pattern}`: {message}")]
pub struct DelimiterPatternError {
    pub which: &'static str,
    pub pattern: String,
    pub message: String,
}

/// State of an [`EmbeddedLanguageParser`] between two tokens.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EmbeddedState {
    /// The GraphQL grammar state, present only while inside a region.
    inner: Option<TokenState>,

    /// Brace depth of an unterminated `${` hole (0 when not inside one).
    interpolation_depth: usize,
}

impl EmbeddedState {
    pub fn inner(&self) -> Option<&TokenState> {
        self.inner.as_ref()
    }

    pub fn is_inside_region(&self) -> bool {
        self.inner.is_some()
    }
}

/// Tokenizes host-language text, switching into GraphQL between a start and an
/// end delimiter.
///
/// Outside a region every token is [`Style::HostText`]: the parser jumps
/// straight to the next start delimiter (or to the end of the buffer). The
/// delimiters themselves come out as [`Style::EmbeddedStart`] and
/// [`Style::EmbeddedEnd`]. Inside a region tokens are produced by the wrapped
/// [`OnlineParser`], except for `${...}` holes which (when enabled) come out as
/// a single [`Style::Interpolation`] token.
#[derive(Clone, Debug)]
pub struct EmbeddedLanguageParser {
    inner: OnlineParser,
    start_match: Regex,
    end_match: Regex,
    interpolation: bool,
}

impl EmbeddedLanguageParser {
    pub fn new(
        inner: OnlineParser,
        start_pattern: &str,
        end_pattern: &str,
    ) -> Result<Self, DelimiterPatternError> {
        let compile = |which: &'static str, pattern: &str, anchored: bool| {
            let source =
                if anchored {
                    format!("^(?:{pattern})")
                } else {
                    pattern.to_string()
                };
            Regex::new(&source).map_err(|err| DelimiterPatternError {
                which,
                pattern: pattern.to_string(),
                message: err.to_string(),
            })
        };

        Ok(Self {
            inner,
            start_match: compile("start", start_pattern, false)?,
            end_match: compile("end", end_pattern, true)?,
            interpolation: false,
        })
    }

    /// A parser for GraphQL in tagged template literals, e.g.
    /// ``graphql`{ me { id } }` `` in JavaScript or TypeScript.
    pub fn tagged_templates(
        inner: OnlineParser,
        tags: &[&str],
    ) -> Result<Self, DelimiterPatternError> {
        let tags =
            tags.iter()
                .map(|tag| regex::escape(tag))
                .collect::<Vec<_>>()
                .join("|");
        Ok(
            Self::new(inner, &format!(r"\b(?:{tags})\s*`"), "`")?
                .with_interpolation(true)
        )
    }

    /// Enables or disables recognition of `${...}` holes.
    pub fn with_interpolation(mut self, enabled: bool) -> Self {
        self.interpolation = enabled;
        self
    }

    pub fn inner_parser(&self) -> &OnlineParser {
        &self.inner
    }

    fn host_token(
        &self,
        stream: &mut CharacterStream<'_>,
        state: &mut EmbeddedState,
    ) -> Style {
        let start =
            self.start_match
                .find_iter(stream.remaining())
                .find(|m| !m.is_empty());
        match start {
            Some(m) if m.start() == 0 => {
                stream.skip_to(stream.position() + m.end());
                state.inner = Some(self.inner.start_state());
                Style::EmbeddedStart
            },
            Some(m) => {
                stream.skip_to(stream.position() + m.start());
                Style::HostText
            },
            None => {
                stream.skip_to_end();
                Style::HostText
            },
        }
    }

    /// Consumes the remainder of a `${...}` hole, tracking nested braces.
    fn consume_interpolation(
        &self,
        stream: &mut CharacterStream<'_>,
        state: &mut EmbeddedState,
    ) {
        while let Some(ch) = stream.next_char() {
            match ch {
                '{' => state.interpolation_depth += 1,
                '}' => {
                    state.interpolation_depth -= 1;
                    if state.interpolation_depth == 0 {
                        return;
                    }
                },
                _ => (),
            }
        }
    }
}

#[inherent]
impl Parser for EmbeddedLanguageParser {
    type State = EmbeddedState;

    pub fn start_state(&self) -> EmbeddedState {
        EmbeddedState::default()
    }

    pub fn token(
        &self,
        stream: &mut CharacterStream<'_>,
        state: &mut EmbeddedState,
    ) -> Style {
        stream.begin_token();
        if stream.at_end() {
            return Style::HostText;
        }

        if state.inner.is_none() {
            return self.host_token(stream, state);
        }

        if state.interpolation_depth > 0 {
            self.consume_interpolation(stream, state);
            return Style::Interpolation;
        }

        if stream.lookahead(&self.end_match).is_some_and(|m| !m.is_empty()) {
            stream.match_regex(&self.end_match, true);
            *state = self.start_state();
            return Style::EmbeddedEnd;
        }

        if self.interpolation && stream.match_str("${", true, false) {
            state.interpolation_depth = 1;
            self.consume_interpolation(stream, state);
            return Style::Interpolation;
        }

        match state.inner.as_mut() {
            Some(inner) => self.inner.token(stream, inner),
            None => Style::HostText,
        }
    }

    pub fn token_state<'s>(&self, state: &'s EmbeddedState) -> Option<&'s TokenState> {
        state.inner.as_ref()
    }

    pub fn starts_inside_document(&self) -> bool {
        false
    }
}
