use crate::CharacterStream;
use crate::Dialect;
use crate::LexKind;
use crate::LexRules;
use crate::Parser;
use crate::RuleKind;
use crate::Style;
use crate::TokenState;
use crate::grammar;
use crate::grammar::Expectation;
use crate::grammar::ParseRule;
use crate::grammar::StateUpdate;
use crate::grammar::Step;
use crate::lex_rules::is_ignored;
use crate::lex_rules::LexToken;
use inherent::inherent;
use regex::Regex;
use std::sync::OnceLock;

/// Configuration for an [`OnlineParser`].
#[derive(Clone, Debug)]
pub struct ParserOptions {
    /// Which top-level definitions are recognised.
    pub dialect: Dialect,

    /// The lexical grammar.
    pub lex_rules: &'static LexRules,

    /// Consumes a run of ignored characters, returning whether any were
    /// consumed.
    pub eat_whitespace: fn(&mut CharacterStream<'_>) -> bool,

    /// Number of columns per indentation level when measuring a line's
    /// leading whitespace.
    pub tab_size: usize,

    /// Number of columns [`OnlineParser::indentation`] returns per level.
    pub indent_unit: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            lex_rules: LexRules::graphql(),
            eat_whitespace: eat_ignored,
            tab_size: 2,
            indent_unit: 2,
        }
    }
}

fn eat_ignored(stream: &mut CharacterStream<'_>) -> bool {
    stream.eat_while(crate::CharPredicate(is_ignored))
}

/// An incremental, error-tolerant GraphQL tokenizer.
///
/// Given the [`TokenState`] left behind by the previous token, `token()`
/// consumes exactly one token from the stream and reports its [`Style`]. It
/// never fails; input that does not fit the grammar is reported as
/// [`Style::Invalid`] and the parser resynchronizes on the following token.
///
/// The state carries the full grammar context (which rule, which step, which
/// enclosing names), which is what editor features such as autocompletion and
/// hover read back out of it.
#[derive(Clone, Debug, Default)]
pub struct OnlineParser {
    options: ParserOptions,
}

impl OnlineParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn with_dialect(dialect: Dialect) -> Self {
        Self::with_options(ParserOptions {
            dialect,
            ..ParserOptions::default()
        })
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// The indentation (in columns) an editor should give a line whose text
    /// starts with `text_after`, given the state at the end of the previous
    /// line.
    pub fn indentation(&self, state: &TokenState, text_after: &str) -> usize {
        static CLOSING: OnceLock<Regex> = OnceLock::new();
        let closing = CLOSING.get_or_init(|| {
            Regex::new(r"^\s*[})\]]").expect("closing bracket regex is valid")
        });

        let level = match state.levels.last() {
            None => state.indent_level.unwrap_or(0),
            Some(last) if closing.is_match(text_after) => last.saturating_sub(1),
            Some(last) => *last,
        };
        level * self.options.indent_unit
    }

    fn lex_fallback(&self, stream: &mut CharacterStream<'_>) {
        static NON_WHITESPACE: OnceLock<Regex> = OnceLock::new();
        let non_whitespace = NON_WHITESPACE.get_or_init(|| {
            Regex::new(r"^\S+").expect("non-whitespace regex is valid")
        });
        if stream.match_regex(non_whitespace, true).is_none() {
            stream.next_char();
        }
    }
}

#[inherent]
impl Parser for OnlineParser {
    type State = TokenState;

    pub fn start_state(&self) -> TokenState {
        let mut state = TokenState::empty();
        state.push_rule(RuleKind::Document);
        state
    }

    pub fn token(
        &self,
        stream: &mut CharacterStream<'_>,
        state: &mut TokenState,
    ) -> Style {
        stream.begin_token();
        if stream.at_end() {
            return Style::Whitespace;
        }

        if state.top_is_marker() {
            state.pop_rule();
        } else if state.needs_advance {
            state.needs_advance = false;
            advance_rule(state, true);
        }

        if stream.sol() {
            state.indent_level =
                Some(stream.indentation() / self.options.tab_size.max(1));
        }

        if (self.options.eat_whitespace)(stream) {
            return Style::Whitespace;
        }

        let Some(token) = self.options.lex_rules.lex(stream) else {
            self.lex_fallback(stream);
            state.push_rule(RuleKind::Invalid);
            return Style::Invalid;
        };

        if token.kind == LexKind::Comment {
            state.push_rule(RuleKind::Comment);
            return Style::Comment;
        }

        let backup = state.clone();
        track_indent_levels(state, &token);

        while let Some(kind) = state.kind() {
            let expected = match grammar::parse_rule(kind) {
                ParseRule::Fork(fork) =>
                    if state.step() == 0 {
                        fork(&token, stream, self.options.dialect).map(Step::rule)
                    } else {
                        None
                    },
                ParseRule::Sequence(steps) => steps.get(state.step()).copied(),
            };
            let expected =
                if state.needs_separator() {
                    expected.and_then(|step| step.separator_step())
                } else {
                    expected
                };

            match expected.map(|step| step.expect) {
                Some(Expectation::Rule(kind)) => {
                    state.push_rule(kind);
                    continue;
                },
                Some(Expectation::Terminal(terminal)) if terminal.matches(&token) => {
                    apply_update(state, terminal.update, token.value);
                    if token.kind == LexKind::Punctuation {
                        advance_rule(state, true);
                    } else {
                        state.needs_advance = true;
                    }
                    return terminal.style;
                },
                _ => unsuccessful(state),
            }
        }

        // Nothing on the stack accepts this token.
        *state = backup;
        state.push_rule(RuleKind::Invalid);
        Style::Invalid
    }

    pub fn token_state<'s>(&self, state: &'s TokenState) -> Option<&'s TokenState> {
        Some(state)
    }
}

fn track_indent_levels(state: &mut TokenState, token: &LexToken<'_>) {
    if token.kind != LexKind::Punctuation {
        return;
    }
    match token.value {
        "{" | "(" | "[" => {
            if let Some(indent_level) = state.indent_level {
                state.levels.push(indent_level + 1);
            }
        },
        "}" | ")" | "]" => {
            state.levels.pop();
            if let (Some(indent_level), Some(last)) =
                (state.indent_level, state.levels.last().copied())
                && indent_level > 0
                && last < indent_level
            {
                state.indent_level = Some(last);
            }
        },
        _ => (),
    }
}

fn apply_update(state: &mut TokenState, update: StateUpdate, value: &str) {
    match update {
        StateUpdate::None => (),
        StateUpdate::Name => {
            state.top_mut().name = Some(value.to_string());
        },
        StateUpdate::TypeName => {
            let depth = state.depth();
            if depth >= 3 {
                state.top_mut().name = Some(value.to_string());
                state.frames[depth - 3].type_name = Some(value.to_string());
            }
        },
    }
}

/// The step the innermost frame is currently on, if it is a sequence.
fn current_step(state: &TokenState) -> Option<Step> {
    let kind = state.kind()?;
    match grammar::parse_rule(kind) {
        ParseRule::Sequence(steps) => steps.get(state.step()).copied(),
        ParseRule::Fork(_) => None,
    }
}

fn is_list(state: &TokenState) -> bool {
    current_step(state).is_some_and(|step| step.is_list())
}

/// Whether the innermost frame still has steps left to match.
fn rule_is_incomplete(state: &TokenState) -> bool {
    let Some(kind) = state.kind() else {
        return false;
    };
    match grammar::parse_rule(kind) {
        ParseRule::Sequence(steps) => state.step() < steps.len(),
        ParseRule::Fork(_) => false,
    }
}

fn toggle_separator(state: &mut TokenState) {
    let top = state.top_mut();
    top.needs_separator = !top.needs_separator;
}

/// Moves the innermost frame past its current step, popping every frame that
/// this completes.
fn advance_rule(state: &mut TokenState, successful: bool) {
    if !state.has_rule() {
        return;
    }

    if let Some(step) = current_step(state)
        && step.is_list()
    {
        if step.separator().is_some() {
            toggle_separator(state);
        }
        // A matched list element keeps the list open for more elements.
        if successful {
            return;
        }
    }

    {
        let top = state.top_mut();
        top.needs_separator = false;
        top.step += 1;
    }

    while state.has_rule() && !rule_is_incomplete(state) {
        state.pop_rule();
        if !state.has_rule() {
            break;
        }
        if is_list(state) {
            if current_step(state).and_then(|step| step.separator()).is_some() {
                toggle_separator(state);
            }
        } else {
            let top = state.top_mut();
            top.needs_separator = false;
            top.step += 1;
        }
    }
}

/// Unwinds frames until one whose current step may be skipped, then skips it.
fn unsuccessful(state: &mut TokenState) {
    while state.has_rule() && !current_step(state).is_some_and(|step| step.may_skip()) {
        state.pop_rule();
    }
    if state.has_rule() {
        advance_rule(state, false);
    }
}
