use crate::CharacterStream;
use regex::Regex;
use std::sync::OnceLock;

/// The lexical category of a [`LexToken`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LexKind {
    Name,
    Punctuation,
    Number,
    String,
    Comment,
}

/// A single lexed token: its category plus the exact source text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LexToken<'src> {
    pub kind: LexKind,
    pub value: &'src str,
}

/// An ordered table of `(kind, pattern)` lexing rules.
///
/// [`LexRules::lex`] picks the rule producing the longest match at the cursor.
/// When two rules produce equally long matches, the one declared first wins.
#[derive(Clone, Debug)]
pub struct LexRules {
    rules: Vec<(LexKind, Regex)>,
}

impl LexRules {
    pub fn new(rules: Vec<(LexKind, Regex)>) -> Self {
        Self { rules }
    }

    /// The standard GraphQL lexical grammar.
    pub fn graphql() -> &'static LexRules {
        static RULES: OnceLock<LexRules> = OnceLock::new();
        RULES.get_or_init(|| {
            let rule = |kind: LexKind, pattern: &str| {
                let regex =
                    Regex::new(pattern)
                        .expect("built-in lex patterns are valid regexes");
                (kind, regex)
            };
            LexRules::new(vec![
                rule(LexKind::Name, r"^[_A-Za-z][_0-9A-Za-z]*"),
                rule(
                    LexKind::Punctuation,
                    r"^(?:!|\$|\(|\)|\.\.\.|:|=|&|@|\[|\]|\{|\||\})",
                ),
                rule(
                    LexKind::Number,
                    r"^-?(?:0|[1-9][0-9]*)(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?",
                ),
                rule(
                    LexKind::String,
                    concat!(
                        r#"^(?:"""(?:\\"""|[^"]|"[^"]|""[^"])*(?:""")?"#,
                        r#"|"(?:[^"\\\n\r]|\\(?:"|/|\\|b|f|n|r|t|u[0-9a-fA-F]{4}))*"?)"#,
                    ),
                ),
                rule(LexKind::Comment, r"^#[^\n\r]*"),
            ])
        })
    }

    /// Lexes one token at the cursor, consuming it on success.
    pub fn lex<'src>(
        &self,
        stream: &mut CharacterStream<'src>,
    ) -> Option<LexToken<'src>> {
        let mut best: Option<LexToken<'src>> = None;
        for (kind, pattern) in &self.rules {
            let Some(value) = stream.lookahead(pattern) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            if best.is_none_or(|best| value.len() > best.value.len()) {
                best = Some(LexToken { kind: *kind, value });
            }
        }
        let token = best?;
        stream.skip_to(stream.position() + token.value.len());
        Some(token)
    }
}

/// Whether `ch` is one of GraphQL's ignored characters.
pub fn is_ignored(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | ',' | '\n' | '\r' | '\u{feff}' | '\u{a0}')
}
