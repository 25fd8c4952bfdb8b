//! An incremental, error-tolerant GraphQL tokenizer for editor tooling.
//!
//! The [`OnlineParser`] consumes one token at a time and keeps the full
//! grammar context in a cloneable [`TokenState`], so a tokenization can be
//! resumed from any saved state and never fails on incomplete input. The
//! [`EmbeddedLanguageParser`] wraps it to find GraphQL inside delimited
//! regions of host-language files (e.g. ``graphql`...` `` tagged templates),
//! and the [`DocumentExtractor`] turns either parser's output into
//! offset-preserving [`Document`]s that can be handed to a full GraphQL
//! parser.

mod character_stream;
mod document;
mod document_extractor;
mod embedded_language_parser;
mod grammar;
mod lex_rules;
mod online_parser;
mod parser;
mod position;
mod style;
mod token_at_position;
mod token_state;

pub use character_stream::CharacterStream;
pub use character_stream::CharPattern;
pub use character_stream::CharPredicate;
pub use document::Document;
pub use document::DocumentDelimiters;
pub use document::whitespace_copy;
pub use document_extractor::DocumentExtractor;
pub use document_extractor::InterpolationPolicy;
pub use embedded_language_parser::DelimiterPatternError;
pub use embedded_language_parser::EmbeddedLanguageParser;
pub use embedded_language_parser::EmbeddedState;
pub use grammar::Dialect;
pub use grammar::RuleKind;
pub use lex_rules::is_ignored;
pub use lex_rules::LexKind;
pub use lex_rules::LexRules;
pub use lex_rules::LexToken;
pub use online_parser::OnlineParser;
pub use online_parser::ParserOptions;
pub use parser::Parser;
pub use position::Position;
pub use style::Style;
pub use token_at_position::token_at_position;
pub use token_at_position::TokenInfo;
pub use token_state::RuleFrame;
pub use token_state::TokenState;

#[cfg(test)]
mod tests;
