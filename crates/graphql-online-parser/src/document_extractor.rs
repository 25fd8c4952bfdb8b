use crate::CharacterStream;
use crate::Document;
use crate::DocumentDelimiters;
use crate::Parser;
use crate::RuleKind;
use crate::Style;
use crate::TokenState;
use crate::document::whitespace_copy;

/// How an interpolation hole is rewritten in an extracted document.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InterpolationPolicy {
    /// The hole is inside a selection set: replace it with a fragment spread
    /// of the same byte length (`...___`) so the selection set still parses.
    FragmentSpread,

    /// The hole is at document level (composing sibling documents): replace
    /// it with whitespace of the same byte length.
    Whitespace,
}

impl InterpolationPolicy {
    /// Picks the policy for a hole encountered with the given grammar state.
    ///
    /// The innermost selection-set or value frame decides: a hole in argument,
    /// variable or value position is whitespace even inside a selection set.
    pub fn for_state(state: Option<&TokenState>) -> Self {
        let Some(state) = state else {
            return Self::Whitespace;
        };
        for frame in state.frames().iter().rev() {
            match frame.kind() {
                Some(RuleKind::SelectionSet) => return Self::FragmentSpread,
                Some(
                    RuleKind::Arguments
                    | RuleKind::Argument
                    | RuleKind::VariableDefinitions
                    | RuleKind::VariableDefinition
                    | RuleKind::DefaultValue
                    | RuleKind::Value
                    | RuleKind::ListValue
                    | RuleKind::ObjectValue
                    | RuleKind::ObjectField,
                ) => return Self::Whitespace,
                _ => (),
            }
        }
        Self::Whitespace
    }

    /// Produces the same-length replacement text for `hole`.
    pub fn replace(&self, hole: &str) -> String {
        let mut replacement = whitespace_copy(hole);
        if *self == Self::FragmentSpread {
            let first_line_len =
                replacement
                    .find(['\n', '\r'])
                    .unwrap_or(replacement.len());
            // `...` plus at least one name character.
            if first_line_len >= 4 {
                let spread = format!("...{}", "_".repeat(first_line_len - 3));
                replacement.replace_range(..first_line_len, &spread);
            }
        }
        replacement
    }
}

/// Drives a [`Parser`] across a whole file and collects the GraphQL documents
/// it finds.
///
/// Every returned [`Document`] has text whose byte offsets match the host
/// file's: text before the document body is replaced by whitespace (keeping
/// line breaks) and interpolation holes are replaced by same-length text per
/// [`InterpolationPolicy`].
#[derive(Clone, Debug)]
pub struct DocumentExtractor<P: Parser> {
    parser: P,
}

/// A document whose region has been opened but not yet closed.
struct PendingDocument {
    text: String,
    body_start: usize,
    start_delimiter: Option<String>,
}

impl PendingDocument {
    fn new(source: &str, body_start: usize, start_delimiter: Option<String>) -> Self {
        Self {
            text: whitespace_copy(&source[..body_start]),
            body_start,
            start_delimiter,
        }
    }

    fn finish(self, end_delimiter: Option<String>) -> Document {
        let body_end = self.text.len();
        Document {
            span: self.body_start..body_end,
            delimiters: self.start_delimiter.map(|start| DocumentDelimiters {
                start,
                end: end_delimiter,
            }),
            text: self.text,
        }
    }
}

impl<P: Parser> DocumentExtractor<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Extracts every document in `source`, in order of appearance.
    ///
    /// A region that is still open at the end of `source` yields a partial
    /// document (with no end delimiter) rather than being dropped.
    pub fn get_documents(&self, source: &str) -> Vec<Document> {
        let mut documents = vec![];
        let mut stream = CharacterStream::new(source);
        let mut state = self.parser.start_state();
        let mut pending =
            if self.parser.starts_inside_document() {
                Some(PendingDocument::new(source, 0, None))
            } else {
                None
            };

        while !stream.at_end() {
            let before = stream.position();
            let policy = InterpolationPolicy::for_state(self.parser.token_state(&state));
            let mut style = self.parser.token(&mut stream, &mut state);
            if stream.position() == before {
                stream.next_char();
                style = Style::Invalid;
            }

            match style {
                Style::EmbeddedStart => {
                    if let Some(open) = pending.take() {
                        documents.push(open.finish(None));
                    }
                    pending = Some(PendingDocument::new(
                        source,
                        stream.position(),
                        Some(stream.current().to_string()),
                    ));
                },
                Style::EmbeddedEnd => {
                    if let Some(open) = pending.take() {
                        documents.push(open.finish(Some(stream.current().to_string())));
                    }
                },
                Style::HostText => (),
                Style::Interpolation => {
                    if let Some(open) = pending.as_mut() {
                        open.text.push_str(&policy.replace(stream.current()));
                    }
                },
                _ => {
                    if let Some(open) = pending.as_mut() {
                        open.text.push_str(stream.current());
                    }
                },
            }
        }

        if let Some(open) = pending {
            documents.push(open.finish(None));
        }
        documents
    }
}
