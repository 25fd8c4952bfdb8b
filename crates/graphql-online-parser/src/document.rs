use crate::Position;
use std::ops::Range;

/// The delimiters that opened (and, if the region was terminated, closed) an
/// embedded document.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct DocumentDelimiters {
    pub start: String,
    pub end: Option<String>,
}

/// A GraphQL document extracted from a host file.
///
/// `text` is laid out so that every byte offset (and therefore every
/// line/column position) in it lines up with the same offset in the host
/// file: everything before the document body is replaced by whitespace of the
/// same byte length, with line breaks kept. The body itself is
/// `text[span.clone()]`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Document {
    pub text: String,
    pub span: Range<usize>,
    pub delimiters: Option<DocumentDelimiters>,
}

impl Document {
    /// A document covering the whole of `source`.
    pub fn whole_file(source: &str) -> Self {
        Self {
            text: source.to_string(),
            span: 0..source.len(),
            delimiters: None,
        }
    }

    /// The document body without the whitespace prefix.
    pub fn body(&self) -> &str {
        &self.text[self.span.clone()]
    }

    /// Whether this document came from a delimited region of a host file.
    pub fn is_embedded(&self) -> bool {
        self.delimiters.is_some()
    }

    /// Whether this document's region was still open at the end of the host
    /// file.
    pub fn is_unterminated(&self) -> bool {
        self.delimiters.as_ref().is_some_and(|d| d.end.is_none())
    }

    /// Whether byte `offset` of the host file falls within this document's
    /// body (inclusive of the end, so a cursor right after the last character
    /// counts).
    pub fn contains_offset(&self, offset: usize) -> bool {
        self.span.start <= offset && offset <= self.span.end
    }

    /// Maps a position reported against `self.text` (e.g. by a GraphQL parser
    /// error) to the same character in `host`.
    ///
    /// Byte offsets are shared between the two, so lines always agree; columns
    /// only differ where multi-byte host characters before the position were
    /// padded with several spaces.
    pub fn to_host_position(&self, host: &str, position: Position) -> Position {
        Position::from_offset(host, position.to_offset(&self.text))
    }
}

/// Replaces every character of `text` with whitespace of the same UTF-8 byte
/// length, keeping `\n` and `\r` so line numbers are unchanged.
pub fn whitespace_copy(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' | '\r' => out.push(ch),
            _ => out.extend(std::iter::repeat_n(' ', ch.len_utf8())),
        }
    }
    out
}
