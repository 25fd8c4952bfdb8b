/// A 1-indexed line/column position in a text buffer.
///
/// `column` counts characters (not bytes) from the start of the line, so the
/// first character of a line is column 1 and a cursor placed just after the
/// last character of a 3-character line is column 4.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Converts this position into a byte offset into `text`.
    ///
    /// Positions past the end of a line clamp to the end of that line, and
    /// positions past the last line clamp to the end of `text`.
    pub fn to_offset(&self, text: &str) -> usize {
        let mut line_start = 0;
        for _ in 1..self.line.max(1) {
            match text[line_start..].find('\n') {
                Some(idx) => line_start += idx + 1,
                None => return text.len(),
            }
        }

        let line_end =
            text[line_start..]
                .find('\n')
                .map_or(text.len(), |idx| line_start + idx);
        text[line_start..line_end]
            .char_indices()
            .nth(self.column.saturating_sub(1))
            .map_or(line_end, |(idx, _)| line_start + idx)
    }

    /// The position of byte `offset` in `text` (clamped to the end of `text`).
    pub fn from_offset(text: &str, offset: usize) -> Self {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &text[..offset];
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        Self {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
