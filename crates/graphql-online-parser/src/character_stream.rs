use regex::Regex;

/// Something that can decide whether a single character "matches".
///
/// Used by [`CharacterStream::eat`] and [`CharacterStream::eat_while`] so
/// callers can pass a literal `char`, a [`Regex`], or a closure wrapped in
/// [`CharPredicate`].
pub trait CharPattern {
    fn matches_char(&self, ch: char) -> bool;
}

impl CharPattern for char {
    fn matches_char(&self, ch: char) -> bool {
        *self == ch
    }
}

impl CharPattern for Regex {
    fn matches_char(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.is_match(ch.encode_utf8(&mut buf))
    }
}

impl<T: CharPattern + ?Sized> CharPattern for &T {
    fn matches_char(&self, ch: char) -> bool {
        (**self).matches_char(ch)
    }
}

/// Adapts any `Fn(char) -> bool` into a [`CharPattern`].
#[derive(Clone, Copy, Debug)]
pub struct CharPredicate<F>(pub F);

impl<F: Fn(char) -> bool> CharPattern for CharPredicate<F> {
    fn matches_char(&self, ch: char) -> bool {
        (self.0)(ch)
    }
}

/// A cursor over a single, immutable source buffer.
///
/// The stream tracks two byte offsets into the buffer:
///
/// - `start`: where the token currently being scanned began
/// - `pos`: the current read position
///
/// `start <= pos <= source.len()` always holds, and both offsets always lie on
/// UTF-8 character boundaries. Every method that consumes input advances `pos`
/// by whole characters.
///
/// All offsets exposed by this type are absolute byte offsets into the
/// original buffer (never relative to the current line).
#[derive(Clone, Debug)]
pub struct CharacterStream<'src> {
    source: &'src str,
    start: usize,
    pos: usize,
}

impl<'src> CharacterStream<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            pos: 0,
        }
    }

    /// The full buffer this stream reads from.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The not-yet-consumed tail of the buffer.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Marks the current position as the start of a new token.
    pub fn begin_token(&mut self) {
        self.start = self.pos;
    }

    /// Byte offset at which the current token began.
    pub fn start_of_token(&self) -> usize {
        self.start
    }

    /// Current byte offset of the read cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The text of the current token: `source[start..pos]`.
    pub fn current(&self) -> &'src str {
        &self.source[self.start..self.pos]
    }

    /// Whether the whole buffer has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Whether the cursor sits at the start of a line.
    pub fn sol(&self) -> bool {
        self.pos == 0 || self.source.as_bytes()[self.pos - 1] == b'\n'
    }

    /// Whether the cursor sits at the end of a line (or of the buffer).
    pub fn eol(&self) -> bool {
        matches!(self.peek(), None | Some('\n') | Some('\r'))
    }

    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes and returns the next character, if any.
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consumes the next character only if it satisfies `pattern`.
    pub fn eat<P: CharPattern>(&mut self, pattern: P) -> Option<char> {
        let ch = self.peek()?;
        if pattern.matches_char(ch) {
            self.pos += ch.len_utf8();
            Some(ch)
        } else {
            None
        }
    }

    /// Consumes characters for as long as they satisfy `pattern`. Returns
    /// whether anything was consumed.
    pub fn eat_while<P: CharPattern>(&mut self, pattern: P) -> bool {
        let before = self.pos;
        while self.eat(&pattern).is_some() {}
        self.pos > before
    }

    /// Consumes a run of whitespace characters.
    pub fn eat_space(&mut self) -> bool {
        self.eat_while(CharPredicate(char::is_whitespace))
    }

    pub fn skip_to_end(&mut self) {
        self.pos = self.source.len();
    }

    /// Moves the cursor to `position`, clamped to the buffer and snapped back
    /// to the nearest character boundary.
    pub fn skip_to(&mut self, position: usize) {
        let mut position = position.min(self.source.len());
        while !self.source.is_char_boundary(position) {
            position -= 1;
        }
        self.pos = position;
    }

    /// Tests whether the remaining input starts with `pattern`, consuming it
    /// when `consume` is set.
    pub fn match_str(
        &mut self,
        pattern: &str,
        consume: bool,
        case_fold: bool,
    ) -> bool {
        let Some(candidate) = self.remaining().get(..pattern.len()) else {
            return false;
        };
        let matched =
            if case_fold {
                candidate.to_lowercase() == pattern.to_lowercase()
            } else {
                candidate == pattern
            };
        if matched && consume {
            self.pos += pattern.len();
        }
        matched
    }

    /// Tests whether `pattern` matches at the cursor, returning the matched
    /// text (and consuming it when `consume` is set).
    ///
    /// A match that begins anywhere other than the cursor counts as no match.
    pub fn match_regex(
        &mut self,
        pattern: &Regex,
        consume: bool,
    ) -> Option<&'src str> {
        let matched = self.lookahead(pattern)?;
        if consume {
            self.pos += matched.len();
        }
        Some(matched)
    }

    /// Non-consuming form of [`CharacterStream::match_regex`].
    pub fn lookahead(&self, pattern: &Regex) -> Option<&'src str> {
        let remaining = self.remaining();
        pattern
            .find(remaining)
            .filter(|m| m.start() == 0)
            .map(|m| &remaining[..m.end()])
    }

    /// Moves the cursor back by `count` characters (never past the start of
    /// the buffer).
    pub fn back_up(&mut self, count: usize) {
        for _ in 0..count {
            let Some(ch) = self.source[..self.pos].chars().next_back() else {
                break;
            };
            self.pos -= ch.len_utf8();
        }
        self.start = self.start.min(self.pos);
    }

    /// 0-based character column of the cursor within its line.
    pub fn column(&self) -> usize {
        self.source[self.line_start()..self.pos].chars().count()
    }

    /// Width of the leading whitespace of the current line, counting a tab
    /// as two columns.
    pub fn indentation(&self) -> usize {
        self.source[self.line_start()..]
            .chars()
            .take_while(|ch| *ch == ' ' || *ch == '\t')
            .map(|ch| if ch == '\t' { 2 } else { 1 })
            .sum()
    }

    fn line_start(&self) -> usize {
        self.source[..self.pos]
            .rfind('\n')
            .map_or(0, |idx| idx + 1)
    }
}
