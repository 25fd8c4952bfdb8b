use crate::RuleKind;
use smallvec::SmallVec;
use smallvec::smallvec;

/// One entry on the [`TokenState`] rule stack.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RuleFrame {
    pub(crate) kind: Option<RuleKind>,
    pub(crate) step: usize,
    pub(crate) name: Option<String>,
    pub(crate) type_name: Option<String>,
    pub(crate) needs_separator: bool,
}

impl RuleFrame {
    fn root() -> Self {
        Self {
            kind: None,
            step: 0,
            name: None,
            type_name: None,
            needs_separator: false,
        }
    }

    fn for_rule(kind: RuleKind) -> Self {
        Self {
            kind: Some(kind),
            step: 0,
            name: None,
            type_name: None,
            needs_separator: false,
        }
    }

    /// The production this frame is parsing. `None` only for the root.
    pub fn kind(&self) -> Option<RuleKind> {
        self.kind
    }

    /// Index of the next step of this frame's production.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The name recorded by this frame, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The type name recorded into this frame by a nested type reference.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn needs_separator(&self) -> bool {
        self.needs_separator
    }
}

/// The complete, cloneable parser state between two tokens.
///
/// A `TokenState` is a stack of [`RuleFrame`]s (innermost last) plus a few
/// bits of global bookkeeping. The bottom frame is a sentinel with no
/// [`RuleKind`]; when only the sentinel remains the parser has nothing left
/// to match.
///
/// Because the state is plain data, an editor can snapshot it at the end of
/// every line and restart tokenization from any snapshot: feeding the same
/// text from a snapshot produces exactly the same tokens and end state as an
/// uninterrupted run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenState {
    pub(crate) frames: SmallVec<[RuleFrame; 16]>,
    pub(crate) needs_advance: bool,
    pub(crate) indent_level: Option<usize>,
    pub(crate) levels: Vec<usize>,
}

impl TokenState {
    /// A state with only the root sentinel frame.
    pub(crate) fn empty() -> Self {
        Self {
            frames: smallvec![RuleFrame::root()],
            needs_advance: false,
            indent_level: None,
            levels: vec![],
        }
    }

    /// The innermost frame.
    pub fn top(&self) -> &RuleFrame {
        // The root sentinel is never popped.
        &self.frames[self.frames.len() - 1]
    }

    pub(crate) fn top_mut(&mut self) -> &mut RuleFrame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    pub fn kind(&self) -> Option<RuleKind> {
        self.top().kind
    }

    pub fn step(&self) -> usize {
        self.top().step
    }

    pub fn name(&self) -> Option<&str> {
        self.top().name()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.top().type_name()
    }

    pub fn needs_separator(&self) -> bool {
        self.top().needs_separator
    }

    /// Whether the previous token still has to advance the current rule.
    pub fn needs_advance(&self) -> bool {
        self.needs_advance
    }

    /// Indentation level (in tab stops) of the line being tokenized.
    pub fn indent_level(&self) -> Option<usize> {
        self.indent_level
    }

    /// All frames from the root sentinel to the innermost.
    pub fn frames(&self) -> &[RuleFrame] {
        &self.frames
    }

    /// Number of frames, including the root sentinel.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The frame directly enclosing the innermost one, if any.
    pub fn parent(&self) -> Option<&RuleFrame> {
        let len = self.frames.len();
        if len >= 2 { self.frames.get(len - 2) } else { None }
    }

    /// Visits every frame that has a rule, outermost first.
    pub fn for_each_state(&self, mut visit: impl FnMut(&RuleFrame)) {
        self.frames
            .iter()
            .filter(|frame| frame.kind.is_some())
            .for_each(|frame| visit(frame));
    }

    /// Whether any frame on the stack is parsing `kind`.
    pub fn contains_kind(&self, kind: RuleKind) -> bool {
        self.frames.iter().any(|frame| frame.kind == Some(kind))
    }

    /// Whether the innermost frame is an empty marker rule (comment or
    /// invalid token).
    pub(crate) fn top_is_marker(&self) -> bool {
        matches!(self.kind(), Some(RuleKind::Comment | RuleKind::Invalid))
    }

    pub(crate) fn has_rule(&self) -> bool {
        self.top().kind.is_some()
    }

    pub(crate) fn push_rule(&mut self, kind: RuleKind) {
        self.frames.push(RuleFrame::for_rule(kind));
    }

    /// Pops the innermost frame. The root sentinel is never popped.
    pub(crate) fn pop_rule(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }
}
