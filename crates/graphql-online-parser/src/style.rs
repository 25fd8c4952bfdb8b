/// The display category attached to each token produced by a
/// [`Parser`](crate::Parser).
///
/// Editors use these to colour tokens; the document extractor uses the
/// embedding-specific variants to find region boundaries and interpolation
/// holes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Atom,
    Attribute,
    Builtin,
    Comment,
    Def,
    Keyword,
    Meta,
    Number,
    Property,
    Punctuation,
    Qualifier,
    String,
    #[serde(rename = "string-2")]
    String2,
    Variable,

    /// A run of ignored characters (whitespace, commas, BOM).
    #[serde(rename = "ws")]
    Whitespace,

    /// Input that could not be lexed or did not fit the grammar.
    #[serde(rename = "invalidchar")]
    Invalid,

    // Host-language embedding.
    /// Host-language text outside any embedded region.
    #[serde(rename = "empty")]
    HostText,
    /// The opening delimiter of an embedded region.
    EmbeddedStart,
    /// The closing delimiter of an embedded region.
    EmbeddedEnd,
    /// A `${...}` hole inside an embedded region.
    Interpolation,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::Attribute => "attribute",
            Self::Builtin => "builtin",
            Self::Comment => "comment",
            Self::Def => "def",
            Self::Keyword => "keyword",
            Self::Meta => "meta",
            Self::Number => "number",
            Self::Property => "property",
            Self::Punctuation => "punctuation",
            Self::Qualifier => "qualifier",
            Self::String => "string",
            Self::String2 => "string-2",
            Self::Variable => "variable",
            Self::Whitespace => "ws",
            Self::Invalid => "invalidchar",
            Self::HostText => "empty",
            Self::EmbeddedStart => "embedded-start",
            Self::EmbeddedEnd => "embedded-end",
            Self::Interpolation => "interpolation",
        }
    }

    /// Whether tokens of this style carry no GraphQL meaning (whitespace,
    /// comments, host text).
    pub fn is_trivia(&self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment | Self::HostText)
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
