use crate::loc;

/// One place in a schema that mentions a named type.
///
/// `referrer` is a human-readable coordinate for the mentioning element:
/// `Query.user` for a field type, `Query.user(id:)` for an argument type,
/// `Player` for an `implements` entry or union member and `@dir(arg:)` for a
/// directive argument.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct TypeReference {
    pub(crate) location: loc::SourceLocation,
    pub(crate) referrer: String,
}
impl TypeReference {
    pub fn new(referrer: impl Into<String>, location: loc::SourceLocation) -> Self {
        Self {
            location,
            referrer: referrer.into(),
        }
    }

    pub fn location(&self) -> &loc::SourceLocation {
        &self.location
    }

    pub fn referrer(&self) -> &str {
        self.referrer.as_str()
    }
}
