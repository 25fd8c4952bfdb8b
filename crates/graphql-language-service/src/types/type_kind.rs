use crate::types::NamedType;

/// Similar to [`NamedType`] except without the corresponding type data.
/// Useful when representing a group or category of [`NamedType`]s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum TypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl TypeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input object",
            Self::Interface => "interface",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }

    pub(crate) fn article_name(&self) -> &'static str {
        match self {
            Self::Enum => "an enum",
            Self::InputObject => "an input object",
            Self::Interface => "an interface",
            Self::Object => "an object",
            Self::Scalar => "a scalar",
            Self::Union => "a union",
        }
    }

    /// The SDL keyword that defines a type of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::InputObject => "input",
            Self::Interface => "interface",
            Self::Object => "type",
            Self::Scalar => "scalar",
            Self::Union => "union",
        }
    }

    /// Types that may be used for arguments, variables and input fields.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Enum | Self::InputObject | Self::Scalar)
    }

    /// Types that may be used for output fields.
    pub fn is_output(&self) -> bool {
        !matches!(self, Self::InputObject)
    }

    /// Types that may have selection sets.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }
}
impl std::convert::From<&NamedType> for TypeKind {
    fn from(value: &NamedType) -> Self {
        value.kind()
    }
}

/// The three root operation kinds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}
impl OperationKind {
    /// The type name used for this root operation when no `schema { ... }`
    /// block names one.
    pub fn default_type_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_type_name())
    }
}
