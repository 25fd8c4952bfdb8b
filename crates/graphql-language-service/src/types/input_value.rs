use crate::loc;
use crate::types::TypeAnnotation;

/// An argument of a field or directive, or a field of an input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) default_value: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputValue {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The default value, printed as GraphQL.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether a value must be supplied: non-null without a default.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
