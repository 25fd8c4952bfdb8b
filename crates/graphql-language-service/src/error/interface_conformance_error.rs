use crate::error::GQLError;
use crate::error::Severity;
use crate::error::ToGQLError;
use crate::loc;
use crate::types::TypeAnnotation;
use thiserror::Error;

/// Ways an object or interface type can fail to satisfy an interface it
/// declares it implements.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InterfaceConformanceError {
    #[error(
        "Type `{type_name}` can only implement interfaces, but \
        `{non_interface_type_name}` is not an interface type."
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
        location: loc::FilePosition,
    },

    #[error(
        "Interface field argument `{interface_name}.{field_name}({parameter_name}:)` \
        expects type `{expected_parameter_type}` but \
        `{type_name}.{field_name}({parameter_name}:)` is type \
        `{invalid_parameter_type}`."
    )]
    InvalidInterfaceSpecifiedFieldParameterType {
        type_name: String,
        interface_name: String,
        field_name: String,
        parameter_name: String,
        expected_parameter_type: TypeAnnotation,
        invalid_parameter_type: TypeAnnotation,
        location: loc::FilePosition,
    },

    #[error(
        "Interface field `{interface_name}.{field_name}` expects type \
        `{expected_field_type}` but `{type_name}.{field_name}` is type \
        `{invalid_field_type}`."
    )]
    InvalidInterfaceSpecifiedFieldType {
        type_name: String,
        interface_name: String,
        field_name: String,
        expected_field_type: TypeAnnotation,
        invalid_field_type: TypeAnnotation,
        location: loc::FilePosition,
    },

    #[error(
        "Object field `{type_name}.{field_name}` includes required argument \
        `{parameter_name}` that is missing from the interface field \
        `{interface_name}.{field_name}`."
    )]
    InvalidRequiredAdditionalParameter {
        type_name: String,
        interface_name: String,
        field_name: String,
        parameter_name: String,
        location: loc::FilePosition,
    },

    #[error(
        "Interface field `{interface_name}.{field_name}` expected but \
        `{type_name}` does not provide it."
    )]
    MissingInterfaceSpecifiedField {
        type_name: String,
        interface_name: String,
        field_name: String,
        location: loc::FilePosition,
    },

    #[error(
        "Interface field argument `{interface_name}.{field_name}({parameter_name}:)` \
        expected but `{type_name}.{field_name}` does not provide it."
    )]
    MissingInterfaceSpecifiedFieldParameter {
        type_name: String,
        interface_name: String,
        field_name: String,
        parameter_name: String,
        location: loc::FilePosition,
    },

    #[error(
        "Type `{type_name}` must implement `{missing_interface_name}` because \
        it is implemented by `{via_interface_name}`."
    )]
    MissingTransitiveInterfaceImplementation {
        type_name: String,
        via_interface_name: String,
        missing_interface_name: String,
        location: loc::FilePosition,
    },
}
impl InterfaceConformanceError {
    pub fn location(&self) -> &loc::FilePosition {
        match self {
            Self::ImplementsNonInterfaceType { location, .. }
            | Self::InvalidInterfaceSpecifiedFieldParameterType { location, .. }
            | Self::InvalidInterfaceSpecifiedFieldType { location, .. }
            | Self::InvalidRequiredAdditionalParameter { location, .. }
            | Self::MissingInterfaceSpecifiedField { location, .. }
            | Self::MissingInterfaceSpecifiedFieldParameter { location, .. }
            | Self::MissingTransitiveInterfaceImplementation { location, .. }
                => location,
        }
    }

    /// The `Type.field` this error is about, if it concerns a single field.
    pub fn field_coordinate(&self) -> Option<String> {
        match self {
            Self::InvalidInterfaceSpecifiedFieldParameterType { type_name, field_name, .. }
            | Self::InvalidInterfaceSpecifiedFieldType { type_name, field_name, .. }
            | Self::InvalidRequiredAdditionalParameter { type_name, field_name, .. }
            | Self::MissingInterfaceSpecifiedField { type_name, field_name, .. }
            | Self::MissingInterfaceSpecifiedFieldParameter { type_name, field_name, .. }
                => Some(format!("{type_name}.{field_name}")),

            Self::ImplementsNonInterfaceType { .. }
            | Self::MissingTransitiveInterfaceImplementation { .. }
                => None,
        }
    }
}
impl ToGQLError for InterfaceConformanceError {
    fn to_gql_error(&self) -> GQLError {
        GQLError::new(self.to_string(), Severity::Error, [self.location()])
    }
}
