use crate::error::GQLError;
use crate::error::Severity;
use crate::error::ToGQLError;
use crate::loc;
use crate::types::TypeKind;
use thiserror::Error;

/// A type used in a position its kind is not allowed in.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "Input fields can not be declared with a non-input type: The \
        `{parent_type_name}.{field_name}` field is an input field, but the \
        `{invalid_type_name}` type is {} type.",
        invalid_type_kind.article_name(),
    )]
    InvalidInputFieldWithOutputType {
        parent_type_name: String,
        field_name: String,
        invalid_type_name: String,
        invalid_type_kind: TypeKind,
        location: loc::FilePosition,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input object type."
    )]
    InvalidOutputFieldWithInputType {
        parent_type_name: String,
        field_name: String,
        input_type_name: String,
        location: loc::FilePosition,
    },

    #[error(
        "Arguments can only be declared with input types: The \
        `{owner}({parameter_name}:)` argument was declared with the \
        `{invalid_type_name}` type, which is {} type.",
        invalid_type_kind.article_name(),
    )]
    InvalidParameterWithOutputOnlyType {
        owner: String,
        parameter_name: String,
        invalid_type_name: String,
        invalid_type_kind: TypeKind,
        location: loc::FilePosition,
    },

    #[error(
        "Union type `{union_type_name}` can only include object types, but \
        `{member_type_name}` is {} type.",
        member_type_kind.article_name(),
    )]
    InvalidUnionMemberTypeKind {
        union_type_name: String,
        member_type_name: String,
        member_type_kind: TypeKind,
        location: loc::FilePosition,
    },
}
impl TypeValidationError {
    pub fn location(&self) -> &loc::FilePosition {
        match self {
            Self::InvalidInputFieldWithOutputType { location, .. }
            | Self::InvalidOutputFieldWithInputType { location, .. }
            | Self::InvalidParameterWithOutputOnlyType { location, .. }
            | Self::InvalidUnionMemberTypeKind { location, .. }
                => location,
        }
    }
}
impl ToGQLError for TypeValidationError {
    fn to_gql_error(&self) -> GQLError {
        GQLError::new(self.to_string(), Severity::Error, [self.location()])
    }
}
