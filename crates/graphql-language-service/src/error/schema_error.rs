use crate::error::GQLError;
use crate::error::InterfaceConformanceError;
use crate::error::SchemaBuildError;
use crate::error::SchemaExtensionError;
use crate::error::SyntaxError;
use crate::error::ToGQLError;
use crate::error::TypeValidationError;
use thiserror::Error;

/// Any of the accumulated (never fatal) errors a schema pass can report.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SchemaError {
    #[error(transparent)]
    Build(#[from] SchemaBuildError),

    #[error(transparent)]
    Conformance(#[from] InterfaceConformanceError),

    #[error(transparent)]
    Extension(#[from] SchemaExtensionError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    TypeValidation(#[from] TypeValidationError),
}
impl ToGQLError for SchemaError {
    fn to_gql_error(&self) -> GQLError {
        match self {
            Self::Build(err) => err.to_gql_error(),
            Self::Conformance(err) => err.to_gql_error(),
            Self::Extension(err) => err.to_gql_error(),
            Self::Syntax(err) => err.to_gql_error(),
            Self::TypeValidation(err) => err.to_gql_error(),
        }
    }
}
