mod configuration_error;
mod gql_error;
mod interface_conformance_error;
mod schema_build_error;
mod schema_error;
mod schema_extension_error;
mod syntax_error;
mod type_validation_error;

pub use configuration_error::ConfigurationError;
pub use gql_error::GQLError;
pub use gql_error::GQLErrorLocation;
pub use gql_error::Severity;
pub use gql_error::ToGQLError;
pub use interface_conformance_error::InterfaceConformanceError;
pub use schema_build_error::SchemaBuildError;
pub use schema_error::SchemaError;
pub use schema_extension_error::SchemaExtensionError;
pub use syntax_error::SyntaxError;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
