mod build_options;
#[allow(clippy::module_inception)]
mod schema;
mod schema_assembler;
mod schema_document;
mod schema_extender;
mod schema_validator;

pub use build_options::BuildOptions;
pub use schema::Schema;
pub use schema_assembler::SchemaAssembler;
pub use schema_assembler::SchemaAssembly;
pub use schema_document::SchemaDocument;
pub use schema_extender::extend_schema;
pub use schema_validator::validate_schema;

#[cfg(test)]
mod tests;
