//! Error-tolerant GraphQL schema assembly and editor queries.
//!
//! A [`Project`](project::Project) keeps the parsed documents of a set of
//! schema (and executable) files, assembles them into one
//! [`Schema`](schema::Schema) on every change batch and exposes the result as
//! an immutable snapshot. The [`interface`] functions answer autocomplete,
//! hover, go-to-definition and find-references queries against such a
//! snapshot.

pub mod ast;
pub mod error;
pub mod file_reader;
pub mod interface;
pub mod loc;
pub mod project;
pub mod schema;
pub mod types;

pub use error::GQLError;
pub use error::Severity;
pub use schema::Schema;
