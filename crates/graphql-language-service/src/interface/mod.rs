//! Editor queries over GraphQL text: autocomplete, hover, go-to-definition
//! and find-references.
//!
//! Every query replays a [`Parser`](graphql_online_parser::Parser) over the
//! text from its start up to the cursor and interprets the resulting rule
//! stack against an assembled [`Schema`](crate::schema::Schema).

mod autocomplete;
mod cursor;
mod definition;
mod hover;
mod references;
mod type_info;

pub use autocomplete::CompletionItem;
pub use autocomplete::CompletionKind;
pub use autocomplete::get_autocomplete_suggestions;
pub use definition::DefinitionLocation;
pub use definition::get_definition;
pub use hover::get_hover_information;
pub use references::find_references;
pub use type_info::TypeInfo;

#[cfg(test)]
mod tests;
