use crate::interface::cursor::CursorTarget;
use crate::interface::cursor::target_at_position;
use crate::schema::Schema;
use crate::types::TypeReference;
use graphql_online_parser::Parser;
use graphql_online_parser::Position;

/// Every recorded place in `schema` that references the named type under
/// the cursor, in assembly order.
///
/// Only type names have references; any other token yields nothing.
pub fn find_references<'s, P: Parser>(
    schema: &'s Schema,
    parser: &P,
    source: &str,
    position: Position,
) -> &'s [TypeReference] {
    match target_at_position(schema, parser, source, position) {
        Some(CursorTarget::Type(name)) => schema.type_dependents(&name),
        _ => &[],
    }
}
