use crate::interface::cursor::CursorTarget;
use crate::interface::cursor::collect_fragments;
use crate::interface::cursor::target_at_position;
use crate::loc::FilePosition;
use crate::schema::Schema;
use graphql_online_parser::Parser;
use graphql_online_parser::Position;

/// Where the element under the cursor is defined.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub enum DefinitionLocation {
    /// In one of the project's schema files.
    Schema(FilePosition),
    /// In the same text the query was made against (fragments).
    Source(Position),
}

/// Finds the definition of the type, field, argument, directive, enum value
/// or fragment under the cursor.
///
/// Built-in types and directives have no definition to jump to, and neither
/// do placeholder types standing in for undefined names.
pub fn get_definition<P: Parser>(
    schema: &Schema,
    parser: &P,
    source: &str,
    position: Position,
) -> Option<DefinitionLocation> {
    let location = match target_at_position(schema, parser, source, position)? {
        CursorTarget::Type(name) => {
            let named_type = schema.get_type(&name)?;
            if named_type.is_placeholder() {
                return None;
            }
            named_type.def_location()
        },
        CursorTarget::Field { field, .. } => field.def_location(),
        CursorTarget::InputValue(input_value) => input_value.def_location(),
        CursorTarget::Directive(directive) => directive.def_location(),
        CursorTarget::EnumValue { value, .. } => value.def_location(),
        CursorTarget::Fragment(name) =>
            return collect_fragments(parser, source)
                .into_iter()
                .find(|fragment| fragment.name == name)
                .map(|fragment| DefinitionLocation::Source(fragment.position)),
    };
    location.file_position()
        .cloned()
        .map(DefinitionLocation::Schema)
}
