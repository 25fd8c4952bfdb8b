use crate::interface::cursor::CursorTarget;
use crate::interface::cursor::target_at_position;
use crate::schema::Schema;
use crate::types::DirectiveDefinition;
use crate::types::InputValue;
use graphql_online_parser::Parser;
use graphql_online_parser::Position;
use indexmap::IndexMap;

/// Markdown describing the schema element under the cursor, if any.
///
/// The first block is always a `graphql` code block holding the element's
/// signature; descriptions and deprecation reasons follow as paragraphs.
pub fn get_hover_information<P: Parser>(
    schema: &Schema,
    parser: &P,
    source: &str,
    position: Position,
) -> Option<String> {
    let (signature, description, deprecation) =
        match target_at_position(schema, parser, source, position)? {
            CursorTarget::Type(name) => {
                let named_type = schema.get_type(&name)?;
                if named_type.is_placeholder() {
                    return None;
                }
                (
                    format!("{} {}", named_type.kind().keyword(), named_type.name()),
                    named_type.description(),
                    None,
                )
            },

            CursorTarget::Field { parent, field } => (
                format!(
                    "{}.{}{}: {}",
                    parent.name(),
                    field.name(),
                    parameter_list(field.parameters()),
                    field.type_annotation(),
                ),
                field.description(),
                field.deprecation_reason(),
            ),

            CursorTarget::InputValue(input_value) =>
                (input_value_signature(input_value), input_value.description(), None),

            CursorTarget::Directive(directive) =>
                (directive_signature(directive), directive.description(), None),

            CursorTarget::EnumValue { enum_type, value } => (
                format!("{}.{}", enum_type.name(), value.name()),
                value.description(),
                value.deprecation_reason(),
            ),

            CursorTarget::Fragment(_) => return None,
        };

    let mut markdown = format!("```graphql\n{signature}\n```");
    if let Some(description) = description {
        markdown.push_str("\n\n");
        markdown.push_str(description);
    }
    if let Some(reason) = deprecation {
        markdown.push_str(&format!("\n\nDeprecated: {reason}"));
    }
    Some(markdown)
}

fn input_value_signature(input_value: &InputValue) -> String {
    match input_value.default_value() {
        Some(default) =>
            format!("{}: {} = {default}", input_value.name(), input_value.type_annotation()),
        None =>
            format!("{}: {}", input_value.name(), input_value.type_annotation()),
    }
}

fn parameter_list(parameters: &IndexMap<String, InputValue>) -> String {
    if parameters.is_empty() {
        return String::new();
    }
    let parameters =
        parameters.values()
            .map(input_value_signature)
            .collect::<Vec<_>>();
    format!("({})", parameters.join(", "))
}

fn directive_signature(directive: &DirectiveDefinition) -> String {
    format!(
        "directive @{}{}{} on {}",
        directive.name(),
        parameter_list(directive.parameters()),
        if directive.is_repeatable() { " repeatable" } else { "" },
        directive.locations().join(" | "),
    )
}
