use crate::interface::TypeInfo;
use crate::schema::Schema;
use crate::types::DirectiveDefinition;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::NamedType;
use graphql_online_parser::CharacterStream;
use graphql_online_parser::Parser;
use graphql_online_parser::Position;
use graphql_online_parser::RuleKind;
use graphql_online_parser::Style;
use graphql_online_parser::TokenState;
use graphql_online_parser::token_at_position;

/// The schema element named by the token under the cursor.
#[derive(Clone, Debug)]
pub(crate) enum CursorTarget<'s> {
    Directive(&'s DirectiveDefinition),
    EnumValue {
        enum_type: &'s EnumType,
        value: &'s EnumValue,
    },
    Field {
        parent: &'s NamedType,
        field: &'s Field,
    },
    Fragment(String),
    InputValue(&'s InputValue),
    /// A type name, whether or not the schema defines it.
    Type(String),
}

pub(crate) fn target_at_position<'s, P: Parser>(
    schema: &'s Schema,
    parser: &P,
    source: &str,
    position: Position,
) -> Option<CursorTarget<'s>> {
    let token = token_at_position(parser, source, position);
    let state = parser.token_state(&token.state)?;
    target_of_token(schema, state, token.style?, &token.string)
}

fn target_of_token<'s>(
    schema: &'s Schema,
    state: &TokenState,
    style: Style,
    text: &str,
) -> Option<CursorTarget<'s>> {
    let info = TypeInfo::resolve(schema, state);
    let target = match (style, state.kind()?) {
        (
            Style::Atom,
            RuleKind::NamedType
            | RuleKind::OperationTypeDef
            | RuleKind::ObjectTypeDef
            | RuleKind::InterfaceDef
            | RuleKind::UnionDef
            | RuleKind::EnumDef
            | RuleKind::InputDef
            | RuleKind::ScalarDef,
        ) => CursorTarget::Type(text.to_string()),

        (
            Style::Property | Style::Qualifier,
            RuleKind::Field | RuleKind::AliasedField | RuleKind::FieldDef,
        ) => CursorTarget::Field {
            parent: info.parent_type?,
            field: info.field_def?,
        },

        (
            Style::Attribute,
            RuleKind::Argument | RuleKind::ObjectField | RuleKind::InputValueDef,
        ) => CursorTarget::InputValue(info.argument_def?),

        (Style::Meta, RuleKind::Directive | RuleKind::DirectiveDef) =>
            CursorTarget::Directive(info.directive_def?),

        (Style::String2, RuleKind::EnumValue | RuleKind::EnumValueDef) => {
            let (enum_type, value) = info.enum_value(schema, text)?;
            CursorTarget::EnumValue { enum_type, value }
        },

        (Style::Def, RuleKind::FragmentSpread | RuleKind::FragmentDefinition) =>
            CursorTarget::Fragment(text.to_string()),

        _ => return None,
    };
    Some(target)
}

/// A `fragment Name on Type` definition found in a document's text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FragmentInfo {
    pub(crate) name: String,
    pub(crate) type_condition: Option<String>,
    /// Where the fragment's name starts.
    pub(crate) position: Position,
}

/// Every fragment definition in `source`, in order of appearance.
pub(crate) fn collect_fragments<P: Parser>(parser: &P, source: &str) -> Vec<FragmentInfo> {
    let mut fragments: Vec<FragmentInfo> = vec![];
    let mut stream = CharacterStream::new(source);
    let mut state = parser.start_state();
    while !stream.at_end() {
        let before = stream.position();
        let style = parser.token(&mut stream, &mut state);
        if stream.position() == before {
            stream.next_char();
            continue;
        }

        let Some(token_state) = parser.token_state(&state) else {
            continue;
        };
        if style == Style::Def && token_state.kind() == Some(RuleKind::FragmentDefinition) {
            fragments.push(FragmentInfo {
                name: stream.current().to_string(),
                type_condition: None,
                position: Position::from_offset(source, stream.start_of_token()),
            });
            continue;
        }

        let definition =
            token_state.frames()
                .iter()
                .rev()
                .find(|frame| frame.kind() == Some(RuleKind::FragmentDefinition));
        if let (Some(last), Some(definition)) = (fragments.last_mut(), definition)
            && last.type_condition.is_none()
            && definition.name() == Some(last.name.as_str())
        {
            last.type_condition = definition.type_name().map(str::to_string);
        }
    }
    fragments
}
