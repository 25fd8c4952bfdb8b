use crate::interface::TypeInfo;
use crate::interface::cursor::collect_fragments;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::NamedType;
use crate::types::TypeKind;
use graphql_online_parser::Parser;
use graphql_online_parser::Position;
use graphql_online_parser::RuleKind;
use graphql_online_parser::TokenState;
use graphql_online_parser::token_at_position;
use indexmap::IndexMap;

const DEFINITION_KEYWORDS: &[&str] = &[
    "query",
    "mutation",
    "subscription",
    "fragment",
    "{",
    "schema",
    "scalar",
    "type",
    "interface",
    "union",
    "enum",
    "input",
    "directive",
    "extend",
];

const OPERATION_KEYWORDS: &[&str] = &["query", "mutation", "subscription"];

const DIRECTIVE_LOCATIONS: &[&str] = &[
    "QUERY",
    "MUTATION",
    "SUBSCRIPTION",
    "FIELD",
    "FRAGMENT_DEFINITION",
    "FRAGMENT_SPREAD",
    "INLINE_FRAGMENT",
    "VARIABLE_DEFINITION",
    "SCHEMA",
    "SCALAR",
    "OBJECT",
    "FIELD_DEFINITION",
    "ARGUMENT_DEFINITION",
    "INTERFACE",
    "UNION",
    "ENUM",
    "ENUM_VALUE",
    "INPUT_OBJECT",
    "INPUT_FIELD_DEFINITION",
];

/// What a [`CompletionItem`] inserts.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionKind {
    Argument,
    Constant,
    Directive,
    DirectiveLocation,
    EnumValue,
    Field,
    Fragment,
    InputField,
    Keyword,
    Type,
}

/// One autocomplete suggestion.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionKind,
    /// A short signature, e.g. the type of a field.
    pub detail: Option<String>,
    pub documentation: Option<String>,
    pub deprecated: bool,
}
impl CompletionItem {
    fn new(label: impl Into<String>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            deprecated: false,
        }
    }

    fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    fn with_documentation(mut self, documentation: Option<&str>) -> Self {
        self.documentation = documentation.map(str::to_string);
        self
    }

    fn with_deprecation(mut self, reason: Option<&str>) -> Self {
        self.deprecated = reason.is_some();
        self
    }
}

/// Where a type name is being written, and so which kinds of types fit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum TypePosition {
    /// After `on` in a fragment or inline fragment.
    Composite,
    /// After `implements`.
    Interface,
    /// Argument, input field and variable types.
    Input,
    /// Union members and root operation types.
    Object,
    /// Field types in SDL.
    Output,
}
impl TypePosition {
    fn accepts(&self, kind: TypeKind) -> bool {
        match self {
            Self::Composite => kind.is_composite(),
            Self::Interface => kind == TypeKind::Interface,
            Self::Input => kind.is_input(),
            Self::Object => kind == TypeKind::Object,
            Self::Output => kind.is_output(),
        }
    }
}

/// Suggestions for the cursor at `position` of `source`.
///
/// The suggestions depend only on the grammar context at the cursor (found
/// by replaying `parser` over `source`) and on `schema`. They are never
/// filtered by the partially typed word under the cursor, only ranked: the
/// closest matches come first.
pub fn get_autocomplete_suggestions<P: Parser>(
    schema: &Schema,
    parser: &P,
    source: &str,
    position: Position,
) -> Vec<CompletionItem> {
    let token = token_at_position(parser, source, position);
    let Some(state) = parser.token_state(&token.state) else {
        return vec![];
    };
    let prefix =
        if is_name(&token.string) {
            token.string.as_str()
        } else {
            ""
        };

    let mut items = suggestions(schema, parser, source, state);
    rank(&mut items, prefix);
    tracing::trace!(
        "{} suggestions at {position} (prefix `{prefix}`)",
        items.len(),
    );
    items
}

fn suggestions<P: Parser>(
    schema: &Schema,
    parser: &P,
    source: &str,
    state: &TokenState,
) -> Vec<CompletionItem> {
    let Some(kind) = state.kind() else {
        return keywords(DEFINITION_KEYWORDS);
    };
    let step = state.step();
    let parent_kind = state.parent().and_then(|parent| parent.kind());

    if kind == RuleKind::Document
        || (kind == RuleKind::Definition && step == 0)
        || (kind == RuleKind::Invalid && parent_kind == Some(RuleKind::Document))
    {
        return keywords(DEFINITION_KEYWORDS);
    }

    if let Some(position) = type_position(state) {
        return type_suggestions(schema, position);
    }

    let info = TypeInfo::resolve(schema, state);
    match (kind, step) {
        (RuleKind::SelectionSet | RuleKind::Field | RuleKind::AliasedField, _) =>
            field_suggestions(info.parent_type),

        (RuleKind::Arguments, _) | (RuleKind::Argument, 0) =>
            input_value_suggestions(info.argument_defs, CompletionKind::Argument),

        (RuleKind::ObjectValue, _) | (RuleKind::ObjectField, 0) =>
            input_value_suggestions(info.object_field_defs, CompletionKind::InputField),

        (RuleKind::Value | RuleKind::EnumValue | RuleKind::BooleanValue, _)
        | (RuleKind::ListValue, 1)
        | (RuleKind::ObjectField, 2)
        | (RuleKind::Argument, 2) =>
            value_suggestions(info.input_named_type(schema)),

        (RuleKind::Directive, 1) =>
            schema.directives()
                .map(|directive| {
                    CompletionItem::new(directive.name(), CompletionKind::Directive)
                        .with_detail(directive.locations().join(" | "))
                        .with_documentation(directive.description())
                })
                .collect(),

        (RuleKind::FragmentSpread, 1) =>
            collect_fragments(parser, source)
                .into_iter()
                .map(|fragment| {
                    let item = CompletionItem::new(fragment.name, CompletionKind::Fragment);
                    match fragment.type_condition {
                        Some(type_name) => item.with_detail(format!("on {type_name}")),
                        None => item,
                    }
                })
                .collect(),

        (RuleKind::OperationTypeDef, 0) => keywords(OPERATION_KEYWORDS),

        (RuleKind::DirectiveLocation, _) | (RuleKind::DirectiveDef, 6) =>
            DIRECTIVE_LOCATIONS
                .iter()
                .map(|location| CompletionItem::new(*location, CompletionKind::DirectiveLocation))
                .collect(),

        (
            RuleKind::ObjectTypeDef
            | RuleKind::InterfaceDef
            | RuleKind::UnionDef
            | RuleKind::EnumDef
            | RuleKind::InputDef
            | RuleKind::ScalarDef,
            1,
        ) if state.contains_kind(RuleKind::ExtendDef) =>
            extendable_type_suggestions(schema, kind),

        _ => vec![],
    }
}

/// Which kinds of types may be named at the cursor, if a type name goes
/// there.
fn type_position(state: &TokenState) -> Option<TypePosition> {
    let top = state.top();
    match (top.kind()?, top.step()) {
        (RuleKind::FieldDef, 4) => return Some(TypePosition::Output),
        (RuleKind::InputValueDef, 3) | (RuleKind::VariableDefinition, 2) =>
            return Some(TypePosition::Input),
        (RuleKind::Implements, step) if step >= 1 => return Some(TypePosition::Interface),
        (RuleKind::UnionMembers, step) if step >= 1 => return Some(TypePosition::Object),
        (RuleKind::OperationTypeDef, 2) => return Some(TypePosition::Object),
        (RuleKind::TypeCondition, 1) => return Some(TypePosition::Composite),
        (
            RuleKind::NamedType
            | RuleKind::ListType
            | RuleKind::NonNullType
            | RuleKind::Type
            | RuleKind::UnionMember,
            _,
        ) => (),
        _ => return None,
    }

    state.frames()
        .iter()
        .rev()
        .find_map(|frame| match frame.kind()? {
            RuleKind::TypeCondition => Some(TypePosition::Composite),
            RuleKind::Implements => Some(TypePosition::Interface),
            RuleKind::UnionMember | RuleKind::UnionMembers => Some(TypePosition::Object),
            RuleKind::InputValueDef | RuleKind::VariableDefinition => Some(TypePosition::Input),
            RuleKind::FieldDef => Some(TypePosition::Output),
            _ => None,
        })
}

fn keywords(words: &[&str]) -> Vec<CompletionItem> {
    words.iter()
        .map(|word| CompletionItem::new(*word, CompletionKind::Keyword))
        .collect()
}

fn type_item(named_type: &NamedType) -> CompletionItem {
    CompletionItem::new(named_type.name(), CompletionKind::Type)
        .with_detail(named_type.kind().name())
        .with_documentation(named_type.description())
}

fn type_suggestions(schema: &Schema, position: TypePosition) -> Vec<CompletionItem> {
    schema.type_map()
        .values()
        .filter(|named_type| !named_type.is_placeholder())
        .filter(|named_type| position.accepts(named_type.kind()))
        .map(|named_type| type_item(named_type))
        .collect()
}

fn extendable_type_suggestions(schema: &Schema, definition: RuleKind) -> Vec<CompletionItem> {
    let kind = match definition {
        RuleKind::ObjectTypeDef => TypeKind::Object,
        RuleKind::InterfaceDef => TypeKind::Interface,
        RuleKind::UnionDef => TypeKind::Union,
        RuleKind::EnumDef => TypeKind::Enum,
        RuleKind::InputDef => TypeKind::InputObject,
        _ => TypeKind::Scalar,
    };
    schema.defined_types()
        .filter(|named_type| named_type.kind() == kind)
        .map(type_item)
        .collect()
}

fn field_item(field: &Field) -> CompletionItem {
    CompletionItem::new(field.name(), CompletionKind::Field)
        .with_detail(field.type_annotation().to_string())
        .with_documentation(field.description())
        .with_deprecation(field.deprecation_reason())
}

fn field_suggestions(parent_type: Option<&NamedType>) -> Vec<CompletionItem> {
    let Some(parent_type) = parent_type else {
        return vec![];
    };
    if !parent_type.kind().is_composite() {
        return vec![];
    }
    let mut items =
        parent_type.fields()
            .map(|fields| fields.values().map(field_item).collect::<Vec<_>>())
            .unwrap_or_default();
    items.push(
        CompletionItem::new("__typename", CompletionKind::Field)
            .with_detail("String!")
            .with_documentation(Some("The name of the current Object type at runtime."))
    );
    items
}

fn input_value_suggestions(
    defs: Option<&IndexMap<String, InputValue>>,
    kind: CompletionKind,
) -> Vec<CompletionItem> {
    defs.map(|defs| {
        defs.values()
            .map(|def| {
                CompletionItem::new(def.name(), kind)
                    .with_detail(def.type_annotation().to_string())
                    .with_documentation(def.description())
            })
            .collect()
    }).unwrap_or_default()
}

fn value_suggestions(input_type: Option<&NamedType>) -> Vec<CompletionItem> {
    match input_type {
        Some(NamedType::Enum(enum_type)) =>
            enum_type.values()
                .values()
                .map(|value| {
                    CompletionItem::new(value.name(), CompletionKind::EnumValue)
                        .with_detail(enum_type.name())
                        .with_documentation(value.description())
                        .with_deprecation(value.deprecation_reason())
                })
                .collect(),

        Some(NamedType::Scalar(scalar)) if scalar.name() == "Boolean" =>
            ["true", "false"]
                .into_iter()
                .map(|value| {
                    CompletionItem::new(value, CompletionKind::Constant).with_detail("Boolean")
                })
                .collect(),

        _ => vec![],
    }
}

fn is_name(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(|ch| ch == '_' || ch.is_ascii_alphabetic())
        && chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
}

/// Orders `items` by how closely their labels match `prefix`. Items that
/// match equally well keep their relative order.
fn rank(items: &mut [CompletionItem], prefix: &str) {
    if prefix.is_empty() {
        return;
    }
    let prefix_lower = prefix.to_lowercase();
    items.sort_by_cached_key(|item| {
        let label_lower = item.label.to_lowercase();
        let tier =
            if item.label.starts_with(prefix) {
                0
            } else if label_lower.starts_with(&prefix_lower) {
                1
            } else if label_lower.contains(&prefix_lower) {
                2
            } else {
                3
            };
        (tier, lexical_distance(&prefix_lower, &label_lower), item.label.len())
    });
}

/// Levenshtein distance between `a` and `b`, counted in characters.
pub(crate) fn lexical_distance(a: &str, b: &str) -> usize {
    let b = b.chars().collect::<Vec<_>>();
    let mut row = (0..=b.len()).collect::<Vec<_>>();
    for (i, a_ch) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, b_ch) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(a_ch != *b_ch);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }
    row[b.len()]
}

