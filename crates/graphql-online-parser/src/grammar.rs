//! The GraphQL grammar as consumed by the [`OnlineParser`](crate::OnlineParser).
//!
//! Each [`RuleKind`] maps to a [`ParseRule`]: either a fixed sequence of
//! [`Step`]s, or a "fork" that picks the next rule by looking at the upcoming
//! token. The tables are `const` data so the parser never allocates to consult
//! them.

use crate::CharacterStream;
use crate::LexKind;
use crate::LexToken;
use crate::Style;
use regex::Regex;
use std::sync::OnceLock;

/// Every named production the online parser knows about.
///
/// `Comment` and `Invalid` are "empty" rules: the parser pushes them to mark a
/// comment or an unparseable token and pops them again before the next token.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RuleKind {
    Document,
    Definition,

    // Executable definitions.
    ShortQuery,
    Query,
    Mutation,
    Subscription,
    VariableDefinitions,
    VariableDefinition,
    Variable,
    DefaultValue,
    SelectionSet,
    Selection,
    AliasedField,
    Field,
    Arguments,
    Argument,
    FragmentSpread,
    InlineFragment,
    FragmentDefinition,
    TypeCondition,

    // Values.
    Value,
    NumberValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,

    // Type references.
    Type,
    ListType,
    NonNullType,
    NamedType,

    Directive,

    // Type-system definitions.
    Description,
    SchemaDef,
    OperationTypeDef,
    ScalarDef,
    ObjectTypeDef,
    InterfaceDef,
    Implements,
    FieldsDef,
    FieldDef,
    ArgumentsDef,
    InputValueDef,
    UnionDef,
    UnionMembers,
    UnionMember,
    EnumDef,
    EnumValuesDef,
    EnumValueDef,
    InputDef,
    InputFieldsDef,
    DirectiveDef,
    DirectiveLocation,

    // Type-system extensions.
    ExtendDef,
    ExtensionDefinition,
    SchemaExtension,
    ScalarExtension,
    ObjectTypeExtension,
    InterfaceExtension,
    UnionExtension,
    EnumExtension,
    InputExtension,

    Comment,
    Invalid,
}

/// Which kinds of top-level definitions the parser accepts.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Dialect {
    /// Executable and type-system definitions may be mixed freely.
    #[default]
    Any,
    /// Only operations and fragments.
    Executable,
    /// Only type-system definitions and extensions.
    Schema,
}

impl Dialect {
    fn allows_executable(&self) -> bool {
        !matches!(self, Self::Schema)
    }

    fn allows_type_system(&self) -> bool {
        !matches!(self, Self::Executable)
    }
}

// =============================================================================
// Grammar building blocks
// =============================================================================

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TokenMatcher {
    /// A `Name` token with exactly this text.
    Word(&'static str),
    /// Any `Name` token.
    Name,
    /// Any `Name` token except this one.
    NameExcept(&'static str),
    /// Any token of the given lexical kind.
    Kind(LexKind),
    /// A `Punctuation` token with exactly this text.
    Punctuation(&'static str),
}

impl TokenMatcher {
    fn matches(&self, token: &LexToken<'_>) -> bool {
        match self {
            Self::Word(word) =>
                token.kind == LexKind::Name && token.value == *word,
            Self::Name => token.kind == LexKind::Name,
            Self::NameExcept(word) =>
                token.kind == LexKind::Name && token.value != *word,
            Self::Kind(kind) => token.kind == *kind,
            Self::Punctuation(value) =>
                token.kind == LexKind::Punctuation && token.value == *value,
        }
    }
}

/// What a successfully matched terminal records into the parser state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StateUpdate {
    None,
    /// Store the token text as the current frame's `name`.
    Name,
    /// Store the token text as the current frame's `name` and as the
    /// grandparent frame's `type_name`.
    TypeName,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Terminal {
    pub(crate) matcher: TokenMatcher,
    pub(crate) style: Style,
    pub(crate) update: StateUpdate,
}

impl Terminal {
    pub(crate) fn matches(&self, token: &LexToken<'_>) -> bool {
        self.matcher.matches(token)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Expectation {
    Rule(RuleKind),
    Terminal(Terminal),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Repetition {
    Once,
    Optional,
    List { separator: Option<Terminal> },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Step {
    pub(crate) expect: Expectation,
    pub(crate) repetition: Repetition,
}

impl Step {
    pub(crate) const fn rule(kind: RuleKind) -> Self {
        Self {
            expect: Expectation::Rule(kind),
            repetition: Repetition::Once,
        }
    }

    const fn terminal(terminal: Terminal) -> Self {
        Self {
            expect: Expectation::Terminal(terminal),
            repetition: Repetition::Once,
        }
    }

    pub(crate) fn is_list(&self) -> bool {
        matches!(self.repetition, Repetition::List { .. })
    }

    /// Optional and list steps may be skipped without failing the rule.
    pub(crate) fn may_skip(&self) -> bool {
        !matches!(self.repetition, Repetition::Once)
    }

    pub(crate) fn separator(&self) -> Option<Terminal> {
        match self.repetition {
            Repetition::List { separator } => separator,
            _ => None,
        }
    }

    /// The step to match instead of this one while a list separator is due.
    pub(crate) fn separator_step(&self) -> Option<Step> {
        self.separator().map(Self::terminal)
    }
}

/// A fork inspects the upcoming token (and, if it needs to, the text after
/// it) and names the rule to continue with.
pub(crate) type ForkFn =
    fn(&LexToken<'_>, &CharacterStream<'_>, Dialect) -> Option<RuleKind>;

#[derive(Clone, Copy)]
pub(crate) enum ParseRule {
    Sequence(&'static [Step]),
    Fork(ForkFn),
}

const fn rule(kind: RuleKind) -> Step {
    Step::rule(kind)
}

const fn opt(step: Step) -> Step {
    Step {
        expect: step.expect,
        repetition: Repetition::Optional,
    }
}

const fn list(step: Step) -> Step {
    Step {
        expect: step.expect,
        repetition: Repetition::List { separator: None },
    }
}

const fn list_sep(step: Step, separator: &'static str) -> Step {
    Step {
        expect: step.expect,
        repetition: Repetition::List {
            separator: Some(punct_terminal(separator, Style::Punctuation)),
        },
    }
}

const fn term(matcher: TokenMatcher, style: Style, update: StateUpdate) -> Step {
    Step::terminal(Terminal { matcher, style, update })
}

const fn punct_terminal(value: &'static str, style: Style) -> Terminal {
    Terminal {
        matcher: TokenMatcher::Punctuation(value),
        style,
        update: StateUpdate::None,
    }
}

const fn p(value: &'static str) -> Step {
    Step::terminal(punct_terminal(value, Style::Punctuation))
}

const fn p_styled(value: &'static str, style: Style) -> Step {
    Step::terminal(punct_terminal(value, style))
}

const fn word(value: &'static str) -> Step {
    term(TokenMatcher::Word(value), Style::Keyword, StateUpdate::None)
}

const fn name(style: Style) -> Step {
    term(TokenMatcher::Name, style, StateUpdate::Name)
}

const fn name_except(style: Style, except: &'static str) -> Step {
    term(TokenMatcher::NameExcept(except), style, StateUpdate::Name)
}

const fn type_name(style: Style) -> Step {
    term(TokenMatcher::Name, style, StateUpdate::TypeName)
}

const fn kind(kind: LexKind, style: Style) -> Step {
    term(TokenMatcher::Kind(kind), style, StateUpdate::None)
}

// =============================================================================
// Rule tables
// =============================================================================

use RuleKind as R;

const DOCUMENT: &[Step] = &[list(rule(R::Definition))];

const SHORT_QUERY: &[Step] = &[rule(R::SelectionSet)];
const QUERY: &[Step] = &[
    word("query"),
    opt(name(Style::Def)),
    opt(rule(R::VariableDefinitions)),
    list(rule(R::Directive)),
    rule(R::SelectionSet),
];
const MUTATION: &[Step] = &[
    word("mutation"),
    opt(name(Style::Def)),
    opt(rule(R::VariableDefinitions)),
    list(rule(R::Directive)),
    rule(R::SelectionSet),
];
const SUBSCRIPTION: &[Step] = &[
    word("subscription"),
    opt(name(Style::Def)),
    opt(rule(R::VariableDefinitions)),
    list(rule(R::Directive)),
    rule(R::SelectionSet),
];
const VARIABLE_DEFINITIONS: &[Step] =
    &[p("("), list(rule(R::VariableDefinition)), p(")")];
const VARIABLE_DEFINITION: &[Step] = &[
    rule(R::Variable),
    p(":"),
    rule(R::Type),
    opt(rule(R::DefaultValue)),
];
const VARIABLE: &[Step] =
    &[p_styled("$", Style::Variable), name(Style::Variable)];
const DEFAULT_VALUE: &[Step] = &[p("="), rule(R::Value)];
const SELECTION_SET: &[Step] =
    &[p("{"), list(rule(R::Selection)), p("}")];
const ALIASED_FIELD: &[Step] = &[
    name(Style::Property),
    p(":"),
    name(Style::Qualifier),
    opt(rule(R::Arguments)),
    list(rule(R::Directive)),
    opt(rule(R::SelectionSet)),
];
const FIELD: &[Step] = &[
    name(Style::Property),
    opt(rule(R::Arguments)),
    list(rule(R::Directive)),
    opt(rule(R::SelectionSet)),
];
const ARGUMENTS: &[Step] = &[p("("), list(rule(R::Argument)), p(")")];
const ARGUMENT: &[Step] =
    &[name(Style::Attribute), p(":"), rule(R::Value)];
const FRAGMENT_SPREAD: &[Step] =
    &[p("..."), name(Style::Def), list(rule(R::Directive))];
const INLINE_FRAGMENT: &[Step] = &[
    p("..."),
    opt(rule(R::TypeCondition)),
    list(rule(R::Directive)),
    rule(R::SelectionSet),
];
const FRAGMENT_DEFINITION: &[Step] = &[
    word("fragment"),
    opt(name_except(Style::Def, "on")),
    rule(R::TypeCondition),
    list(rule(R::Directive)),
    rule(R::SelectionSet),
];
const TYPE_CONDITION: &[Step] = &[word("on"), rule(R::NamedType)];

const NUMBER_VALUE: &[Step] = &[kind(LexKind::Number, Style::Number)];
const STRING_VALUE: &[Step] = &[kind(LexKind::String, Style::String)];
const BOOLEAN_VALUE: &[Step] = &[kind(LexKind::Name, Style::Builtin)];
const NULL_VALUE: &[Step] = &[kind(LexKind::Name, Style::Keyword)];
const ENUM_VALUE: &[Step] = &[name(Style::String2)];
const LIST_VALUE: &[Step] = &[p("["), list(rule(R::Value)), p("]")];
const OBJECT_VALUE: &[Step] =
    &[p("{"), list(rule(R::ObjectField)), p("}")];
const OBJECT_FIELD: &[Step] =
    &[name(Style::Attribute), p(":"), rule(R::Value)];

const LIST_TYPE: &[Step] =
    &[p("["), rule(R::Type), p("]"), opt(p("!"))];
const NON_NULL_TYPE: &[Step] = &[rule(R::NamedType), opt(p("!"))];
const NAMED_TYPE: &[Step] = &[type_name(Style::Atom)];

const DIRECTIVE: &[Step] = &[
    p_styled("@", Style::Meta),
    name(Style::Meta),
    opt(rule(R::Arguments)),
];

const DESCRIPTION: &[Step] = &[kind(LexKind::String, Style::String)];
const SCHEMA_DEF: &[Step] = &[
    word("schema"),
    list(rule(R::Directive)),
    p("{"),
    list(rule(R::OperationTypeDef)),
    p("}"),
];
const OPERATION_TYPE_DEF: &[Step] =
    &[name(Style::Keyword), p(":"), name(Style::Atom)];
const SCALAR_DEF: &[Step] =
    &[word("scalar"), name(Style::Atom), list(rule(R::Directive))];
const OBJECT_TYPE_DEF: &[Step] = &[
    word("type"),
    name(Style::Atom),
    opt(rule(R::Implements)),
    list(rule(R::Directive)),
    opt(rule(R::FieldsDef)),
];
const INTERFACE_DEF: &[Step] = &[
    word("interface"),
    name(Style::Atom),
    opt(rule(R::Implements)),
    list(rule(R::Directive)),
    opt(rule(R::FieldsDef)),
];
const IMPLEMENTS: &[Step] =
    &[word("implements"), list_sep(rule(R::NamedType), "&")];
const FIELDS_DEF: &[Step] = &[p("{"), list(rule(R::FieldDef)), p("}")];
const FIELD_DEF: &[Step] = &[
    opt(rule(R::Description)),
    name(Style::Property),
    opt(rule(R::ArgumentsDef)),
    p(":"),
    rule(R::Type),
    list(rule(R::Directive)),
];
const ARGUMENTS_DEF: &[Step] =
    &[p("("), list(rule(R::InputValueDef)), p(")")];
const INPUT_VALUE_DEF: &[Step] = &[
    opt(rule(R::Description)),
    name(Style::Attribute),
    p(":"),
    rule(R::Type),
    opt(rule(R::DefaultValue)),
    list(rule(R::Directive)),
];
const UNION_DEF: &[Step] = &[
    word("union"),
    name(Style::Atom),
    list(rule(R::Directive)),
    opt(rule(R::UnionMembers)),
];
const UNION_MEMBERS: &[Step] =
    &[p("="), list_sep(rule(R::UnionMember), "|")];
const UNION_MEMBER: &[Step] = &[rule(R::NamedType)];
const ENUM_DEF: &[Step] = &[
    word("enum"),
    name(Style::Atom),
    list(rule(R::Directive)),
    opt(rule(R::EnumValuesDef)),
];
const ENUM_VALUES_DEF: &[Step] =
    &[p("{"), list(rule(R::EnumValueDef)), p("}")];
const ENUM_VALUE_DEF: &[Step] = &[
    opt(rule(R::Description)),
    name(Style::String2),
    list(rule(R::Directive)),
];
const INPUT_DEF: &[Step] = &[
    word("input"),
    name(Style::Atom),
    list(rule(R::Directive)),
    opt(rule(R::InputFieldsDef)),
];
const INPUT_FIELDS_DEF: &[Step] =
    &[p("{"), list(rule(R::InputValueDef)), p("}")];
const DIRECTIVE_DEF: &[Step] = &[
    word("directive"),
    p_styled("@", Style::Meta),
    name(Style::Meta),
    opt(rule(R::ArgumentsDef)),
    opt(word("repeatable")),
    word("on"),
    list_sep(rule(R::DirectiveLocation), "|"),
];
const DIRECTIVE_LOCATION: &[Step] = &[name(Style::String2)];

const EXTEND_DEF: &[Step] = &[word("extend"), rule(R::ExtensionDefinition)];
const SCHEMA_EXTENSION: &[Step] = &[rule(R::SchemaDef)];
const SCALAR_EXTENSION: &[Step] = &[rule(R::ScalarDef)];
const OBJECT_TYPE_EXTENSION: &[Step] = &[rule(R::ObjectTypeDef)];
const INTERFACE_EXTENSION: &[Step] = &[rule(R::InterfaceDef)];
const UNION_EXTENSION: &[Step] = &[rule(R::UnionDef)];
const ENUM_EXTENSION: &[Step] = &[rule(R::EnumDef)];
const INPUT_EXTENSION: &[Step] = &[rule(R::InputDef)];

const EMPTY: &[Step] = &[];

// =============================================================================
// Forks
// =============================================================================

fn definition_fork(
    token: &LexToken<'_>,
    _stream: &CharacterStream<'_>,
    dialect: Dialect,
) -> Option<RuleKind> {
    if dialect.allows_executable() {
        let executable = match (token.kind, token.value) {
            (LexKind::Punctuation, "{") => Some(R::ShortQuery),
            (LexKind::Name, "query") => Some(R::Query),
            (LexKind::Name, "mutation") => Some(R::Mutation),
            (LexKind::Name, "subscription") => Some(R::Subscription),
            (LexKind::Name, "fragment") => Some(R::FragmentDefinition),
            _ => None,
        };
        if executable.is_some() {
            return executable;
        }
    }

    if dialect.allows_type_system() {
        return match (token.kind, token.value) {
            (LexKind::String, _) => Some(R::Description),
            (LexKind::Name, "schema") => Some(R::SchemaDef),
            (LexKind::Name, "scalar") => Some(R::ScalarDef),
            (LexKind::Name, "type") => Some(R::ObjectTypeDef),
            (LexKind::Name, "interface") => Some(R::InterfaceDef),
            (LexKind::Name, "union") => Some(R::UnionDef),
            (LexKind::Name, "enum") => Some(R::EnumDef),
            (LexKind::Name, "input") => Some(R::InputDef),
            (LexKind::Name, "extend") => Some(R::ExtendDef),
            (LexKind::Name, "directive") => Some(R::DirectiveDef),
            _ => None,
        };
    }

    None
}

fn extension_fork(
    token: &LexToken<'_>,
    _stream: &CharacterStream<'_>,
    _dialect: Dialect,
) -> Option<RuleKind> {
    if token.kind != LexKind::Name {
        return None;
    }
    match token.value {
        "schema" => Some(R::SchemaExtension),
        "scalar" => Some(R::ScalarExtension),
        "type" => Some(R::ObjectTypeExtension),
        "interface" => Some(R::InterfaceExtension),
        "union" => Some(R::UnionExtension),
        "enum" => Some(R::EnumExtension),
        "input" => Some(R::InputExtension),
        _ => None,
    }
}

fn selection_fork(
    token: &LexToken<'_>,
    stream: &CharacterStream<'_>,
    _dialect: Dialect,
) -> Option<RuleKind> {
    static INLINE_FRAGMENT_AHEAD: OnceLock<Regex> = OnceLock::new();
    static ALIAS_AHEAD: OnceLock<Regex> = OnceLock::new();

    if token.value == "..." {
        let inline_ahead = INLINE_FRAGMENT_AHEAD.get_or_init(|| {
            Regex::new(r"^[\s\u{a0},]*(?:on\b|@|\{)")
                .expect("inline fragment lookahead is a valid regex")
        });
        return Some(
            if stream.lookahead(inline_ahead).is_some() {
                R::InlineFragment
            } else {
                R::FragmentSpread
            }
        );
    }

    let alias_ahead = ALIAS_AHEAD.get_or_init(|| {
        Regex::new(r"^[\s\u{a0},]*:")
            .expect("alias lookahead is a valid regex")
    });
    Some(
        if stream.lookahead(alias_ahead).is_some() {
            R::AliasedField
        } else {
            R::Field
        }
    )
}

fn value_fork(
    token: &LexToken<'_>,
    _stream: &CharacterStream<'_>,
    _dialect: Dialect,
) -> Option<RuleKind> {
    match token.kind {
        LexKind::Punctuation => match token.value {
            "[" => Some(R::ListValue),
            "{" => Some(R::ObjectValue),
            "$" => Some(R::Variable),
            "&" => Some(R::NamedType),
            _ => None,
        },
        LexKind::Number => Some(R::NumberValue),
        LexKind::String => Some(R::StringValue),
        LexKind::Name => match token.value {
            "true" | "false" => Some(R::BooleanValue),
            "null" => Some(R::NullValue),
            _ => Some(R::EnumValue),
        },
        LexKind::Comment => None,
    }
}

fn type_fork(
    token: &LexToken<'_>,
    _stream: &CharacterStream<'_>,
    _dialect: Dialect,
) -> Option<RuleKind> {
    Some(if token.value == "[" { R::ListType } else { R::NonNullType })
}

/// Looks up the production for `kind`.
pub(crate) fn parse_rule(kind: RuleKind) -> ParseRule {
    use ParseRule::Fork;
    use ParseRule::Sequence;

    match kind {
        R::Document => Sequence(DOCUMENT),
        R::Definition => Fork(definition_fork),
        R::ShortQuery => Sequence(SHORT_QUERY),
        R::Query => Sequence(QUERY),
        R::Mutation => Sequence(MUTATION),
        R::Subscription => Sequence(SUBSCRIPTION),
        R::VariableDefinitions => Sequence(VARIABLE_DEFINITIONS),
        R::VariableDefinition => Sequence(VARIABLE_DEFINITION),
        R::Variable => Sequence(VARIABLE),
        R::DefaultValue => Sequence(DEFAULT_VALUE),
        R::SelectionSet => Sequence(SELECTION_SET),
        R::Selection => Fork(selection_fork),
        R::AliasedField => Sequence(ALIASED_FIELD),
        R::Field => Sequence(FIELD),
        R::Arguments => Sequence(ARGUMENTS),
        R::Argument => Sequence(ARGUMENT),
        R::FragmentSpread => Sequence(FRAGMENT_SPREAD),
        R::InlineFragment => Sequence(INLINE_FRAGMENT),
        R::FragmentDefinition => Sequence(FRAGMENT_DEFINITION),
        R::TypeCondition => Sequence(TYPE_CONDITION),
        R::Value => Fork(value_fork),
        R::NumberValue => Sequence(NUMBER_VALUE),
        R::StringValue => Sequence(STRING_VALUE),
        R::BooleanValue => Sequence(BOOLEAN_VALUE),
        R::NullValue => Sequence(NULL_VALUE),
        R::EnumValue => Sequence(ENUM_VALUE),
        R::ListValue => Sequence(LIST_VALUE),
        R::ObjectValue => Sequence(OBJECT_VALUE),
        R::ObjectField => Sequence(OBJECT_FIELD),
        R::Type => Fork(type_fork),
        R::ListType => Sequence(LIST_TYPE),
        R::NonNullType => Sequence(NON_NULL_TYPE),
        R::NamedType => Sequence(NAMED_TYPE),
        R::Directive => Sequence(DIRECTIVE),
        R::Description => Sequence(DESCRIPTION),
        R::SchemaDef => Sequence(SCHEMA_DEF),
        R::OperationTypeDef => Sequence(OPERATION_TYPE_DEF),
        R::ScalarDef => Sequence(SCALAR_DEF),
        R::ObjectTypeDef => Sequence(OBJECT_TYPE_DEF),
        R::InterfaceDef => Sequence(INTERFACE_DEF),
        R::Implements => Sequence(IMPLEMENTS),
        R::FieldsDef => Sequence(FIELDS_DEF),
        R::FieldDef => Sequence(FIELD_DEF),
        R::ArgumentsDef => Sequence(ARGUMENTS_DEF),
        R::InputValueDef => Sequence(INPUT_VALUE_DEF),
        R::UnionDef => Sequence(UNION_DEF),
        R::UnionMembers => Sequence(UNION_MEMBERS),
        R::UnionMember => Sequence(UNION_MEMBER),
        R::EnumDef => Sequence(ENUM_DEF),
        R::EnumValuesDef => Sequence(ENUM_VALUES_DEF),
        R::EnumValueDef => Sequence(ENUM_VALUE_DEF),
        R::InputDef => Sequence(INPUT_DEF),
        R::InputFieldsDef => Sequence(INPUT_FIELDS_DEF),
        R::DirectiveDef => Sequence(DIRECTIVE_DEF),
        R::DirectiveLocation => Sequence(DIRECTIVE_LOCATION),
        R::ExtendDef => Sequence(EXTEND_DEF),
        R::ExtensionDefinition => Fork(extension_fork),
        R::SchemaExtension => Sequence(SCHEMA_EXTENSION),
        R::ScalarExtension => Sequence(SCALAR_EXTENSION),
        R::ObjectTypeExtension => Sequence(OBJECT_TYPE_EXTENSION),
        R::InterfaceExtension => Sequence(INTERFACE_EXTENSION),
        R::UnionExtension => Sequence(UNION_EXTENSION),
        R::EnumExtension => Sequence(ENUM_EXTENSION),
        R::InputExtension => Sequence(INPUT_EXTENSION),
        R::Comment | R::Invalid => Sequence(EMPTY),
    }
}
