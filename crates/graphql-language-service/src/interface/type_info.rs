use crate::schema::Schema;
use crate::types::DirectiveDefinition;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::NamedType;
use crate::types::TypeAnnotation;
use graphql_online_parser::RuleKind;
use graphql_online_parser::TokenState;
use indexmap::IndexMap;

/// The schema elements that surround a point in a GraphQL document.
///
/// Built by walking the [`TokenState`] rule stack from the outermost frame
/// inwards, the same way a validator would walk the AST from the root to the
/// node under the cursor.
#[derive(Clone, Debug, Default)]
pub struct TypeInfo<'s> {
    /// The object, interface or union whose fields are being selected (or,
    /// in SDL, the type whose fields are being defined).
    pub parent_type: Option<&'s NamedType>,

    pub field_def: Option<&'s Field>,

    pub directive_def: Option<&'s DirectiveDefinition>,

    /// The arguments (or input fields) that may appear at this point.
    pub argument_defs: Option<&'s IndexMap<String, InputValue>>,

    pub argument_def: Option<&'s InputValue>,

    /// The type expected for the value being written, with list wrappers
    /// peeled off for every list literal entered.
    pub input_type: Option<&'s TypeAnnotation>,

    /// The fields of the input object literal being written.
    pub object_field_defs: Option<&'s IndexMap<String, InputValue>>,

    /// The enum whose values are being defined (SDL only).
    pub enum_type: Option<&'s EnumType>,
}
impl<'s> TypeInfo<'s> {
    pub fn resolve(schema: &'s Schema, state: &TokenState) -> Self {
        let mut info = Self::default();
        for frame in state.frames() {
            let Some(kind) = frame.kind() else {
                continue;
            };
            let name = frame.name();
            let named = |name: Option<&str>| name.and_then(|name| schema.get_type(name));

            match kind {
                RuleKind::Query | RuleKind::ShortQuery =>
                    info.enter_operation(named(schema.query_type_name())),
                RuleKind::Mutation =>
                    info.enter_operation(named(schema.mutation_type_name())),
                RuleKind::Subscription =>
                    info.enter_operation(named(schema.subscription_type_name())),

                RuleKind::FragmentDefinition | RuleKind::InlineFragment => {
                    if let Some(condition) = named(frame.type_name()) {
                        info.parent_type = Some(condition);
                    }
                    info.field_def = None;
                },

                RuleKind::Field | RuleKind::AliasedField | RuleKind::FieldDef => {
                    info.field_def =
                        info.parent_type
                            .and_then(NamedType::fields)
                            .zip(name)
                            .and_then(|(fields, name)| fields.get(name));
                    info.argument_defs = info.field_def.map(Field::parameters);
                },

                RuleKind::SelectionSet => {
                    if let Some(field) = info.field_def.take() {
                        info.parent_type =
                            schema.get_type(field.type_annotation().innermost_type_name());
                    }
                },

                RuleKind::Directive | RuleKind::DirectiveDef => {
                    info.directive_def = name.and_then(|name| schema.get_directive(name));
                    info.argument_defs = info.directive_def.map(DirectiveDefinition::parameters);
                },

                RuleKind::Argument | RuleKind::InputValueDef => {
                    info.argument_def =
                        info.argument_defs
                            .zip(name)
                            .and_then(|(defs, name)| defs.get(name));
                    info.input_type = info.argument_def.map(InputValue::type_annotation);
                },

                RuleKind::ListValue => {
                    info.input_type = info.input_type.map(|input_type| {
                        input_type.as_list_annotation()
                            .map_or(input_type, |list| list.inner_type_annotation())
                    });
                },

                RuleKind::ObjectValue => {
                    info.object_field_defs =
                        info.input_type
                            .and_then(|input_type| schema.get_type(input_type.innermost_type_name()))
                            .and_then(NamedType::as_input_object)
                            .map(InputObjectType::fields);
                },

                RuleKind::ObjectField => {
                    info.argument_def =
                        info.object_field_defs
                            .zip(name)
                            .and_then(|(defs, name)| defs.get(name));
                    info.input_type = info.argument_def.map(InputValue::type_annotation);
                },

                RuleKind::ObjectTypeDef | RuleKind::InterfaceDef =>
                    info.parent_type = named(name),

                RuleKind::InputDef =>
                    info.argument_defs =
                        named(name)
                            .and_then(NamedType::as_input_object)
                            .map(InputObjectType::fields),

                RuleKind::EnumDef =>
                    info.enum_type = named(name).and_then(NamedType::as_enum),

                _ => (),
            }
        }
        info
    }

    fn enter_operation(&mut self, root_type: Option<&'s NamedType>) {
        self.parent_type = root_type;
        self.field_def = None;
    }

    /// The named type `input_type` resolves to, if any.
    pub fn input_named_type(&self, schema: &'s Schema) -> Option<&'s NamedType> {
        self.input_type
            .and_then(|input_type| schema.get_type(input_type.innermost_type_name()))
    }

    /// The enum value named `name` of the enum being defined or expected.
    pub fn enum_value(&self, schema: &'s Schema, name: &str) -> Option<(&'s EnumType, &'s EnumValue)> {
        let enum_type =
            self.enum_type
                .or_else(|| self.input_named_type(schema).and_then(NamedType::as_enum))?;
        enum_type.values()
            .get(name)
            .map(|value| (enum_type, value))
    }
}
