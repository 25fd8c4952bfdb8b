use crate::loc;
use crate::types::InputValue;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// A `directive @name(...) on ...` definition, either declared in a schema
/// file or one of the directives GraphQL defines implicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, InputValue>,
    pub(crate) repeatable: bool,
}
impl DirectiveDefinition {
    /// `@skip`, `@include`, `@deprecated` and `@specifiedBy`.
    pub fn builtins() -> Vec<DirectiveDefinition> {
        vec![
            Self::builtin(
                "skip",
                "Directs the executor to skip this field or fragment when the `if` argument is true.",
                &["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"],
                vec![builtin_param("if", TypeAnnotation::named("Boolean", false), None)],
            ),
            Self::builtin(
                "include",
                "Directs the executor to include this field or fragment only when the `if` argument is true.",
                &["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"],
                vec![builtin_param("if", TypeAnnotation::named("Boolean", false), None)],
            ),
            Self::builtin(
                "deprecated",
                "Marks an element of a GraphQL schema as no longer supported.",
                &["FIELD_DEFINITION", "ARGUMENT_DEFINITION", "INPUT_FIELD_DEFINITION", "ENUM_VALUE"],
                vec![builtin_param(
                    "reason",
                    TypeAnnotation::named("String", true),
                    Some("\"No longer supported\""),
                )],
            ),
            Self::builtin(
                "specifiedBy",
                "Exposes a URL that specifies the behavior of this scalar.",
                &["SCALAR"],
                vec![builtin_param("url", TypeAnnotation::named("String", false), None)],
            ),
        ]
    }

    fn builtin(
        name: &str,
        description: &str,
        locations: &[&str],
        parameters: Vec<InputValue>,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: Some(description.to_string()),
            locations: locations.iter().map(|l| l.to_string()).collect(),
            name: name.to_string(),
            parameters: parameters
                .into_iter()
                .map(|param| (param.name.clone(), param))
                .collect(),
            repeatable: false,
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.def_location, loc::SourceLocation::GraphQLBuiltIn)
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    /// Location names such as `FIELD` or `OBJECT`.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, InputValue> {
        &self.parameters
    }
}

fn builtin_param(
    name: &str,
    type_annotation: TypeAnnotation,
    default_value: Option<&str>,
) -> InputValue {
    InputValue {
        def_location: loc::SourceLocation::GraphQLBuiltIn,
        default_value: default_value.map(str::to_string),
        description: None,
        name: name.to_string(),
        type_annotation,
    }
}
