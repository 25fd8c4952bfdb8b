use crate::schema::SchemaAssembler;
use crate::types::DirectiveDefinition;
use crate::types::NamedType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeMap;
use crate::types::TypeReference;
use indexmap::IndexMap;
use std::sync::Arc;

pub(crate) const BUILTIN_SCALARS: [(&str, &str); 5] = [
    ("Boolean", "The `Boolean` scalar type represents `true` or `false`."),
    ("Float", "The `Float` scalar type represents signed double-precision fractional values."),
    ("ID", "The `ID` scalar type represents a unique identifier."),
    ("Int", "The `Int` scalar type represents non-fractional signed whole numeric values."),
    ("String", "The `String` scalar type represents textual data."),
];

/// An immutable, cheaply clonable GraphQL schema.
///
/// Every type reference inside a [`Schema`] resolves: names that were never
/// defined map to a [`NamedType::Placeholder`].
#[derive(Clone, Debug)]
pub struct Schema {
    pub(crate) data: Arc<SchemaData>,
}

#[derive(Clone, Debug)]
pub(crate) struct SchemaData {
    pub(crate) directives: IndexMap<String, Arc<DirectiveDefinition>>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) type_dependencies: IndexMap<String, Arc<Vec<TypeReference>>>,
    pub(crate) types: TypeMap,
}

impl Schema {
    pub fn builder() -> SchemaAssembler {
        SchemaAssembler::new()
    }

    /// A schema holding only the GraphQL built-in scalars and directives.
    pub fn empty() -> Self {
        Self {
            data: Arc::new(SchemaData {
                directives: builtin_directives(),
                mutation_type: None,
                query_type: None,
                subscription_type: None,
                type_dependencies: IndexMap::new(),
                types: builtin_types(),
            }),
        }
    }

    /// All types that were defined in schema files (excluding built-ins and
    /// placeholders).
    pub fn defined_types(&self) -> impl Iterator<Item = &NamedType> {
        self.data.types
            .values()
            .map(Arc::as_ref)
            .filter(|t| !t.is_builtin() && !t.is_placeholder())
    }

    pub fn directives(&self) -> impl Iterator<Item = &DirectiveDefinition> {
        self.data.directives.values().map(Arc::as_ref)
    }

    pub fn get_directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.data.directives.get(name).map(Arc::as_ref)
    }

    pub fn get_type(&self, name: &str) -> Option<&NamedType> {
        self.data.types.get(name).map(Arc::as_ref)
    }

    /// The shared handle for a type. Two schemas hold the same handle for a
    /// type that neither assembly nor extension touched.
    pub fn get_type_handle(&self, name: &str) -> Option<&Arc<NamedType>> {
        self.data.types.get(name)
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.root_type(self.data.mutation_type.as_deref())
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.data.mutation_type.as_deref()
    }

    /// Whether `self` and `other` are the same schema value.
    pub fn ptr_eq(&self, other: &Schema) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    pub fn query_type(&self) -> Option<&ObjectType> {
        self.root_type(self.data.query_type.as_deref())
    }

    pub fn query_type_name(&self) -> Option<&str> {
        self.data.query_type.as_deref()
    }

    fn root_type(&self, name: Option<&str>) -> Option<&ObjectType> {
        name.and_then(|name| self.get_type(name))
            .and_then(NamedType::as_object)
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.root_type(self.data.subscription_type.as_deref())
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.data.subscription_type.as_deref()
    }

    /// Every recorded place that references the type named `name`, in the
    /// order the references were assembled.
    pub fn type_dependents(&self, name: &str) -> &[TypeReference] {
        self.data.type_dependencies
            .get(name)
            .map_or(&[], |refs| refs.as_slice())
    }

    pub fn type_map(&self) -> &TypeMap {
        &self.data.types
    }
}

pub(crate) fn builtin_directives() -> IndexMap<String, Arc<DirectiveDefinition>> {
    DirectiveDefinition::builtins()
        .into_iter()
        .map(|directive| (directive.name().to_string(), Arc::new(directive)))
        .collect()
}

pub(crate) fn builtin_types() -> TypeMap {
    BUILTIN_SCALARS
        .iter()
        .map(|(name, description)| (
            name.to_string(),
            Arc::new(NamedType::Scalar(ScalarType::builtin(name, description))),
        ))
        .collect()
}
