use crate::ast;
use crate::types::ListTypeAnnotation;
use crate::types::NamedType;
use crate::types::NamedTypeAnnotation;
use crate::types::TypeMap;

/// Represents the annotated type for a [`Field`](crate::types::Field) or an
/// [`InputValue`](crate::types::InputValue).
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    pub fn named(type_name: impl Into<String>, nullable: bool) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable,
            type_name: type_name.into(),
        })
    }

    pub fn list(inner: TypeAnnotation, nullable: bool) -> Self {
        Self::List(ListTypeAnnotation {
            inner_type: Box::new(inner),
            nullable,
        })
    }

    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::schema::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::schema::Type, nullable: bool) -> Self {
        match ast_type {
            ast::schema::Type::ListType(inner) =>
                Self::list(Self::from_ast_type_impl(inner, true), nullable),

            ast::schema::Type::NamedType(name) =>
                Self::named(name, nullable),

            ast::schema::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(list_annot) =>
                list_annot.inner_type.innermost_named_type_annotation(),
            Self::Named(named_annot) => named_annot,
        }
    }

    /// Name of the type at the bottom of any list wrappers.
    pub fn innermost_type_name(&self) -> &str {
        self.innermost_named_type_annotation().type_name()
    }

    /// Two annotations are equivalent when they have the same list structure,
    /// the same nullability at each level and the same innermost type name.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self == other
    }

    /// Whether a value of this type may be returned where `other` is
    /// expected (a covariant field type).
    ///
    /// Non-null is a subtype of nullable, an object is a subtype of every
    /// interface it implements and of every union it belongs to. Placeholder
    /// types are compatible with anything: they've already been reported as
    /// missing.
    pub fn is_subtype_of(&self, types: &TypeMap, other: &Self) -> bool {
        if !other.nullable() && self.nullable() {
            return false;
        }

        match (self, other) {
            (Self::List(self_list), Self::List(other_list)) =>
                self_list.inner_type.is_subtype_of(types, &other_list.inner_type),

            (Self::Named(self_named), Self::Named(other_named)) =>
                is_named_subtype(types, self_named.type_name(), other_named.type_name()),

            (Self::List(_), Self::Named(other_named)) =>
                types.get(other_named.type_name())
                    .is_some_and(|t| t.is_placeholder()),

            (Self::Named(self_named), Self::List(_)) =>
                types.get(self_named.type_name())
                    .is_some_and(|t| t.is_placeholder()),
        }
    }

    /// Indicates if this [`TypeAnnotation`] is nullable or non-nullable.
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(list_annot) => list_annot.nullable,
            Self::Named(named_annot) => named_annot.nullable,
        }
    }

    /// This annotation with the outermost non-null marker removed.
    pub fn as_nullable(&self) -> TypeAnnotation {
        let mut annot = self.clone();
        match &mut annot {
            Self::List(list_annot) => list_annot.nullable = true,
            Self::Named(named_annot) => named_annot.nullable = true,
        }
        annot
    }
}

fn is_named_subtype(types: &TypeMap, sub_name: &str, super_name: &str) -> bool {
    if sub_name == super_name {
        return true;
    }
    let (Some(sub_type), Some(super_type)) = (types.get(sub_name), types.get(super_name)) else {
        return false;
    };
    match (sub_type.as_ref(), super_type.as_ref()) {
        (NamedType::Placeholder(_), _) | (_, NamedType::Placeholder(_)) => true,
        (NamedType::Object(obj), NamedType::Interface(_)) =>
            obj.interface_names().contains(&super_name),
        (NamedType::Interface(iface), NamedType::Interface(_)) =>
            iface.interface_names().contains(&super_name),
        (NamedType::Object(_), NamedType::Union(union_type)) =>
            union_type.member_names().any(|member| member == sub_name),
        _ => false,
    }
}

impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
