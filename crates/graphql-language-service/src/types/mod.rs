mod directive_definition;
mod enum_type;
mod field;
mod input_object_type;
mod input_value;
mod interface_type;
mod list_type_annotation;
mod named_type;
mod named_type_annotation;
mod object_or_interface_type;
mod object_or_interface_type_data;
mod object_type;
mod placeholder_type;
mod scalar_type;
mod type_annotation;
mod type_kind;
mod type_reference;
mod union_type;

pub use directive_definition::DirectiveDefinition;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use input_object_type::InputObjectType;
pub use input_value::InputValue;
pub use interface_type::InterfaceType;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type::NamedType;
pub use named_type_annotation::NamedTypeAnnotation;
pub use object_or_interface_type::ObjectOrInterfaceType;
pub(crate) use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_type::ObjectType;
pub use placeholder_type::PlaceholderType;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub use type_kind::OperationKind;
pub use type_kind::TypeKind;
pub use type_reference::TypeReference;
pub use union_type::UnionType;

use std::sync::Arc;

/// All named types of a schema, in definition order.
pub type TypeMap = indexmap::IndexMap<String, Arc<NamedType>>;

#[cfg(test)]
mod tests;
