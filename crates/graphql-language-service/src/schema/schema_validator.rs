use crate::error::InterfaceConformanceError;
use crate::error::SchemaError;
use crate::error::TypeValidationError;
use crate::loc;
use crate::schema::Schema;
use crate::types::DirectiveDefinition;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::NamedType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeKind;
use crate::types::TypeMap;
use crate::types::UnionType;
use std::collections::HashSet;
use std::sync::Arc;

/// Checks every type of `schema` for interface conformance and type-kind
/// misuse, returning every violation found.
///
/// Placeholder types are exempt from all checks: whatever referenced them has
/// already been reported as "not found".
pub fn validate_schema(schema: &Schema) -> Vec<SchemaError> {
    validate_where(schema, |_| true, |_| true)
}

/// Validates only what `extended` changed relative to `base`: types and
/// directives that are new or were rebuilt, plus every type or directive
/// that refers to one of those types.
pub(crate) fn validate_extension(base: &Schema, extended: &Schema) -> Vec<SchemaError> {
    let changed_types =
        extended.data.types
            .iter()
            .filter(|(name, handle)| {
                base.data.types
                    .get(name.as_str())
                    .is_none_or(|base_handle| !Arc::ptr_eq(base_handle, handle))
            })
            .map(|(name, _)| name.as_str())
            .collect::<HashSet<_>>();
    let mut dirty = changed_types.clone();
    for type_name in &changed_types {
        dirty.extend(
            extended.type_dependents(type_name)
                .iter()
                .map(|reference| referrer_owner(reference.referrer())),
        );
    }

    validate_where(
        extended,
        |named_type| dirty.contains(named_type.name()),
        |directive| {
            let changed =
                base.data.directives
                    .get(directive.name())
                    .is_none_or(|base_handle| !std::ptr::eq(base_handle.as_ref(), directive));
            changed || dirty.contains(format!("@{}", directive.name()).as_str())
        },
    )
}

/// The type (or `@directive`) named at the start of a
/// [`TypeReference`](crate::types::TypeReference) referrer coordinate.
fn referrer_owner(referrer: &str) -> &str {
    referrer
        .split(['.', '('])
        .next()
        .unwrap_or(referrer)
}

fn validate_where(
    schema: &Schema,
    check_type: impl Fn(&NamedType) -> bool,
    check_directive: impl Fn(&DirectiveDefinition) -> bool,
) -> Vec<SchemaError> {
    let types = schema.type_map();
    let mut errors = vec![];
    for named_type in types.values().filter(|named_type| check_type(named_type.as_ref())) {
        match named_type.as_ref() {
            NamedType::InputObject(input_type) => {
                for field in input_type.fields().values() {
                    errors.extend(validate_input_value(
                        types,
                        input_type.name(),
                        field,
                        InputValueOwner::InputObject,
                    ));
                }
            },

            NamedType::Interface(iface) =>
                errors.extend(ObjectOrInterfaceTypeValidator::new(&iface.0, types).validate()),

            NamedType::Object(obj) =>
                errors.extend(ObjectOrInterfaceTypeValidator::new(&obj.0, types).validate()),

            NamedType::Union(union_type) =>
                errors.extend(validate_union(types, union_type)),

            NamedType::Enum(_)
            | NamedType::Placeholder(_)
            | NamedType::Scalar(_) => (),
        }
    }

    for directive in schema.directives().filter(|directive| check_directive(directive)) {
        let owner = format!("@{}", directive.name());
        for param in directive.parameters().values() {
            errors.extend(validate_input_value(
                types,
                &owner,
                param,
                InputValueOwner::Parameter,
            ));
        }
    }

    errors
}

#[derive(Clone, Copy)]
enum InputValueOwner {
    InputObject,
    Parameter,
}

fn validate_input_value(
    types: &TypeMap,
    owner: &str,
    value: &InputValue,
    owner_kind: InputValueOwner,
) -> Option<SchemaError> {
    let type_name = value.type_annotation().innermost_type_name();
    let named_type = types.get(type_name)?;
    if named_type.is_placeholder() || named_type.kind().is_input() {
        return None;
    }
    let location = value.def_location().file_position()?.to_owned();
    let error = match owner_kind {
        InputValueOwner::InputObject => TypeValidationError::InvalidInputFieldWithOutputType {
            parent_type_name: owner.to_string(),
            field_name: value.name().to_string(),
            invalid_type_name: type_name.to_string(),
            invalid_type_kind: named_type.kind(),
            location,
        },
        InputValueOwner::Parameter => TypeValidationError::InvalidParameterWithOutputOnlyType {
            owner: owner.to_string(),
            parameter_name: value.name().to_string(),
            invalid_type_name: type_name.to_string(),
            invalid_type_kind: named_type.kind(),
            location,
        },
    };
    Some(error.into())
}

fn validate_union(types: &TypeMap, union_type: &UnionType) -> Vec<SchemaError> {
    let Some(location) = union_type.def_location().file_position() else {
        return vec![];
    };
    union_type.member_names()
        .filter_map(|member_name| {
            // Member types of a union type can only be object types.
            // https://spec.graphql.org/October2021/#sel-HAHdfFDABABlG3ib
            let member_type = types.get(member_name)?;
            if member_type.is_placeholder() || member_type.kind() == TypeKind::Object {
                return None;
            }
            Some(TypeValidationError::InvalidUnionMemberTypeKind {
                union_type_name: union_type.name().to_string(),
                member_type_name: member_name.to_string(),
                member_type_kind: member_type.kind(),
                location: location.to_owned(),
            }.into())
        })
        .collect()
}

struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<SchemaError>,
    type_: &'a ObjectOrInterfaceTypeData,
    types: &'a TypeMap,
}
impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    fn new(type_: &'a ObjectOrInterfaceTypeData, types: &'a TypeMap) -> Self {
        Self {
            errors: vec![],
            type_,
            types,
        }
    }

    fn validate(mut self) -> Vec<SchemaError> {
        let Some(type_location) = self.type_.def_location().file_position() else {
            return vec![];
        };
        let type_location = type_location.to_owned();

        for (field_name, field) in self.type_.fields() {
            self.validate_field_kinds(field_name, field);
        }

        let implemented = self.type_.interface_names().into_iter().collect::<HashSet<_>>();
        for iface_name in self.type_.interface_names() {
            let Some(iface_type) = self.types.get(iface_name) else {
                continue;
            };
            let iface = match iface_type.as_ref() {
                NamedType::Placeholder(_) => continue,
                NamedType::Interface(iface) => iface,
                _ => {
                    self.errors.push(InterfaceConformanceError::ImplementsNonInterfaceType {
                        type_name: self.type_.name().to_string(),
                        non_interface_type_name: iface_name.to_string(),
                        location: type_location.clone(),
                    }.into());
                    continue;
                },
            };

            // The implementing type must also explicitly implement each of the
            // interfaces *this* interface implements.
            //
            // https://spec.graphql.org/October2021/#IsValidImplementation()
            for transitive_name in iface.interface_names() {
                if transitive_name != self.type_.name() && !implemented.contains(transitive_name) {
                    self.errors.push(
                        InterfaceConformanceError::MissingTransitiveInterfaceImplementation {
                            type_name: self.type_.name().to_string(),
                            via_interface_name: iface_name.to_string(),
                            missing_interface_name: transitive_name.to_string(),
                            location: type_location.clone(),
                        }.into()
                    );
                }
            }

            for (field_name, iface_field) in iface.fields() {
                let Some(type_field) = self.type_.fields().get(field_name) else {
                    self.errors.push(InterfaceConformanceError::MissingInterfaceSpecifiedField {
                        type_name: self.type_.name().to_string(),
                        interface_name: iface_name.to_string(),
                        field_name: field_name.to_string(),
                        location: type_location.clone(),
                    }.into());
                    continue;
                };
                self.validate_implemented_field(iface_name, iface_field, type_field);
            }
        }

        self.errors
    }

    /// Output fields need output types; their arguments need input types.
    fn validate_field_kinds(&mut self, field_name: &str, field: &Field) {
        let type_name = field.type_annotation().innermost_type_name();
        let input_only_type =
            self.types.get(type_name)
                .filter(|t| !t.is_placeholder() && !t.kind().is_output());
        let location = field.def_location().file_position();
        if let (Some(_), Some(location)) = (input_only_type, location) {
            // All fields on an object type must be declared with an output
            // type.
            //
            // https://spec.graphql.org/October2021/#sel-JAHZhCFDBFABLBgB_pM
            self.errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                parent_type_name: self.type_.name().to_string(),
                field_name: field_name.to_string(),
                input_type_name: type_name.to_string(),
                location: location.to_owned(),
            }.into());
        }

        let owner = format!("{}.{field_name}", self.type_.name());
        for param in field.parameters().values() {
            self.errors.extend(validate_input_value(
                self.types,
                &owner,
                param,
                InputValueOwner::Parameter,
            ));
        }
    }

    fn validate_implemented_field(
        &mut self,
        iface_name: &str,
        iface_field: &Field,
        type_field: &Field,
    ) {
        let type_name = self.type_.name();
        let field_name = type_field.name();
        let Some(field_location) = type_field.def_location().file_position() else {
            return;
        };

        // Every interface parameter must exist on the implementing field
        // with an equivalent type.
        for (param_name, iface_param) in iface_field.parameters() {
            let Some(type_param) = type_field.parameters().get(param_name) else {
                self.errors.push(
                    InterfaceConformanceError::MissingInterfaceSpecifiedFieldParameter {
                        type_name: type_name.to_string(),
                        interface_name: iface_name.to_string(),
                        field_name: field_name.to_string(),
                        parameter_name: param_name.to_string(),
                        location: field_location.to_owned(),
                    }.into()
                );
                continue;
            };

            let expected = iface_param.type_annotation();
            let actual = type_param.type_annotation();
            if !actual.is_equivalent_to(expected) {
                self.errors.push(
                    InterfaceConformanceError::InvalidInterfaceSpecifiedFieldParameterType {
                        type_name: type_name.to_string(),
                        interface_name: iface_name.to_string(),
                        field_name: field_name.to_string(),
                        parameter_name: param_name.to_string(),
                        expected_parameter_type: expected.to_owned(),
                        invalid_parameter_type: actual.to_owned(),
                        location: position_or(type_param.def_location(), field_location),
                    }.into()
                );
            }
        }

        // Parameters the interface doesn't declare must be optional.
        //
        // See 2.d at https://spec.graphql.org/October2021/#IsValidImplementation()
        for (param_name, type_param) in type_field.parameters() {
            if iface_field.parameters().contains_key(param_name) || !type_param.is_required() {
                continue;
            }
            self.errors.push(InterfaceConformanceError::InvalidRequiredAdditionalParameter {
                type_name: type_name.to_string(),
                interface_name: iface_name.to_string(),
                field_name: field_name.to_string(),
                parameter_name: param_name.to_string(),
                location: position_or(type_param.def_location(), field_location),
            }.into());
        }

        let expected = iface_field.type_annotation();
        let actual = type_field.type_annotation();
        if !actual.is_subtype_of(self.types, expected) {
            self.errors.push(InterfaceConformanceError::InvalidInterfaceSpecifiedFieldType {
                type_name: type_name.to_string(),
                interface_name: iface_name.to_string(),
                field_name: field_name.to_string(),
                expected_field_type: expected.to_owned(),
                invalid_field_type: actual.to_owned(),
                location: field_location.to_owned(),
            }.into());
        }
    }
}

fn position_or(location: &loc::SourceLocation, fallback: &loc::FilePosition) -> loc::FilePosition {
    location.file_position().unwrap_or(fallback).to_owned()
}
