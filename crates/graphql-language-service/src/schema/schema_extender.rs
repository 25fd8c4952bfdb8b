use crate::ast;
use crate::error::SchemaBuildError;
use crate::error::SchemaError;
use crate::error::SchemaExtensionError;
use crate::loc;
use crate::schema::BuildOptions;
use crate::schema::Schema;
use crate::schema::SchemaAssembly;
use crate::schema::SchemaDocument;
use crate::schema::schema_assembler::AssemblyPass;
use crate::schema::schema_assembler::DefSite;
use crate::schema::schema_assembler::RootTypeNames;
use crate::schema::schema_validator::validate_extension;
use crate::types::InterfaceType;
use crate::types::NamedType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::TypeKind;
use std::sync::Arc;

/// Returns a new schema with the definitions and `extend` blocks of
/// `documents` applied on top of `base`. `base` is never modified.
///
/// Only the types an extension touches are rebuilt; every other type keeps
/// the handle it has in `base` (see [`Schema::get_type_handle`]). Problems
/// already present in `base` are not reported again. When
/// `documents` contain no definitions at all, `base` itself is returned.
pub fn extend_schema(
    base: &Schema,
    documents: &[Arc<SchemaDocument>],
    options: &BuildOptions,
) -> SchemaAssembly {
    let mut pass = AssemblyPass::new(
        options,
        base.data.types.clone(),
        base.data.directives.clone(),
    );
    pass.collect_definitions(documents);
    if !pass.has_definitions() {
        return SchemaAssembly {
            errors: pass.errors,
            schema: base.clone(),
        };
    }

    let extension_count = pass.extensions.len();
    pass.build_type_definitions();
    pass.build_directive_definitions();
    pass.apply_extensions();
    let base_roots = RootTypeNames {
        mutation: base.data.mutation_type.clone(),
        query: base.data.query_type.clone(),
        subscription: base.data.subscription_type.clone(),
    };
    let roots = pass.resolve_root_types(&base_roots);
    let (schema, mut errors) = pass.finish(
        roots,
        base.data.type_dependencies.clone(),
    );

    if base.query_type_name().is_none() {
        // Already reported when `base` was assembled.
        errors.retain(|err| !matches!(err, SchemaError::Build(SchemaBuildError::MissingQueryRootType)));
    }
    if !options.assume_valid {
        errors.extend(validate_extension(base, &schema));
    }

    tracing::debug!(
        "extended schema with {} documents ({} extensions, {} errors)",
        documents.len(),
        extension_count,
        errors.len(),
    );
    SchemaAssembly { errors, schema }
}

impl<'a> AssemblyPass<'a> {
    /// Applies the collected `extend` blocks in declaration order, so several
    /// extensions of one type accumulate.
    pub(super) fn apply_extensions(&mut self) {
        let extensions = std::mem::take(&mut self.extensions);
        for site in extensions {
            self.apply_extension(site);
        }
    }

    fn apply_extension(&mut self, site: DefSite<'a, ast::schema::TypeExtension>) {
        let (type_name, pos, extension_kind) = extension_identity(site.def);
        let location = site.file_position(pos);

        if matches!(
            extension_kind,
            TypeKind::Enum | TypeKind::InputObject | TypeKind::Scalar,
        ) {
            self.errors.push(SchemaExtensionError::UnsupportedExtensionKind {
                type_name: type_name.to_string(),
                extension_kind,
                location,
            }.into());
            return;
        }

        let base = self.types
            .get(type_name)
            .filter(|t| !t.is_placeholder())
            .cloned();
        let Some(base) = base else {
            self.errors.push(SchemaExtensionError::ExtensionOfUndefinedType {
                type_name: type_name.to_string(),
                location,
            }.into());
            return;
        };

        if base.kind() != extension_kind {
            self.errors.push(SchemaExtensionError::InvalidExtensionKind {
                type_name: type_name.to_string(),
                base_kind: base.kind(),
                extension_kind,
                location,
            }.into());
            return;
        }

        let extended = match (site.def, base.as_ref()) {
            (ast::schema::TypeExtension::Interface(ext), NamedType::Interface(iface)) => {
                if ext.implements_interfaces.contains(&ext.name) {
                    self.errors.push(SchemaBuildError::InvalidSelfImplementingInterface {
                        interface_name: ext.name.to_string(),
                        location: location.clone(),
                    }.into());
                }
                NamedType::Interface(InterfaceType(self.extend_object_or_interface(
                    site,
                    &iface.0,
                    &ext.fields,
                    &ext.implements_interfaces,
                    &location,
                )))
            },

            (ast::schema::TypeExtension::Object(ext), NamedType::Object(obj)) =>
                NamedType::Object(ObjectType(self.extend_object_or_interface(
                    site,
                    &obj.0,
                    &ext.fields,
                    &ext.implements_interfaces,
                    &location,
                ))),

            (ast::schema::TypeExtension::Union(ext), NamedType::Union(union_type)) => {
                let mut union_type = union_type.clone();
                for member_name in &ext.types {
                    if union_type.members.contains(member_name) {
                        self.errors.push(SchemaExtensionError::DuplicateUnionMemberOnExtension {
                            type_name: type_name.to_string(),
                            member_name: member_name.to_string(),
                            location: location.clone(),
                        }.into());
                    }
                }
                let new_members = self.build_union_members(
                    type_name,
                    &ext.types,
                    &location,
                    &union_type.members,
                );
                union_type.members.extend(new_members);
                NamedType::Union(union_type)
            },

            // Kinds were checked above.
            _ => return,
        };

        self.types.insert(type_name.to_string(), Arc::new(extended));
    }

    fn extend_object_or_interface(
        &mut self,
        site: DefSite<'a, ast::schema::TypeExtension>,
        base: &ObjectOrInterfaceTypeData,
        fields: &[ast::schema::Field],
        interfaces: &[String],
        location: &loc::FilePosition,
    ) -> ObjectOrInterfaceTypeData {
        let mut data = base.clone();
        for field in fields {
            if data.fields.contains_key(&field.name) {
                self.errors.push(SchemaExtensionError::DuplicateFieldOnExtension {
                    type_name: data.name.to_string(),
                    field_name: field.name.to_string(),
                    location: site.file_position(field.position),
                }.into());
            }
        }
        for iface_name in interfaces {
            if data.interfaces.contains(iface_name) {
                self.errors.push(SchemaExtensionError::DuplicateInterfaceOnExtension {
                    type_name: data.name.to_string(),
                    interface_name: iface_name.to_string(),
                    location: location.clone(),
                }.into());
            }
        }

        let new_fields = self.build_fields(site, &base.name, fields, &base.fields);
        let new_interfaces = self.build_implements(
            &base.name,
            interfaces,
            location,
            &base.interfaces,
        );
        data.fields.extend(new_fields);
        data.interfaces.extend(new_interfaces);
        data
    }
}

fn extension_identity(
    ext: &ast::schema::TypeExtension,
) -> (&str, graphql_parser::Pos, TypeKind) {
    match ext {
        ast::schema::TypeExtension::Enum(e) => (&e.name, e.position, TypeKind::Enum),
        ast::schema::TypeExtension::InputObject(e) => (&e.name, e.position, TypeKind::InputObject),
        ast::schema::TypeExtension::Interface(e) => (&e.name, e.position, TypeKind::Interface),
        ast::schema::TypeExtension::Object(e) => (&e.name, e.position, TypeKind::Object),
        ast::schema::TypeExtension::Scalar(e) => (&e.name, e.position, TypeKind::Scalar),
        ast::schema::TypeExtension::Union(e) => (&e.name, e.position, TypeKind::Union),
    }
}
