use crate::ast;
use crate::error::GQLError;
use crate::error::SchemaBuildError;
use crate::error::SchemaError;
use crate::error::ToGQLError;
use crate::file_reader;
use crate::loc;
use crate::schema::BuildOptions;
use crate::schema::Schema;
use crate::schema::SchemaDocument;
use crate::schema::schema::SchemaData;
use crate::schema::schema::builtin_directives;
use crate::schema::schema::builtin_types;
use crate::schema::validate_schema;
use crate::types::DirectiveDefinition;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::NamedType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::OperationKind;
use crate::types::PlaceholderType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::TypeKind;
use crate::types::TypeMap;
use crate::types::TypeReference;
use crate::types::UnionType;
use graphql_parser::Pos;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// The outcome of assembling (or extending) a schema: always a usable
/// [`Schema`], plus everything that went wrong along the way.
#[derive(Clone, Debug)]
pub struct SchemaAssembly {
    pub errors: Vec<SchemaError>,
    pub schema: Schema,
}
impl SchemaAssembly {
    pub fn gql_errors(&self) -> Vec<GQLError> {
        self.errors
            .iter()
            .map(ToGQLError::to_gql_error)
            .collect()
    }

    /// Whether any error-severity problem was found (warnings don't count).
    pub fn has_errors(&self) -> bool {
        self.gql_errors().iter().any(GQLError::is_error)
    }
}

/// Collects schema documents and assembles them into one [`Schema`].
///
/// Assembly never fails outright: syntax errors, duplicate definitions and
/// unresolved references are all collected into
/// [`SchemaAssembly::errors`] while the rest of the schema is still built.
#[derive(Debug, Default)]
pub struct SchemaAssembler {
    documents: Vec<Arc<SchemaDocument>>,
    load_errors: Vec<SchemaError>,
    options: BuildOptions,
}
impl SchemaAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assemble(self) -> SchemaAssembly {
        let Self { documents, load_errors, options } = self;
        let mut errors = load_errors;
        if documents.is_empty() {
            errors.push(SchemaBuildError::NoSchemaFilesMatched.into());
            return SchemaAssembly {
                errors,
                schema: Schema::empty(),
            };
        }

        let mut pass = AssemblyPass::new(
            &options,
            builtin_types(),
            builtin_directives(),
        );
        pass.collect_definitions(&documents);
        pass.build_type_definitions();
        pass.build_directive_definitions();
        pass.apply_extensions();
        let roots = pass.resolve_root_types(&RootTypeNames::default());
        let (schema, pass_errors) = pass.finish(roots, IndexMap::new());
        errors.extend(pass_errors);

        if !options.assume_valid {
            errors.extend(validate_schema(&schema));
        }

        tracing::debug!(
            "assembled {} types from {} documents ({} errors)",
            schema.type_map().len(),
            documents.len(),
            errors.len(),
        );
        SchemaAssembly { errors, schema }
    }

    pub fn load_document(mut self, document: Arc<SchemaDocument>) -> Self {
        self.documents.push(document);
        self
    }

    pub fn load_documents(
        mut self,
        documents: impl IntoIterator<Item = Arc<SchemaDocument>>,
    ) -> Self {
        self.documents.extend(documents);
        self
    }

    /// Reads and loads each file. A file that can't be read is reported as
    /// an error of the assembly rather than aborting it.
    pub fn load_files<P: AsRef<Path>>(mut self, paths: impl IntoIterator<Item = P>) -> Self {
        for path in paths {
            let path = path.as_ref();
            match file_reader::read_content(path) {
                Ok(content) => self = self.load_str(path, content),
                Err(err) => self.load_errors.push(
                    SchemaBuildError::UnreadableFile {
                        location: loc::FilePosition::new(err.file_path(), 1, 1),
                        message: err.to_string(),
                    }.into()
                ),
            }
        }
        self
    }

    pub fn load_str(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.load_document(Arc::new(SchemaDocument::parse(path, content)))
    }

    pub fn options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }
}

// =============================================================================
// Assembly pass
// =============================================================================

/// Where a definition came from.
pub(super) struct DefSite<'a, T> {
    pub(super) def: &'a T,
    pub(super) doc: &'a SchemaDocument,
}
impl<T> Clone for DefSite<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for DefSite<'_, T> {}
impl<T> DefSite<'_, T> {
    pub(super) fn file_position(&self, pos: Pos) -> loc::FilePosition {
        self.doc.file_position(pos)
    }
}

#[derive(Debug, Default)]
pub(super) struct RootTypeNames {
    pub(super) mutation: Option<String>,
    pub(super) query: Option<String>,
    pub(super) subscription: Option<String>,
}

/// State for one assembly (or extension) pass.
///
/// `types` starts out holding the types of the base schema and is the
/// name-keyed cache every reference is resolved against. Handles are
/// replaced, never mutated, so types nobody touched stay shared with the
/// base.
pub(super) struct AssemblyPass<'a> {
    dependencies: IndexMap<String, Vec<TypeReference>>,
    directive_defs: IndexMap<String, DefSite<'a, ast::schema::DirectiveDefinition>>,
    pub(super) directives: IndexMap<String, Arc<DirectiveDefinition>>,
    pub(super) errors: Vec<SchemaError>,
    pub(super) extensions: Vec<DefSite<'a, ast::schema::TypeExtension>>,
    options: &'a BuildOptions,
    placeholders: IndexMap<String, PlaceholderType>,
    schema_def: Option<DefSite<'a, ast::schema::SchemaDefinition>>,
    type_defs: IndexMap<String, DefSite<'a, ast::schema::TypeDefinition>>,
    pub(super) types: TypeMap,
}
impl<'a> AssemblyPass<'a> {
    pub(super) fn new(
        options: &'a BuildOptions,
        types: TypeMap,
        directives: IndexMap<String, Arc<DirectiveDefinition>>,
    ) -> Self {
        Self {
            dependencies: IndexMap::new(),
            directive_defs: IndexMap::new(),
            directives,
            errors: vec![],
            extensions: vec![],
            options,
            placeholders: IndexMap::new(),
            schema_def: None,
            type_defs: IndexMap::new(),
            types,
        }
    }

    pub(super) fn has_definitions(&self) -> bool {
        !self.type_defs.is_empty()
            || !self.directive_defs.is_empty()
            || !self.extensions.is_empty()
            || self.schema_def.is_some()
    }

    // -------------------------------------------------------------------------
    // Bucketing
    // -------------------------------------------------------------------------

    pub(super) fn collect_definitions(&mut self, documents: &'a [Arc<SchemaDocument>]) {
        for doc in documents {
            let doc = doc.as_ref();
            let document = match doc.ast() {
                Ok(document) => document,
                Err(err) => {
                    self.errors.push(err.clone().into());
                    continue;
                },
            };

            for def in &document.definitions {
                match def {
                    ast::schema::Definition::DirectiveDefinition(def) =>
                        self.collect_directive_def(DefSite { def, doc }),

                    ast::schema::Definition::SchemaDefinition(def) =>
                        self.collect_schema_def(DefSite { def, doc }),

                    ast::schema::Definition::TypeDefinition(def) =>
                        self.collect_type_def(DefSite { def, doc }),

                    ast::schema::Definition::TypeExtension(def) =>
                        self.extensions.push(DefSite { def, doc }),
                }
            }
        }
    }

    fn collect_directive_def(&mut self, site: DefSite<'a, ast::schema::DirectiveDefinition>) {
        let name = site.def.name.as_str();
        let location = site.file_position(site.def.position);
        if let Some(existing) = self.directives.get(name) {
            let error =
                if existing.is_builtin() {
                    SchemaBuildError::RedefinitionOfBuiltinDirective {
                        directive_name: name.to_string(),
                        location,
                    }
                } else {
                    SchemaBuildError::DuplicateDirectiveDefinition {
                        directive_name: name.to_string(),
                        first: existing.def_location().clone(),
                        duplicate: location,
                    }
                };
            self.errors.push(error.into());
        } else if let Some(first) = self.directive_defs.get(name) {
            self.errors.push(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: name.to_string(),
                first: first.file_position(first.def.position).into(),
                duplicate: location,
            }.into());
        } else if self.check_name(name, &location) {
            self.directive_defs.insert(name.to_string(), site);
        }
    }

    fn collect_schema_def(&mut self, site: DefSite<'a, ast::schema::SchemaDefinition>) {
        if self.schema_def.is_some() {
            self.errors.push(SchemaBuildError::DuplicateSchemaDefinition {
                location: site.file_position(site.def.position),
            }.into());
        } else {
            self.schema_def = Some(site);
        }
    }

    fn collect_type_def(&mut self, site: DefSite<'a, ast::schema::TypeDefinition>) {
        let (name, pos) = type_def_name_and_pos(site.def);
        let location = site.file_position(pos);
        if !self.check_name(name, &location) {
            return;
        }

        if let Some(first) = self.type_defs.get(name) {
            let (_, first_pos) = type_def_name_and_pos(first.def);
            self.errors.push(SchemaBuildError::DuplicateTypeDefinition {
                type_name: name.to_string(),
                first: first.file_position(first_pos).into(),
                duplicate: location,
            }.into());
            return;
        }

        let existing = self.types.get(name).filter(|t| !t.is_placeholder());
        if let Some(existing) = existing {
            self.errors.push(SchemaBuildError::DuplicateTypeDefinition {
                type_name: name.to_string(),
                first: existing.def_location().clone(),
                duplicate: location,
            }.into());
            return;
        }

        self.type_defs.insert(name.to_string(), site);
    }

    /// Rejects names reserved for introspection.
    fn check_name(&mut self, name: &str, location: &loc::FilePosition) -> bool {
        if name.starts_with("__") {
            self.errors.push(SchemaBuildError::InvalidDunderPrefixedName {
                name: name.to_string(),
                location: location.clone(),
            }.into());
            false
        } else {
            true
        }
    }

    // -------------------------------------------------------------------------
    // Building
    // -------------------------------------------------------------------------

    pub(super) fn build_type_definitions(&mut self) {
        let type_defs =
            self.type_defs
                .values()
                .copied()
                .collect::<Vec<_>>();
        for site in type_defs {
            let built = self.build_type(site);
            self.types.insert(built.name().to_string(), Arc::new(built));
        }
    }

    fn build_type(&mut self, site: DefSite<'a, ast::schema::TypeDefinition>) -> NamedType {
        match site.def {
            ast::schema::TypeDefinition::Enum(def) =>
                NamedType::Enum(EnumType {
                    def_location: site.file_position(def.position).into(),
                    description: self.description(site, def.description.as_ref(), def.position),
                    name: def.name.to_string(),
                    values: self.build_enum_values(site, &def.name, &def.values),
                }),

            ast::schema::TypeDefinition::InputObject(def) => {
                let fields = self.build_input_values(
                    site,
                    &def.name,
                    &def.fields,
                    |input_name| def.name.clone() + "." + input_name,
                );
                NamedType::InputObject(InputObjectType {
                    def_location: site.file_position(def.position).into(),
                    description: self.description(site, def.description.as_ref(), def.position),
                    fields,
                    name: def.name.to_string(),
                })
            },

            ast::schema::TypeDefinition::Interface(def) => {
                let location = site.file_position(def.position);
                if def.implements_interfaces.contains(&def.name) {
                    self.errors.push(SchemaBuildError::InvalidSelfImplementingInterface {
                        interface_name: def.name.to_string(),
                        location: location.clone(),
                    }.into());
                }
                let interfaces = self.build_implements(
                    &def.name,
                    &def.implements_interfaces,
                    &location,
                    &[],
                );
                NamedType::Interface(InterfaceType(ObjectOrInterfaceTypeData {
                    def_location: location.into(),
                    description: self.description(site, def.description.as_ref(), def.position),
                    fields: self.build_fields(site, &def.name, &def.fields, &IndexMap::new()),
                    interfaces,
                    name: def.name.to_string(),
                }))
            },

            ast::schema::TypeDefinition::Object(def) => {
                let location = site.file_position(def.position);
                let interfaces = self.build_implements(
                    &def.name,
                    &def.implements_interfaces,
                    &location,
                    &[],
                );
                NamedType::Object(ObjectType(ObjectOrInterfaceTypeData {
                    def_location: location.into(),
                    description: self.description(site, def.description.as_ref(), def.position),
                    fields: self.build_fields(site, &def.name, &def.fields, &IndexMap::new()),
                    interfaces,
                    name: def.name.to_string(),
                }))
            },

            ast::schema::TypeDefinition::Scalar(def) =>
                NamedType::Scalar(ScalarType {
                    def_location: site.file_position(def.position).into(),
                    description: self.description(site, def.description.as_ref(), def.position),
                    name: def.name.to_string(),
                }),

            ast::schema::TypeDefinition::Union(def) => {
                let location = site.file_position(def.position);
                NamedType::Union(UnionType {
                    def_location: location.clone().into(),
                    description: self.description(site, def.description.as_ref(), def.position),
                    members: self.build_union_members(&def.name, &def.types, &location, &[]),
                    name: def.name.to_string(),
                })
            },
        }
    }

    fn build_enum_values(
        &mut self,
        site: DefSite<'a, ast::schema::TypeDefinition>,
        type_name: &str,
        values: &[ast::schema::EnumValue],
    ) -> IndexMap<String, EnumValue> {
        let mut built = IndexMap::new();
        for value in values {
            let location = site.file_position(value.position);
            if built.contains_key(&value.name) {
                self.errors.push(SchemaBuildError::DuplicateEnumValueDefinition {
                    type_name: type_name.to_string(),
                    value_name: value.name.to_string(),
                    location,
                }.into());
                continue;
            }
            built.insert(value.name.to_string(), EnumValue {
                def_location: location.into(),
                deprecation_reason: deprecation_reason(&value.directives),
                description: self.description(site, value.description.as_ref(), value.position),
                name: value.name.to_string(),
            });
        }
        built
    }

    /// Builds output fields, skipping (and reporting) any whose name repeats
    /// an earlier field or one in `existing`.
    pub(super) fn build_fields<T>(
        &mut self,
        site: DefSite<'a, T>,
        type_name: &str,
        fields: &[ast::schema::Field],
        existing: &IndexMap<String, Field>,
    ) -> IndexMap<String, Field> {
        let mut built = IndexMap::new();
        for field in fields {
            let location = site.file_position(field.position);
            if !self.check_name(&field.name, &location) {
                continue;
            }
            if existing.contains_key(&field.name) {
                // Collisions with the base type are an extension problem and
                // are reported by the caller.
                continue;
            }
            if built.contains_key(&field.name) {
                self.errors.push(SchemaBuildError::DuplicateFieldDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name.to_string(),
                    location,
                }.into());
                continue;
            }

            let coordinate = format!("{type_name}.{}", field.name);
            let type_annotation = TypeAnnotation::from_ast_type(&field.field_type);
            self.resolve_reference(
                type_annotation.innermost_type_name(),
                &coordinate,
                &location,
                TypeKind::Object,
            );
            let parameters = self.build_input_values(
                site,
                &coordinate,
                &field.arguments,
                |param_name| format!("{coordinate}({param_name}:)"),
            );
            built.insert(field.name.to_string(), Field {
                def_location: location.into(),
                deprecation_reason: deprecation_reason(&field.directives),
                description: self.description(site, field.description.as_ref(), field.position),
                name: field.name.to_string(),
                parameters,
                type_annotation,
            });
        }
        built
    }

    /// Builds arguments or input-object fields. `referrer` names the
    /// coordinate recorded as the referencing site of each value's type.
    fn build_input_values<T>(
        &mut self,
        site: DefSite<'a, T>,
        owner: &str,
        values: &[ast::schema::InputValue],
        referrer: impl Fn(&str) -> String,
    ) -> IndexMap<String, InputValue> {
        let mut built = IndexMap::new();
        for value in values {
            let location = site.file_position(value.position);
            if !self.check_name(&value.name, &location) {
                continue;
            }
            if built.contains_key(&value.name) {
                self.errors.push(SchemaBuildError::DuplicateParameterDefinition {
                    owner: owner.to_string(),
                    parameter_name: value.name.to_string(),
                    location,
                }.into());
                continue;
            }

            let type_annotation = TypeAnnotation::from_ast_type(&value.value_type);
            self.resolve_reference(
                type_annotation.innermost_type_name(),
                &referrer(&value.name),
                &location,
                TypeKind::Scalar,
            );
            built.insert(value.name.to_string(), InputValue {
                def_location: location.into(),
                default_value: value.default_value.as_ref().map(|v| v.to_string()),
                description: self.description(site, value.description.as_ref(), value.position),
                name: value.name.to_string(),
                type_annotation,
            });
        }
        built
    }

    /// Resolves `implements` entries. Entries already in `existing` are
    /// skipped silently; the caller reports them if that matters.
    pub(super) fn build_implements(
        &mut self,
        type_name: &str,
        interface_names: &[String],
        location: &loc::FilePosition,
        existing: &[String],
    ) -> Vec<String> {
        let mut built: Vec<String> = vec![];
        for iface_name in interface_names {
            if existing.contains(iface_name) {
                continue;
            }
            if built.contains(iface_name) {
                self.errors.push(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                    type_name: type_name.to_string(),
                    interface_name: iface_name.to_string(),
                    location: location.clone(),
                }.into());
                continue;
            }
            self.resolve_reference(iface_name, type_name, location, TypeKind::Interface);
            built.push(iface_name.to_string());
        }
        built
    }

    pub(super) fn build_union_members(
        &mut self,
        type_name: &str,
        member_names: &[String],
        location: &loc::FilePosition,
        existing: &[String],
    ) -> Vec<String> {
        let mut built: Vec<String> = vec![];
        for member_name in member_names {
            if existing.contains(member_name) {
                continue;
            }
            if built.contains(member_name) {
                self.errors.push(SchemaBuildError::DuplicatedUnionMember {
                    type_name: type_name.to_string(),
                    member_name: member_name.to_string(),
                    location: location.clone(),
                }.into());
                continue;
            }
            self.resolve_reference(member_name, type_name, location, TypeKind::Object);
            built.push(member_name.to_string());
        }
        built
    }

    pub(super) fn build_directive_definitions(&mut self) {
        let directive_defs =
            self.directive_defs
                .values()
                .copied()
                .collect::<Vec<_>>();
        for site in directive_defs {
            let def = site.def;
            let owner = format!("@{}", def.name);
            let parameters = self.build_input_values(
                site,
                &owner,
                &def.arguments,
                |param_name| format!("{owner}({param_name}:)"),
            );
            let directive = DirectiveDefinition {
                def_location: site.file_position(def.position).into(),
                description: self.description(site, def.description.as_ref(), def.position),
                locations: def.locations.iter().map(|l| l.as_str().to_string()).collect(),
                name: def.name.to_string(),
                parameters,
                repeatable: def.repeatable,
            };
            self.directives.insert(def.name.to_string(), Arc::new(directive));
        }
    }

    /// Records that `referrer` mentions `type_name`. When `type_name` is not
    /// (yet) a real type a placeholder of `placeholder_kind` stands in for it
    /// and a "not found" error is recorded for this reference.
    pub(super) fn resolve_reference(
        &mut self,
        type_name: &str,
        referrer: &str,
        location: &loc::FilePosition,
        placeholder_kind: TypeKind,
    ) {
        self.dependencies
            .entry(type_name.to_string())
            .or_default()
            .push(TypeReference::new(referrer, location.clone().into()));

        let is_defined =
            self.type_defs.contains_key(type_name)
                || self.types.get(type_name).is_some_and(|t| !t.is_placeholder());
        if is_defined {
            return;
        }

        self.errors.push(SchemaBuildError::UndefinedTypeReference {
            type_name: type_name.to_string(),
            referrer: referrer.to_string(),
            location: location.clone(),
        }.into());
        if !self.types.contains_key(type_name) {
            self.placeholders
                .entry(type_name.to_string())
                .or_insert_with(|| PlaceholderType {
                    kind: placeholder_kind,
                    name: type_name.to_string(),
                    ref_location: location.clone().into(),
                });
        }
    }

    fn description<T>(
        &self,
        site: DefSite<'a, T>,
        description: Option<&String>,
        pos: Pos,
    ) -> Option<String> {
        if let Some(description) = description {
            return Some(description.to_string());
        }
        if self.options.comment_descriptions {
            comment_description(site.doc.source(), pos.line)
        } else {
            None
        }
    }

    // -------------------------------------------------------------------------
    // Root operation types
    // -------------------------------------------------------------------------

    /// Picks the root operation types from the `schema { ... }` block when
    /// there is one, otherwise from `base` and then by naming convention.
    pub(super) fn resolve_root_types(&mut self, base: &RootTypeNames) -> RootTypeNames {
        let Some(site) = self.schema_def else {
            return RootTypeNames {
                mutation: base.mutation.clone()
                    .or_else(|| self.conventional_root(OperationKind::Mutation)),
                query: base.query.clone()
                    .or_else(|| self.conventional_root(OperationKind::Query)),
                subscription: base.subscription.clone()
                    .or_else(|| self.conventional_root(OperationKind::Subscription)),
            };
        };

        let location = site.file_position(site.def.position);
        let declared = [
            (OperationKind::Query, site.def.query.as_ref()),
            (OperationKind::Mutation, site.def.mutation.as_ref()),
            (OperationKind::Subscription, site.def.subscription.as_ref()),
        ];

        let mut seen: Vec<(OperationKind, &String)> = vec![];
        for (operation, type_name) in declared {
            let Some(type_name) = type_name else { continue };
            if let Some((other_op, _)) = seen.iter().find(|(_, name)| *name == type_name) {
                self.errors.push(SchemaBuildError::NonUniqueOperationTypes {
                    type_name: type_name.to_string(),
                    operation1: *other_op,
                    operation2: operation,
                    location: location.clone(),
                }.into());
            }
            seen.push((operation, type_name));
        }

        let mut roots = RootTypeNames::default();
        for (operation, type_name) in declared {
            let Some(type_name) = type_name else { continue };
            let referrer = format!("schema.{}", operation.default_type_name().to_lowercase());
            self.resolve_reference(type_name, &referrer, &location, TypeKind::Object);
            let kind = self.types.get(type_name.as_str()).map(|t| t.kind());
            if kind.is_some_and(|kind| kind != TypeKind::Object) {
                self.errors.push(SchemaBuildError::InvalidRootOperationType {
                    operation,
                    type_name: type_name.to_string(),
                    location: location.clone(),
                }.into());
                continue;
            }

            let type_name = Some(type_name.to_string());
            match operation {
                OperationKind::Mutation => roots.mutation = type_name,
                OperationKind::Query => roots.query = type_name,
                OperationKind::Subscription => roots.subscription = type_name,
            }
        }
        roots
    }

    fn conventional_root(&mut self, operation: OperationKind) -> Option<String> {
        let type_name = operation.default_type_name();
        let named_type = self.types.get(type_name)?;
        if named_type.kind() == TypeKind::Object {
            return Some(type_name.to_string());
        }
        if let Some(location) = named_type.def_location().file_position() {
            self.errors.push(SchemaBuildError::InvalidRootOperationType {
                operation,
                type_name: type_name.to_string(),
                location: location.clone(),
            }.into());
        }
        None
    }

    // -------------------------------------------------------------------------
    // Finishing
    // -------------------------------------------------------------------------

    /// Seals the pass into a [`Schema`]. `base_dependencies` holds reverse
    /// edges recorded by earlier passes; this pass's edges are appended.
    pub(super) fn finish(
        mut self,
        roots: RootTypeNames,
        base_dependencies: IndexMap<String, Arc<Vec<TypeReference>>>,
    ) -> (Schema, Vec<SchemaError>) {
        if roots.query.is_none() {
            let reported = self.errors.iter().any(|err| matches!(
                err,
                SchemaError::Build(SchemaBuildError::InvalidRootOperationType {
                    operation: OperationKind::Query,
                    ..
                }),
            ));
            if !reported {
                self.errors.push(SchemaBuildError::MissingQueryRootType.into());
            }
        }

        for (name, placeholder) in self.placeholders {
            self.types
                .entry(name)
                .or_insert_with(|| Arc::new(NamedType::Placeholder(placeholder)));
        }

        let mut type_dependencies = base_dependencies;
        for (name, refs) in self.dependencies {
            let entry = type_dependencies.entry(name).or_default();
            Arc::make_mut(entry).extend(refs);
        }

        let schema = Schema {
            data: Arc::new(SchemaData {
                directives: self.directives,
                mutation_type: roots.mutation,
                query_type: roots.query,
                subscription_type: roots.subscription,
                type_dependencies,
                types: self.types,
            }),
        };
        (schema, self.errors)
    }
}

fn type_def_name_and_pos(def: &ast::schema::TypeDefinition) -> (&str, Pos) {
    match def {
        ast::schema::TypeDefinition::Enum(t) => (&t.name, t.position),
        ast::schema::TypeDefinition::InputObject(t) => (&t.name, t.position),
        ast::schema::TypeDefinition::Interface(t) => (&t.name, t.position),
        ast::schema::TypeDefinition::Object(t) => (&t.name, t.position),
        ast::schema::TypeDefinition::Scalar(t) => (&t.name, t.position),
        ast::schema::TypeDefinition::Union(t) => (&t.name, t.position),
    }
}

fn deprecation_reason(directives: &[ast::schema::Directive]) -> Option<String> {
    let deprecated = directives.iter().find(|d| d.name == "deprecated")?;
    let reason = deprecated.arguments
        .iter()
        .find_map(|(name, value)| match value {
            ast::schema::Value::String(reason) if name == "reason" =>
                Some(reason.to_string()),
            _ => None,
        });
    Some(reason.unwrap_or_else(|| "No longer supported".to_string()))
}

/// The run of `#` lines directly above (1-indexed) `line`, with the `#` and
/// one following space stripped from each.
fn comment_description(source: &str, line: usize) -> Option<String> {
    let lines = source.lines().take(line.saturating_sub(1)).collect::<Vec<_>>();
    let comment_lines =
        lines.iter()
            .rev()
            .map(|line| line.trim_start())
            .take_while(|line| line.starts_with('#'))
            .map(|line| {
                let text = &line[1..];
                text.strip_prefix(' ').unwrap_or(text)
            })
            .collect::<Vec<_>>();
    if comment_lines.is_empty() {
        return None;
    }
    Some(
        comment_lines.into_iter()
            .rev()
            .collect::<Vec<_>>()
            .join("\n")
    )
}
