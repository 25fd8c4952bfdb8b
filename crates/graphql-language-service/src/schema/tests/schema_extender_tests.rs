use crate::error::Severity;
use crate::error::SchemaError;
use crate::error::SchemaExtensionError;
use crate::error::ToGQLError;
use crate::schema::BuildOptions;
use crate::schema::Schema;
use crate::schema::SchemaDocument;
use crate::schema::extend_schema;
use crate::schema::tests::utils::assemble;
use crate::schema::tests::utils::messages;
use crate::types::TypeKind;
use std::sync::Arc;

const BASE: &str = concat!(
    "type Query { user: User }\n",
    "type User { id: ID }\n",
    "type Team { name: String }\n",
    "interface Node { id: ID }\n",
    "union SearchResult = User\n",
    "enum Color { RED }\n",
);

fn base_schema() -> Schema {
    let assembly = assemble(&[("/schema/base.graphql", BASE)]);
    assert!(assembly.errors.is_empty(), "{:?}", assembly.errors);
    assembly.schema
}

fn extension(sdl: &str) -> Vec<Arc<SchemaDocument>> {
    vec![Arc::new(SchemaDocument::parse("/schema/ext.graphql", sdl))]
}

mod identity {
    use super::*;

    #[test]
    fn empty_extension_returns_base_schema() {
        let base = base_schema();
        let extended = extend_schema(&base, &[], &BuildOptions::default());
        assert!(extended.errors.is_empty());
        assert!(extended.schema.ptr_eq(&base));
    }

    #[test]
    fn unparsable_extension_returns_base_schema_and_its_error() {
        let base = base_schema();
        let extended = extend_schema(
            &base,
            &extension("extend type User {"),
            &BuildOptions::default(),
        );
        assert!(matches!(extended.errors.as_slice(), [SchemaError::Syntax(_)]));
        assert!(extended.schema.ptr_eq(&base));
    }

    #[test]
    fn untouched_types_keep_their_handles() {
        let base = base_schema();
        let extended = extend_schema(
            &base,
            &extension("extend type User { name: String }"),
            &BuildOptions::default(),
        );
        assert!(extended.errors.is_empty(), "{:?}", extended.errors);
        assert!(!extended.schema.ptr_eq(&base));

        let handle = |schema: &Schema, name: &str| schema.get_type_handle(name).unwrap().clone();
        for untouched in ["Query", "Team", "Node", "SearchResult", "String"] {
            assert!(
                Arc::ptr_eq(&handle(&base, untouched), &handle(&extended.schema, untouched)),
                "{untouched} was rebuilt",
            );
        }
        assert!(!Arc::ptr_eq(&handle(&base, "User"), &handle(&extended.schema, "User")));
    }

    #[test]
    fn base_is_never_modified() {
        let base = base_schema();
        let _ = extend_schema(
            &base,
            &extension("extend type User { name: String }\ntype Extra { a: Int }"),
            &BuildOptions::default(),
        );
        assert_eq!(base.get_type("User").unwrap().fields().unwrap().len(), 1);
        assert!(base.get_type("Extra").is_none());
    }
}

mod merging {
    use super::*;

    #[test]
    fn multiple_extensions_accumulate_in_declaration_order() {
        let base = base_schema();
        let extended = extend_schema(
            &base,
            &extension(concat!(
                "extend type User implements Node { name: String }\n",
                "extend type User { team: Team }\n",
            )),
            &BuildOptions::default(),
        );
        assert!(extended.errors.is_empty(), "{:?}", extended.errors);

        let user = extended.schema.get_type("User").unwrap().as_object().unwrap();
        assert_eq!(
            user.fields().keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["id", "name", "team"],
        );
        assert_eq!(user.interface_names(), vec!["Node"]);
    }

    #[test]
    fn new_types_and_references_join_the_schema() {
        let base = base_schema();
        let extended = extend_schema(
            &base,
            &extension("type Post { author: User }\nextend type Query { posts: [Post] }"),
            &BuildOptions::default(),
        );
        assert!(extended.errors.is_empty(), "{:?}", extended.errors);

        let schema = &extended.schema;
        assert_eq!(schema.get_type("Post").unwrap().kind(), TypeKind::Object);
        let referrers =
            schema.type_dependents("User")
                .iter()
                .map(|r| r.referrer())
                .collect::<Vec<_>>();
        assert_eq!(referrers, vec!["Query.user", "SearchResult", "Post.author"]);
        assert_eq!(schema.query_type_name(), Some("Query"));
        assert_eq!(base.type_dependents("User").len(), 2);
    }

    #[test]
    fn union_extension_appends_members() {
        let base = base_schema();
        let extended = extend_schema(
            &base,
            &extension("extend union SearchResult = Team | User"),
            &BuildOptions::default(),
        );
        assert!(matches!(
            extended.errors.as_slice(),
            [SchemaError::Extension(SchemaExtensionError::DuplicateUnionMemberOnExtension {
                member_name,
                ..
            })] if member_name == "User",
        ));
        let union_type = extended.schema.get_type("SearchResult").unwrap().as_union().unwrap();
        assert_eq!(union_type.member_names().collect::<Vec<_>>(), vec!["User", "Team"]);
    }

    #[test]
    fn definitions_in_assembled_files_are_extended_too() {
        let assembly = assemble(&[
            ("/schema/a.graphql", "type Query { a: Int }"),
            ("/schema/b.graphql", "extend type Query { b: Int }"),
        ]);
        assert!(assembly.errors.is_empty(), "{:?}", assembly.errors);
        let query = assembly.schema.query_type().unwrap();
        assert_eq!(query.fields().len(), 2);
    }
}

mod errors {
    use super::*;

    #[test]
    fn field_collision_keeps_base_field() {
        let base = base_schema();
        let extended = extend_schema(
            &base,
            &extension("extend type User { id: String, email: String }"),
            &BuildOptions::default(),
        );
        assert_eq!(
            messages(&extended.errors),
            vec!["Field \"User.id\" already exists in the schema. It cannot also be defined in this type extension."],
        );
        let user = extended.schema.get_type("User").unwrap();
        let fields = user.fields().unwrap();
        assert_eq!(fields["id"].type_annotation().to_string(), "ID");
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn extension_of_undefined_type() {
        let base = base_schema();
        let extended = extend_schema(
            &base,
            &extension("extend type Missing { a: Int }"),
            &BuildOptions::default(),
        );
        assert!(matches!(
            extended.errors.as_slice(),
            [SchemaError::Extension(SchemaExtensionError::ExtensionOfUndefinedType { .. })],
        ));
        assert!(extended.schema.get_type("Missing").is_none());
    }

    #[test]
    fn extension_with_wrong_kind() {
        let base = base_schema();
        let extended = extend_schema(
            &base,
            &extension("extend interface User { a: Int }"),
            &BuildOptions::default(),
        );
        assert!(matches!(
            extended.errors.as_slice(),
            [SchemaError::Extension(SchemaExtensionError::InvalidExtensionKind {
                base_kind: TypeKind::Object,
                extension_kind: TypeKind::Interface,
                ..
            })],
        ));
    }

    #[test]
    fn unsupported_extension_kinds_are_warnings() {
        let base = base_schema();
        let extended = extend_schema(
            &base,
            &extension("extend enum Color { BLUE }"),
            &BuildOptions::default(),
        );
        assert_eq!(extended.errors.len(), 1);
        assert_eq!(extended.errors[0].to_gql_error().severity, Severity::Warn);
        assert!(!extended.has_errors());
        let color = extended.schema.get_type("Color").unwrap().as_enum().unwrap();
        assert_eq!(color.values().len(), 1);
    }
}

mod revalidation {
    use super::*;

    #[test]
    fn problems_in_the_base_are_not_reported_again() {
        let assembly = assemble(&[(
            "/schema/base.graphql",
            "type Query { a: Int }\ninterface Node { id: ID }\ntype User implements Node { name: String }",
        )]);
        assert!(matches!(assembly.errors.as_slice(), [SchemaError::Conformance(_)]));

        let extended = extend_schema(
            &assembly.schema,
            &extension("extend type Query { b: Int }"),
            &BuildOptions::default(),
        );
        assert!(extended.errors.is_empty(), "{:?}", extended.errors);
    }

    #[test]
    fn missing_query_root_is_not_reported_again() {
        let assembly = assemble(&[("/schema/base.graphql", "type User { id: ID }")]);
        assert_eq!(assembly.errors.len(), 1, "{:?}", assembly.errors);

        let extended = extend_schema(
            &assembly.schema,
            &extension("extend type User { name: String }"),
            &BuildOptions::default(),
        );
        assert!(extended.errors.is_empty(), "{:?}", extended.errors);
    }

    #[test]
    fn implementers_of_an_extended_interface_are_rechecked() {
        let assembly = assemble(&[(
            "/schema/base.graphql",
            "type Query { a: Int }\ninterface Node { id: ID }\ntype User implements Node { id: ID }",
        )]);
        assert!(assembly.errors.is_empty(), "{:?}", assembly.errors);

        let extended = extend_schema(
            &assembly.schema,
            &extension("extend interface Node { name: String }"),
            &BuildOptions::default(),
        );
        assert!(
            matches!(extended.errors.as_slice(), [SchemaError::Conformance(_)]),
            "{:?}",
            extended.errors,
        );
        assert!(extended.errors[0].to_string().contains("User"));
    }
}
