use crate::ast;
use crate::loc;
use crate::types::NamedType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::InterfaceType;
use crate::types::PlaceholderType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::TypeKind;
use crate::types::TypeMap;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::sync::Arc;

fn type_data(name: &str, interfaces: &[&str]) -> ObjectOrInterfaceTypeData {
    ObjectOrInterfaceTypeData {
        def_location: loc::FilePosition::new("schema.graphql", 1, 1).into(),
        description: None,
        fields: IndexMap::new(),
        interfaces: interfaces.iter().map(|i| i.to_string()).collect(),
        name: name.to_string(),
    }
}

/// `Node`, `Entity implements Node`, `Player implements Entity & Node`,
/// `Team`, `union Member = Player`, a `String` scalar and a `Missing`
/// placeholder.
fn test_types() -> TypeMap {
    let types = vec![
        NamedType::Interface(InterfaceType(type_data("Node", &[]))),
        NamedType::Interface(InterfaceType(type_data("Entity", &["Node"]))),
        NamedType::Object(ObjectType(type_data("Player", &["Entity", "Node"]))),
        NamedType::Object(ObjectType(type_data("Team", &[]))),
        NamedType::Union(UnionType {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: None,
            members: vec!["Player".to_string()],
            name: "Member".to_string(),
        }),
        NamedType::Scalar(ScalarType::builtin("String", "")),
        NamedType::Placeholder(PlaceholderType {
            kind: TypeKind::Object,
            name: "Missing".to_string(),
            ref_location: loc::SourceLocation::GraphQLBuiltIn,
        }),
    ];
    types
        .into_iter()
        .map(|t| (t.name().to_string(), Arc::new(t)))
        .collect()
}

fn parse_annotation(source: &str) -> TypeAnnotation {
    let doc = graphql_parser::schema::parse_schema::<String>(
        &format!("type T {{ f: {source} }}"),
    ).unwrap().into_static();
    let Some(ast::schema::Definition::TypeDefinition(
        ast::schema::TypeDefinition::Object(obj),
    )) = doc.definitions.first() else {
        panic!("expected an object type definition");
    };
    TypeAnnotation::from_ast_type(&obj.fields[0].field_type)
}

mod from_ast {
    use super::*;

    #[test]
    fn nested_non_null_list() {
        let annot = parse_annotation("[String!]!");
        assert!(!annot.nullable());
        let inner = annot.as_list_annotation().unwrap().inner_type_annotation();
        assert!(!inner.nullable());
        assert_eq!(annot.innermost_type_name(), "String");
        assert_eq!(annot.to_string(), "[String!]!");
    }

    #[test]
    fn plain_named_type_is_nullable() {
        let annot = parse_annotation("Player");
        assert!(annot.nullable());
        assert!(annot.as_list_annotation().is_none());
        assert_eq!(annot, TypeAnnotation::named("Player", true));
    }

    #[test]
    fn as_nullable_drops_only_the_outer_marker() {
        let annot = parse_annotation("[Int!]!");
        assert_eq!(annot.as_nullable().to_string(), "[Int!]");
    }
}

mod equivalence {
    use super::*;

    #[test]
    fn same_structure_is_equivalent() {
        assert!(parse_annotation("[Int!]").is_equivalent_to(&parse_annotation("[Int!]")));
    }

    #[test]
    fn different_nullability_is_not_equivalent() {
        let nullable = TypeAnnotation::named("String", true);
        let non_null = TypeAnnotation::named("String", false);
        assert!(!nullable.is_equivalent_to(&non_null));
        assert!(!non_null.is_equivalent_to(&nullable));
    }

    #[test]
    fn list_and_named_are_not_equivalent() {
        let list = TypeAnnotation::list(TypeAnnotation::named("Int", true), true);
        assert!(!list.is_equivalent_to(&TypeAnnotation::named("Int", true)));
    }
}

mod subtyping {
    use super::*;

    #[test]
    fn non_null_is_subtype_of_nullable_but_not_reverse() {
        let types = test_types();
        let nullable = TypeAnnotation::named("String", true);
        let non_null = TypeAnnotation::named("String", false);
        assert!(non_null.is_subtype_of(&types, &nullable));
        assert!(!nullable.is_subtype_of(&types, &non_null));
    }

    #[test]
    fn object_is_subtype_of_implemented_interface() {
        let types = test_types();
        let player = TypeAnnotation::named("Player", false);
        assert!(player.is_subtype_of(&types, &TypeAnnotation::named("Entity", true)));
        assert!(!TypeAnnotation::named("Team", true)
            .is_subtype_of(&types, &TypeAnnotation::named("Entity", true)));
    }

    #[test]
    fn interface_is_subtype_of_its_own_interfaces() {
        let types = test_types();
        assert!(TypeAnnotation::named("Entity", true)
            .is_subtype_of(&types, &TypeAnnotation::named("Node", true)));
    }

    #[test]
    fn object_is_subtype_of_containing_union() {
        let types = test_types();
        assert!(TypeAnnotation::named("Player", true)
            .is_subtype_of(&types, &TypeAnnotation::named("Member", true)));
        assert!(!TypeAnnotation::named("Team", true)
            .is_subtype_of(&types, &TypeAnnotation::named("Member", true)));
    }

    #[test]
    fn lists_compare_their_items() {
        let types = test_types();
        let players = parse_annotation("[Player!]!");
        assert!(players.is_subtype_of(&types, &parse_annotation("[Entity]")));
        assert!(!parse_annotation("[Player]")
            .is_subtype_of(&types, &parse_annotation("[Entity!]")));
        assert!(!players.is_subtype_of(&types, &parse_annotation("Entity")));
    }

    #[test]
    fn placeholders_are_compatible_with_anything() {
        let types = test_types();
        let missing = TypeAnnotation::named("Missing", true);
        assert!(missing.is_subtype_of(&types, &TypeAnnotation::named("Node", true)));
        assert!(TypeAnnotation::named("Team", true).is_subtype_of(&types, &missing));
        assert!(parse_annotation("[Team]").is_subtype_of(&types, &missing));
    }
}
