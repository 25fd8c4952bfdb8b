use crate::error::GQLError;
use crate::error::Severity;
use crate::error::ToGQLError;
use crate::loc;
use crate::types::OperationKind;
use thiserror::Error;

/// Problems found while assembling definitions into a schema.
///
/// None of these stop assembly: the offending definition (or reference) is
/// skipped or replaced by a placeholder and the rest of the schema is still
/// built.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("There can be only one directive named \"@{directive_name}\".")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        first: loc::SourceLocation,
        duplicate: loc::FilePosition,
    },

    #[error("Enum value \"{type_name}.{value_name}\" can only be defined once.")]
    DuplicateEnumValueDefinition {
        type_name: String,
        value_name: String,
        location: loc::FilePosition,
    },

    #[error("Field \"{type_name}.{field_name}\" can only be defined once.")]
    DuplicateFieldDefinition {
        type_name: String,
        field_name: String,
        location: loc::FilePosition,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        type_name: String,
        interface_name: String,
        location: loc::FilePosition,
    },

    #[error("Argument \"{owner}({parameter_name}:)\" can only be defined once.")]
    DuplicateParameterDefinition {
        owner: String,
        parameter_name: String,
        location: loc::FilePosition,
    },

    #[error("Must provide only one schema definition.")]
    DuplicateSchemaDefinition {
        location: loc::FilePosition,
    },

    #[error("There can be only one type named \"{type_name}\".")]
    DuplicateTypeDefinition {
        type_name: String,
        first: loc::SourceLocation,
        duplicate: loc::FilePosition,
    },

    #[error("Union type \"{type_name}\" can only include type \"{member_name}\" once.")]
    DuplicatedUnionMember {
        type_name: String,
        member_name: String,
        location: loc::FilePosition,
    },

    #[error("Names must not start with `__`: \"{name}\" is reserved for introspection.")]
    InvalidDunderPrefixedName {
        name: String,
        location: loc::FilePosition,
    },

    #[error(
        "{operation} root type must be an object type, but `{type_name}` is \
        not an object type."
    )]
    InvalidRootOperationType {
        operation: OperationKind,
        type_name: String,
        location: loc::FilePosition,
    },

    #[error(
        "Interface types may not declare that they implement themselves: The \
        `{interface_name}` interface does just that"
    )]
    InvalidSelfImplementingInterface {
        interface_name: String,
        location: loc::FilePosition,
    },

    #[error("Query root type must be provided.")]
    MissingQueryRootType,

    #[error("No schema files matched the project configuration.")]
    NoSchemaFilesMatched,

    #[error(
        "The {operation1} and {operation2} root operations are defined with \
        the same type `{type_name}`, but all root operation types must be \
        different."
    )]
    NonUniqueOperationTypes {
        type_name: String,
        operation1: OperationKind,
        operation2: OperationKind,
        location: loc::FilePosition,
    },

    #[error("Directive \"@{directive_name}\" is built in and cannot be redefined.")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::FilePosition,
    },

    #[error("Type \"{type_name}\" not found.")]
    UndefinedTypeReference {
        type_name: String,
        referrer: String,
        location: loc::FilePosition,
    },

    #[error("{message}")]
    UnreadableFile {
        location: loc::FilePosition,
        message: String,
    },
}
impl SchemaBuildError {
    pub fn location(&self) -> Option<&loc::FilePosition> {
        match self {
            Self::DuplicateDirectiveDefinition { duplicate, .. }
            | Self::DuplicateTypeDefinition { duplicate, .. }
                => Some(duplicate),

            Self::DuplicateEnumValueDefinition { location, .. }
            | Self::DuplicateFieldDefinition { location, .. }
            | Self::DuplicateInterfaceImplementsDeclaration { location, .. }
            | Self::DuplicateParameterDefinition { location, .. }
            | Self::DuplicateSchemaDefinition { location }
            | Self::DuplicatedUnionMember { location, .. }
            | Self::InvalidDunderPrefixedName { location, .. }
            | Self::InvalidRootOperationType { location, .. }
            | Self::InvalidSelfImplementingInterface { location, .. }
            | Self::NonUniqueOperationTypes { location, .. }
            | Self::RedefinitionOfBuiltinDirective { location, .. }
            | Self::UndefinedTypeReference { location, .. }
            | Self::UnreadableFile { location, .. }
                => Some(location),

            Self::MissingQueryRootType
            | Self::NoSchemaFilesMatched
                => None,
        }
    }
}
impl ToGQLError for SchemaBuildError {
    fn to_gql_error(&self) -> GQLError {
        let mut locations: Vec<&loc::FilePosition> = vec![];
        match self {
            // The rejected definition first, then the one that was kept.
            Self::DuplicateDirectiveDefinition { first, duplicate, .. }
            | Self::DuplicateTypeDefinition { first, duplicate, .. } => {
                locations.push(duplicate);
                locations.extend(first.file_position());
            },
            _ => locations.extend(self.location()),
        }
        GQLError::new(self.to_string(), Severity::Error, locations)
    }
}
