use crate::error::GQLError;
use crate::error::Severity;
use crate::error::ToGQLError;
use crate::loc;
use crate::types::TypeKind;
use thiserror::Error;

/// Problems applying an `extend ...` block. The offending extension (or the
/// offending part of it) is skipped; everything else is still applied.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SchemaExtensionError {
    #[error(
        "Field \"{type_name}.{field_name}\" already exists in the schema. It \
        cannot also be defined in this type extension."
    )]
    DuplicateFieldOnExtension {
        type_name: String,
        field_name: String,
        location: loc::FilePosition,
    },

    #[error(
        "Type \"{type_name}\" already implements \"{interface_name}\". It \
        cannot also be implemented in this type extension."
    )]
    DuplicateInterfaceOnExtension {
        type_name: String,
        interface_name: String,
        location: loc::FilePosition,
    },

    #[error(
        "Union \"{type_name}\" already includes \"{member_name}\". It cannot \
        also be included in this type extension."
    )]
    DuplicateUnionMemberOnExtension {
        type_name: String,
        member_name: String,
        location: loc::FilePosition,
    },

    #[error("Cannot extend type \"{type_name}\" because it is not defined.")]
    ExtensionOfUndefinedType {
        type_name: String,
        location: loc::FilePosition,
    },

    #[error(
        "Cannot extend non-{} type \"{type_name}\": it is defined as {} type.",
        extension_kind.name(),
        base_kind.article_name(),
    )]
    InvalidExtensionKind {
        type_name: String,
        base_kind: TypeKind,
        extension_kind: TypeKind,
        location: loc::FilePosition,
    },

    #[error(
        "Extensions of {} types are not supported; the extension of \
        \"{type_name}\" was ignored.",
        extension_kind.name(),
    )]
    UnsupportedExtensionKind {
        type_name: String,
        extension_kind: TypeKind,
        location: loc::FilePosition,
    },
}
impl SchemaExtensionError {
    pub fn location(&self) -> &loc::FilePosition {
        match self {
            Self::DuplicateFieldOnExtension { location, .. }
            | Self::DuplicateInterfaceOnExtension { location, .. }
            | Self::DuplicateUnionMemberOnExtension { location, .. }
            | Self::ExtensionOfUndefinedType { location, .. }
            | Self::InvalidExtensionKind { location, .. }
            | Self::UnsupportedExtensionKind { location, .. }
                => location,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::UnsupportedExtensionKind { .. } => Severity::Warn,
            _ => Severity::Error,
        }
    }
}
impl ToGQLError for SchemaExtensionError {
    fn to_gql_error(&self) -> GQLError {
        GQLError::new(self.to_string(), self.severity(), [self.location()])
    }
}
