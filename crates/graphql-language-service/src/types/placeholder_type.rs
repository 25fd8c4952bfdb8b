use crate::loc;
use crate::types::TypeKind;

/// Stands in for a type that was referenced but never defined.
///
/// Its kind is chosen from the position of the first reference (an
/// `implements` entry yields an interface placeholder, a union member or
/// output field an object placeholder, anything else a scalar placeholder)
/// so that the surrounding schema still makes sense to editor features.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderType {
    pub(crate) kind: TypeKind,
    pub(crate) name: String,
    pub(crate) ref_location: loc::SourceLocation,
}
impl PlaceholderType {
    /// One of [`TypeKind::Scalar`], [`TypeKind::Object`] or
    /// [`TypeKind::Interface`].
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}
