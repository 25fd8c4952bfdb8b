use crate::schema::Schema;
use crate::types::NamedType;

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}
impl NamedTypeAnnotation {
    /// The referenced type. Always present in a schema produced by the
    /// assembler (unresolved names become placeholders).
    pub fn named_type<'schema>(&self, schema: &'schema Schema) -> Option<&'schema NamedType> {
        schema.get_type(&self.type_name)
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
