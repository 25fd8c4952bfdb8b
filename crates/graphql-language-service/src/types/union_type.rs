use crate::loc;
use crate::schema::Schema;
use crate::types::NamedType;

#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The member types, in declaration order (extension members last).
    pub fn members<'schema>(&self, schema: &'schema Schema) -> Vec<&'schema NamedType> {
        self.members
            .iter()
            .filter_map(|name| schema.get_type(name))
            .collect()
    }

    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
