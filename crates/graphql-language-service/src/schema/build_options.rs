/// Knobs for a [`SchemaAssembler`](crate::schema::SchemaAssembler) pass.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildOptions {
    /// Skip [`validate_schema`](crate::schema::validate_schema) after
    /// assembly.
    pub assume_valid: bool,

    /// Treat a run of `#` comment lines directly above a definition as its
    /// description when it has no string description (legacy SDL).
    pub comment_descriptions: bool,
}
