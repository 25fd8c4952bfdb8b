use crate::error::SchemaError;
use crate::schema::SchemaAssembler;
use crate::schema::SchemaAssembly;

/// Assembles a schema from `(path, sdl)` pairs.
pub(super) fn assemble(files: &[(&str, &str)]) -> SchemaAssembly {
    files
        .iter()
        .fold(SchemaAssembler::new(), |assembler, (path, sdl)| {
            assembler.load_str(*path, *sdl)
        })
        .assemble()
}

pub(super) fn messages(errors: &[SchemaError]) -> Vec<String> {
    errors.iter().map(|err| err.to_string()).collect()
}
