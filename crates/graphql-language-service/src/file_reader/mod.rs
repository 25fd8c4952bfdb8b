use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

const UTF8_BOM: char = '\u{feff}';

/// Reads a source file as UTF-8, dropping a leading byte-order mark so that
/// positions computed from the text line up with what editors report.
pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String, ReadContentError> {
    let path = file_path.as_ref();
    if !path.is_file() {
        return Err(ReadContentError::NotAFile(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|err| ReadContentError::Io {
        file_path: path.to_path_buf(),
        err,
    })?;
    let mut text = String::from_utf8(bytes).map_err(|err| ReadContentError::InvalidUtf8 {
        file_path: path.to_path_buf(),
        err,
    })?;
    if text.starts_with(UTF8_BOM) {
        text.drain(..UTF8_BOM.len_utf8());
    }
    Ok(text)
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("`{}` is not valid UTF-8: {err}", file_path.display())]
    InvalidUtf8 {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read `{}`: {err}", file_path.display())]
    Io {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("`{}` is not a file", .0.display())]
    NotAFile(PathBuf),
}
impl ReadContentError {
    pub fn file_path(&self) -> &Path {
        match self {
            Self::InvalidUtf8 { file_path, .. }
            | Self::Io { file_path, .. }
            | Self::NotAFile(file_path) => file_path,
        }
    }
}

#[cfg(test)]
mod tests;
