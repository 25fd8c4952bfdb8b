use crate::file_reader::ReadContentError;
use crate::file_reader::read_content;

#[test]
fn reads_utf8_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.graphql");
    std::fs::write(&path, "type Query { a: Int }").unwrap();

    assert_eq!(read_content(&path).unwrap(), "type Query { a: Int }");
}

#[test]
fn strips_leading_byte_order_mark() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.graphql");
    std::fs::write(&path, "\u{feff}scalar Date").unwrap();

    assert_eq!(read_content(&path).unwrap(), "scalar Date");
}

#[test]
fn directory_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();

    let err = read_content(dir.path()).unwrap_err();
    assert!(matches!(err, ReadContentError::NotAFile(_)));
    assert_eq!(err.file_path(), dir.path());
}

#[test]
fn invalid_utf8_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.graphql");
    std::fs::write(&path, [0x66, 0x6f, 0xff]).unwrap();

    let err = read_content(&path).unwrap_err();
    assert!(matches!(err, ReadContentError::InvalidUtf8 { .. }));
    assert_eq!(err.file_path(), path.as_path());
}
