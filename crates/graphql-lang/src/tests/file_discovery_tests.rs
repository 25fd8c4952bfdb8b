use crate::file_discovery::find_files;
use std::path::Path;

fn is_graphql(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "graphql")
}

#[test]
fn walks_directories_and_filters_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("nested")).unwrap();
    std::fs::write(dir.path().join("a.graphql"), "type A { a: Int }").unwrap();
    std::fs::write(dir.path().join("nested/b.graphql"), "type B { b: Int }").unwrap();
    std::fs::write(dir.path().join("readme.md"), "# docs").unwrap();

    let discovered = find_files(&[dir.path().to_path_buf()], is_graphql).unwrap();
    let names =
        discovered.files
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().to_string())
            .collect::<Vec<_>>();
    assert_eq!(names, vec!["a.graphql", "b.graphql"]);
    assert_eq!(discovered.num_skipped, 1);
}

#[test]
fn single_explicit_file_is_kept_regardless_of_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.txt");
    std::fs::write(&path, "type A { a: Int }").unwrap();

    let discovered = find_files(&[path.clone()], is_graphql).unwrap();
    assert_eq!(discovered.files, vec![std::fs::canonicalize(&path).unwrap()]);
    assert_eq!(discovered.num_skipped, 0);
}

#[test]
fn missing_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(find_files(&[dir.path().join("missing")], is_graphql).is_err());
}
