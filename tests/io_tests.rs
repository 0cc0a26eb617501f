use std::io::Write;

use websheet::io::json_source::{self, JsonFileSource};
use websheet::io::source::{SheetSource, SourceError};

fn temp_json(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_rows_array_of_objects() {
    let file = temp_json(r#"[{"name":"Alice","dept":"Engineering"},{"name":"Bob"}]"#);
    let rows = json_source::load_rows(file.path()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Alice");
    assert_eq!(rows[0]["dept"], "Engineering");
    assert!(!rows[1].contains_key("dept"));
}

#[test]
fn test_load_rows_stringifies_scalars() {
    let file = temp_json(r#"[{"age":30,"active":true,"note":null}]"#);
    let rows = json_source::load_rows(file.path()).unwrap();

    assert_eq!(rows[0]["age"], "30");
    assert_eq!(rows[0]["active"], "true");
    assert_eq!(rows[0]["note"], "");
}

#[test]
fn test_load_rows_rejects_non_array_root() {
    let file = temp_json(r#"{"name":"Alice"}"#);
    let err = json_source::load_rows(file.path()).unwrap_err();
    assert!(matches!(err, SourceError::NotAnArray));
}

#[test]
fn test_load_rows_rejects_non_object_elements() {
    let file = temp_json(r#"[{"name":"Alice"}, 42]"#);
    let err = json_source::load_rows(file.path()).unwrap_err();
    assert!(matches!(err, SourceError::NotArrayOfObjects));
}

#[test]
fn test_load_rows_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = json_source::load_rows(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SourceError::Io(_)));
}

#[test]
fn test_load_rows_invalid_json_is_parse_error() {
    let file = temp_json("not json");
    let err = json_source::load_rows(file.path()).unwrap_err();
    assert!(matches!(err, SourceError::Parse(_)));
}

#[tokio::test]
async fn test_fetch_through_source_trait() {
    let file = temp_json(r#"[{"name":"Alice"}]"#);
    let source = JsonFileSource::new();

    let rows = source
        .fetch(file.path().to_str().unwrap(), "", &[])
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Alice");
}
