use std::{
    env, fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use shared::domain::RecordId;

use super::*;

fn temp_record_file(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("record_store_test_{suffix}.json"));
    fs::write(&path, contents).expect("write record file");
    path
}

#[tokio::test]
async fn loads_records_in_file_order() {
    let path = temp_record_file(
        r#"[{"id":3,"name":"Gamma"},{"id":1,"name":"Alpha"},{"id":2,"name":"Beta"}]"#,
    );

    let store = RecordStore::new(&path);
    let records = store.load().await.expect("load");

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, RecordId(3));
    assert_eq!(records[0].name, "Gamma");
    assert_eq!(records[2].id, RecordId(2));

    fs::remove_file(path).expect("cleanup");
}

#[tokio::test]
async fn reloads_the_file_on_every_call() {
    let path = temp_record_file(r#"[{"id":1,"name":"Item 1"}]"#);
    let store = RecordStore::new(&path);

    assert_eq!(store.load().await.expect("first load").len(), 1);

    fs::write(
        &path,
        r#"[{"id":1,"name":"Item 1"},{"id":2,"name":"Item 2"}]"#,
    )
    .expect("rewrite record file");
    assert_eq!(store.load().await.expect("second load").len(), 2);

    fs::remove_file(path).expect("cleanup");
}

#[tokio::test]
async fn missing_file_is_an_error_not_an_empty_list() {
    let store = RecordStore::new("/nonexistent/records.json");
    let err = store.load().await.expect_err("must fail");
    assert!(err.to_string().contains("failed to read record file"));
}

#[tokio::test]
async fn malformed_file_reports_a_parse_error() {
    let path = temp_record_file(r#"{"not":"an array"}"#);
    let store = RecordStore::new(&path);

    let err = store.load().await.expect_err("must fail");
    assert!(err.to_string().contains("failed to parse record file"));

    fs::remove_file(path).expect("cleanup");
}
