use std::fs;
use tempfile::tempdir;
use tenant_admin::storage::{ConfigStore, JsonFileStore};

#[test]
fn test_missing_file_opens_empty() {
    let dir = tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("absent.json")).unwrap();
    assert_eq!(store.get("username"), None);
}

#[test]
fn test_set_persists_across_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("tenant-admin.json");

    let store = JsonFileStore::open(&path).unwrap();
    store.set("username", "admin").unwrap();
    store.set("session_token", "tok-1").unwrap();
    assert!(path.exists());

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("username").as_deref(), Some("admin"));
    assert_eq!(reopened.get("session_token").as_deref(), Some("tok-1"));
}

#[test]
fn test_file_is_a_flat_json_object() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    let store = JsonFileStore::open(&path).unwrap();
    store.set("pod", "usw3").unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({"pod": "usw3"}));
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(JsonFileStore::open(&path).is_err());
}

#[test]
fn test_empty_file_opens_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "").unwrap();
    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get("pod"), None);
}
