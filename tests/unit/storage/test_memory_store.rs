use tenant_admin::storage::{ConfigStore, MemoryStore};

#[test]
fn test_missing_key_is_none() {
    assert_eq!(MemoryStore::new().get("username"), None);
}

#[test]
fn test_set_overwrites() {
    let store = MemoryStore::with_values([("session_token", "old")]);
    store.set("session_token", "new").unwrap();
    assert_eq!(store.get("session_token").as_deref(), Some("new"));
}
