use std::collections::HashSet;
use std::sync::Mutex;

use super::*;
use crate::util::storage::MemoryStorage;

fn make_user() -> User {
    User { id: "1".to_owned(), name: "Administrador".to_owned(), email: "admin@test.com".to_owned() }
}

fn make_session() -> Session {
    Session { token: "pcp_token".to_owned(), user: make_user() }
}

fn store_with(entries: &[(&str, &str)]) -> (Arc<MemoryStorage>, SessionStore) {
    let backend = Arc::new(MemoryStorage::new());
    for (key, value) in entries {
        backend.set(key, value).unwrap();
    }
    let store = SessionStore::new(backend.clone());
    (backend, store)
}

/// Memory storage that rejects writes to selected keys.
struct RejectingStorage {
    inner: MemoryStorage,
    reject: Mutex<HashSet<String>>,
}

impl RejectingStorage {
    fn rejecting(key: &str) -> Self {
        Self { inner: MemoryStorage::new(), reject: Mutex::new(HashSet::from([key.to_owned()])) }
    }
}

impl KeyValueStore for RejectingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject.lock().unwrap().contains(key) {
            return Err(StorageError::Write { key: key.to_owned(), message: "quota exceeded".to_owned() });
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

// =============================================================
// read
// =============================================================

#[test]
fn read_empty_storage_is_none() {
    let (backend, store) = store_with(&[]);
    assert_eq!(store.read(), None);
    assert!(backend.is_empty());
}

#[test]
fn read_valid_pair_returns_session() {
    let (_, store) = store_with(&[
        ("auth_token", "pcp_token"),
        ("user_data", r#"{"id":"1","name":"Administrador","email":"admin@test.com"}"#),
    ]);
    assert_eq!(store.read(), Some(make_session()));
}

#[test]
fn read_token_without_user_clears_storage() {
    let (backend, store) = store_with(&[("auth_token", "pcp_token")]);
    assert_eq!(store.read(), None);
    assert!(backend.is_empty());
}

#[test]
fn read_user_without_token_clears_storage() {
    let (backend, store) =
        store_with(&[("user_data", r#"{"id":"1","name":"Administrador","email":"admin@test.com"}"#)]);
    assert_eq!(store.read(), None);
    assert!(backend.is_empty());
}

#[test]
fn read_malformed_user_json_clears_storage() {
    let (backend, store) = store_with(&[("auth_token", "pcp_token"), ("user_data", "{not json")]);
    assert_eq!(store.read(), None);
    assert!(backend.is_empty());
}

#[test]
fn read_user_with_wrong_shape_clears_storage() {
    let (backend, store) = store_with(&[("auth_token", "pcp_token"), ("user_data", r#"["admin"]"#)]);
    assert_eq!(store.read(), None);
    assert!(backend.is_empty());
}

#[test]
fn read_empty_token_counts_as_missing() {
    let (backend, store) = store_with(&[
        ("auth_token", ""),
        ("user_data", r#"{"id":"1","name":"Administrador","email":"admin@test.com"}"#),
    ]);
    assert_eq!(store.read(), None);
    assert!(backend.is_empty());
}

#[test]
fn read_ignores_unrelated_keys() {
    let (backend, store) = store_with(&[("theme", "dark")]);
    assert_eq!(store.read(), None);
    assert_eq!(backend.get("theme").as_deref(), Some("dark"));
}

// =============================================================
// write / clear
// =============================================================

#[test]
fn write_then_read_yields_identical_session() {
    let (_, store) = store_with(&[]);
    store.write(&make_session()).unwrap();
    assert_eq!(store.read(), Some(make_session()));
}

#[test]
fn write_stores_user_as_json() {
    let (backend, store) = store_with(&[]);
    store.write(&make_session()).unwrap();
    let raw = backend.get("user_data").unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["email"], "admin@test.com");
    assert_eq!(backend.get("auth_token").as_deref(), Some("pcp_token"));
}

#[test]
fn write_replaces_previous_session() {
    let (_, store) = store_with(&[]);
    store.write(&make_session()).unwrap();
    let next = Session { token: "pcp_other".to_owned(), user: make_user() };
    store.write(&next).unwrap();
    assert_eq!(store.read(), Some(next));
}

#[test]
fn write_rolls_back_when_token_write_fails() {
    let backend = Arc::new(RejectingStorage::rejecting("auth_token"));
    let store = SessionStore::new(backend.clone());
    let err = store.write(&make_session()).unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == "auth_token"));
    assert_eq!(backend.get("user_data"), None);
    assert_eq!(backend.get("auth_token"), None);
}

#[test]
fn write_fails_cleanly_when_user_write_fails() {
    let backend = Arc::new(RejectingStorage::rejecting("user_data"));
    let store = SessionStore::new(backend.clone());
    assert!(store.write(&make_session()).is_err());
    assert!(backend.inner.is_empty());
}

#[test]
fn clear_removes_both_entries() {
    let (backend, store) = store_with(&[]);
    store.write(&make_session()).unwrap();
    store.clear();
    assert_eq!(backend.get("auth_token"), None);
    assert_eq!(backend.get("user_data"), None);
}
