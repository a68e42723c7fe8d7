use std::sync::Arc;

use maplit::hashmap;
use tempfile::TempDir;

use super::imp::{file::FileSessionStore, in_memory::InMemorySessionStore};
use super::*;
use crate::common_models::user::{User, UserRole};

fn alice() -> User {
    User {
        user_id: "user-1".into(),
        name: "Alice".to_string(),
        role: UserRole::Submitter,
    }
}

fn bob() -> User {
    User {
        user_id: "user-2".into(),
        name: "Bob".to_string(),
        role: UserRole::Reviewer,
    }
}

#[test]
fn test_restore_with_empty_store_yields_no_user() {
    let session = Session::restore(Arc::new(InMemorySessionStore::default()));

    assert_eq!(session.current_user(), None);
    assert!(!session.is_submitter());
    assert!(!session.is_reviewer());
}

#[test]
fn test_restore_recovers_persisted_user() {
    let raw = serde_json::to_string(&alice()).unwrap();
    let store = InMemorySessionStore::new(hashmap! {
        CURRENT_USER_KEY.to_string() => raw,
    });

    let session = Session::restore(Arc::new(store));

    assert_eq!(session.current_user(), Some(alice()));
    assert!(session.is_submitter());
    assert!(!session.is_reviewer());
}

#[test]
fn test_restore_treats_corrupt_record_as_absent() {
    let store = InMemorySessionStore::new(hashmap! {
        CURRENT_USER_KEY.to_string() => "{not valid json".to_string(),
    });

    let session = Session::restore(Arc::new(store));

    assert_eq!(session.current_user(), None);
}

#[test]
fn test_restore_treats_empty_record_as_absent() {
    let store = InMemorySessionStore::new(hashmap! {
        CURRENT_USER_KEY.to_string() => String::new(),
    });

    let session = Session::restore(Arc::new(store));

    assert_eq!(session.current_user(), None);
}

#[test]
fn test_restore_treats_unknown_role_as_absent() {
    let store = InMemorySessionStore::new(hashmap! {
        CURRENT_USER_KEY.to_string() =>
            r#"{"userId":"user-3","name":"Mallory","role":"auditor"}"#.to_string(),
    });

    let session = Session::restore(Arc::new(store));

    assert_eq!(session.current_user(), None);
    assert!(!session.is_submitter());
    assert!(!session.is_reviewer());
}

#[test]
fn test_stored_record_round_trips_identically() {
    let store = Arc::new(InMemorySessionStore::default());

    let session = Session::restore(store.clone());
    session.set_current_user(Some(alice())).unwrap();

    let raw = store.load(CURRENT_USER_KEY).unwrap().unwrap();
    let reparsed: User = serde_json::from_str(&raw).unwrap();
    assert_eq!(reparsed, alice());
    assert_eq!(serde_json::to_string(&reparsed).unwrap(), raw);

    let restored = Session::restore(store);
    assert_eq!(restored.current_user(), Some(alice()));
}

#[test]
fn test_logout_clears_stored_record() {
    let store = Arc::new(InMemorySessionStore::default());
    let session = Session::restore(store.clone());

    session.set_current_user(Some(alice())).unwrap();
    session.set_current_user(None).unwrap();

    assert_eq!(session.current_user(), None);
    assert_eq!(store.load(CURRENT_USER_KEY).unwrap(), None);
}

#[test]
fn test_switching_users_flips_both_role_flags() {
    let session = Session::restore(Arc::new(InMemorySessionStore::default()));

    session.set_current_user(Some(alice())).unwrap();
    assert!(session.is_submitter());
    assert!(!session.is_reviewer());

    session.set_current_user(Some(bob())).unwrap();
    assert!(!session.is_submitter());
    assert!(session.is_reviewer());
}

#[test]
fn test_role_flags_derive_from_the_cell_not_from_storage() {
    let store = Arc::new(InMemorySessionStore::default());
    let session = Session::restore(store.clone());
    session.set_current_user(Some(bob())).unwrap();

    // Mutating the store behind the session's back changes nothing until a
    // fresh restore.
    store
        .save(
            CURRENT_USER_KEY,
            &serde_json::to_string(&alice()).unwrap(),
        )
        .unwrap();

    assert!(session.is_reviewer());
    assert_eq!(session.role(), Some(UserRole::Reviewer));
}

#[test]
fn test_file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FileSessionStore::new(dir.path().to_path_buf()));

    let session = Session::restore(store.clone());
    session.set_current_user(Some(bob())).unwrap();
    drop(session);

    let restored = Session::restore(store);
    assert_eq!(restored.current_user(), Some(bob()));
    assert!(restored.is_reviewer());
}

#[test]
fn test_file_store_missing_file_is_absent() {
    let dir = TempDir::new().unwrap();
    let store = FileSessionStore::new(dir.path().to_path_buf());

    assert_eq!(store.load(CURRENT_USER_KEY).unwrap(), None);
    store.clear(CURRENT_USER_KEY).unwrap();
}

#[test]
fn test_file_store_corrupt_file_restores_to_no_user() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("currentUser.json"), b"\x00\xffgarbage").unwrap();

    let session = Session::restore(Arc::new(FileSessionStore::new(dir.path().to_path_buf())));

    assert_eq!(session.current_user(), None);
}
