//! Shows the persisted session cell on its own: restore, switch users,
//! observe the derived role flags, and survive a corrupt stored record.

use std::sync::Arc;

use claimtrack_providers::common_models::user::{User, UserRole};
use claimtrack_providers::session::imp::in_memory::InMemorySessionStore;
use claimtrack_providers::session::{Session, SessionStore, CURRENT_USER_KEY};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let store = Arc::new(InMemorySessionStore::default());

    // a fresh store restores to "no user"
    let session = Session::restore(store.clone());
    assert_eq!(session.current_user(), None);
    assert!(!session.is_submitter() && !session.is_reviewer());
    println!("fresh store: no current user");

    // logging in persists the record and flips exactly one role flag
    let alice = User {
        user_id: "user-1".into(),
        name: "Alice".to_string(),
        role: UserRole::Submitter,
    };
    session.set_current_user(Some(alice)).unwrap();
    assert!(session.is_submitter() && !session.is_reviewer());
    println!("logged in as Alice: submitter");

    // a second session over the same store sees the persisted user
    let restored = Session::restore(store.clone());
    assert_eq!(
        restored.current_user().map(|user| user.name),
        Some("Alice".to_string())
    );
    println!("restored session: still Alice");

    // switching users swaps both flags in one assignment
    let bob = User {
        user_id: "user-2".into(),
        name: "Bob".to_string(),
        role: UserRole::Reviewer,
    };
    session.set_current_user(Some(bob)).unwrap();
    assert!(session.is_reviewer() && !session.is_submitter());
    println!("switched to Bob: reviewer");

    // a corrupt stored record restores silently to "no user"
    store.save(CURRENT_USER_KEY, "{definitely not json").unwrap();
    let recovered = Session::restore(store.clone());
    assert_eq!(recovered.current_user(), None);
    println!("corrupt record: recovered to no user");

    // logging out removes the persisted record
    session.set_current_user(None).unwrap();
    assert_eq!(store.load(CURRENT_USER_KEY).unwrap(), None);
    println!("logged out: stored record cleared");
}
