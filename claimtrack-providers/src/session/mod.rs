//! Current-user session: one mutable cell, persisted across restarts.

pub mod imp;

use std::sync::{Arc, RwLock, RwLockReadGuard};

use thiserror::Error;

use crate::common_models::user::{User, UserRole};

/// Fixed name the serialized user record is stored under.
pub const CURRENT_USER_KEY: &str = "currentUser";

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SessionStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, SessionStoreError>;

    fn save(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;

    fn clear(&self, key: &str) -> Result<(), SessionStoreError>;
}

#[derive(Clone, Error, Debug)]
pub enum SessionStoreError {
    #[error("Load error: `{0}`")]
    Load(String),
    #[error("Save error: `{0}`")]
    Save(String),
    #[error("Clear error: `{0}`")]
    Clear(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Storage(#[from] SessionStoreError),
    #[error("could not serialize user: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The process-wide "current user or none" cell.
///
/// `set_current_user` is the only writer; the role projections are computed
/// from the cell on every read, so switching users flips both in the same
/// assignment. A stored record that is missing, empty, or unparseable
/// restores to "no user" without surfacing an error.
pub struct Session {
    store: Arc<dyn SessionStore>,
    current: RwLock<Option<User>>,
}

impl Session {
    /// Creates the session, restoring the persisted user if one is stored.
    pub fn restore(store: Arc<dyn SessionStore>) -> Self {
        let current = match store.load(CURRENT_USER_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(error) => {
                    tracing::debug!(%error, "discarding unparseable stored user");
                    None
                }
            },
            Ok(_) => None,
            Err(error) => {
                tracing::debug!(%error, "could not read stored user");
                None
            }
        };

        Self {
            store,
            current: RwLock::new(current),
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.read().clone()
    }

    /// Persists (or clears) the stored record, then swaps the cell.
    pub fn set_current_user(&self, user: Option<User>) -> Result<(), SessionError> {
        match &user {
            Some(user) => {
                let raw = serde_json::to_string(user)?;
                self.store.save(CURRENT_USER_KEY, &raw)?;
            }
            None => self.store.clear(CURRENT_USER_KEY)?,
        }

        *self
            .current
            .write()
            .expect("session cell poisoned by a panicking writer") = user;
        Ok(())
    }

    pub fn is_submitter(&self) -> bool {
        self.has_role(UserRole::Submitter)
    }

    pub fn is_reviewer(&self) -> bool {
        self.has_role(UserRole::Reviewer)
    }

    pub fn role(&self) -> Option<UserRole> {
        self.read().as_ref().map(|user| user.role)
    }

    fn has_role(&self, role: UserRole) -> bool {
        self.role() == Some(role)
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<User>> {
        self.current
            .read()
            .expect("session cell poisoned by a panicking writer")
    }
}

#[cfg(test)]
mod test;
