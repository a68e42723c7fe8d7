use std::collections::HashMap;
use std::sync::Mutex;

use crate::session::{SessionStore, SessionStoreError};

#[derive(Default)]
pub struct InMemorySessionStore {
    storage: Mutex<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new(storage: HashMap<String, String>) -> Self {
        Self {
            storage: Mutex::new(storage),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        let storage = self
            .storage
            .lock()
            .map_err(|e| SessionStoreError::Load(e.to_string()))?;

        Ok(storage.get(key).map(|value| value.to_owned()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let mut storage = self
            .storage
            .lock()
            .map_err(|e| SessionStoreError::Save(e.to_string()))?;

        storage.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), SessionStoreError> {
        let mut storage = self
            .storage
            .lock()
            .map_err(|e| SessionStoreError::Clear(e.to_string()))?;

        storage.remove(key);
        Ok(())
    }
}
