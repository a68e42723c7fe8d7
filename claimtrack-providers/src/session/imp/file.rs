use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::session::{SessionStore, SessionStoreError};

/// Durable store keeping each record as `<key>.json` inside one directory.
pub struct FileSessionStore {
    directory: PathBuf,
}

impl FileSessionStore {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// Store rooted in the platform data directory (`~/.local/share` and
    /// friends), falling back to the working directory when none exists.
    pub fn in_user_data_dir() -> Self {
        let directory = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("claimtrack");

        Self::new(directory)
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        match fs::read_to_string(self.record_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(SessionStoreError::Load(error.to_string())),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.directory).map_err(|e| SessionStoreError::Save(e.to_string()))?;

        fs::write(self.record_path(key), value).map_err(|e| SessionStoreError::Save(e.to_string()))
    }

    fn clear(&self, key: &str) -> Result<(), SessionStoreError> {
        match fs::remove_file(self.record_path(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(SessionStoreError::Clear(error.to_string())),
        }
    }
}
