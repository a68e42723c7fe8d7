use std::env;
use std::path::PathBuf;

use crate::model::SessionStorageKind;

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV_VAR: &str = "CLAIMTRACK_API_URL";

const DEFAULT_API_URL: &str = "http://localhost:3001";

pub struct CoreConfig {
    pub gateway_config: GatewayConfig,
    pub session_config: SessionConfig,
}

pub struct GatewayConfig {
    pub base_url: String,
}

pub struct SessionConfig {
    pub storage: SessionStorageKind,
    /// Directory for the file-backed store; `None` means the platform data
    /// directory.
    pub directory: Option<PathBuf>,
}

impl GatewayConfig {
    /// Reads `CLAIMTRACK_API_URL`, falling back to `http://localhost:3001`.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(API_URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            gateway_config: GatewayConfig::default(),
            session_config: SessionConfig::default(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage: SessionStorageKind::File,
            directory: None,
        }
    }
}
