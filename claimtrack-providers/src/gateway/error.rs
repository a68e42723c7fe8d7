use thiserror::Error;

use crate::http_client;
use crate::http_client::StatusCode;

/// Message shown when a failure carries nothing presentable of its own.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Closed union of everything a gateway operation can fail with.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Non-2xx response; `message` is the structured `{"error": ...}` body
    /// field when the backend sent a non-empty one.
    #[error("backend rejected the request with status {status}")]
    Backend {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("transport failure: {0}")]
    Transport(#[source] anyhow::Error),
    #[error("malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    /// Failure of no recognizable shape; its payload is not presentable.
    #[error("{0}")]
    Unknown(String),
}

impl From<http_client::Error> for GatewayError {
    fn from(error: http_client::Error) -> Self {
        Self::Transport(anyhow::Error::new(error))
    }
}

impl GatewayError {
    /// Normalizes any failure to one display string: the backend's embedded
    /// message when present and non-empty, else the failure's own message,
    /// else `fallback`.
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            Self::Backend {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::Backend { status, .. } => format!("Request failed with status {status}"),
            Self::Transport(error) => error.to_string(),
            Self::MalformedResponse(error) => error.to_string(),
            Self::Unknown(_) => fallback.to_string(),
        }
    }
}
