use crate::common_models::claim::ClaimStatus;

use super::dto::ErrorBody;

/// Extracts the backend's structured error message from a rejection body.
/// Anything unparseable, absent, or empty counts as "no embedded message" so
/// the caller falls through to the transport-level description.
pub(super) fn embedded_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.is_empty())
}

pub(super) fn status_filter_query(status: Option<ClaimStatus>) -> Vec<(&'static str, String)> {
    match status {
        Some(status) => vec![("status", status.to_string())],
        None => Vec::new(),
    }
}
