use claimtrack_providers::common_models::claim::ClaimStatus;
use claimtrack_providers::gateway::error::GatewayError;
use claimtrack_providers::validation::ValidationErrors;
use thiserror::Error;

/// Caption shown for a form that failed local validation; the per-field
/// messages live in the wrapped [`ValidationErrors`].
pub const VALIDATION_FAILED_MESSAGE: &str = "Please fix the validation errors";

#[derive(Debug, Error)]
pub enum ClaimServiceError {
    #[error("invalid claim input")]
    Validation(#[source] ValidationErrors),
    #[error("cannot move a {from} claim to {to} as the current user")]
    TransitionNotPermitted { from: ClaimStatus, to: ClaimStatus },
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Debug, Error)]
pub enum ProjectServiceError {
    #[error("invalid project input")]
    Validation(#[source] ValidationErrors),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl ClaimServiceError {
    /// One display string per failed operation; `fallback` captions failures
    /// with no message of their own.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(_) => VALIDATION_FAILED_MESSAGE.to_string(),
            Self::TransitionNotPermitted { .. } => self.to_string(),
            Self::Gateway(error) => error.display_message(fallback),
        }
    }

    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl ProjectServiceError {
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(_) => VALIDATION_FAILED_MESSAGE.to_string(),
            Self::Gateway(error) => error.display_message(fallback),
        }
    }

    pub fn field_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
