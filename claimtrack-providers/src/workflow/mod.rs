//! Role-gated claim status workflow.
//!
//! Gating here is workflow guidance for clients only; the backend's PATCH
//! endpoint accepts any status, so a direct API call bypasses these checks
//! entirely. Authoritative enforcement has to live server-side.

use crate::common_models::{claim::ClaimStatus, user::UserRole};

/// Whether an actor with `role` (`None` = not signed in) may move a claim
/// from `from` to `to`.
///
/// Submitters advance `Draft` to `Submitted`, reviewers advance `Submitted`
/// to `Approved`, and anyone may reset a claim back to `Draft`.
pub fn may_transition(role: Option<UserRole>, from: ClaimStatus, to: ClaimStatus) -> bool {
    match (from, to) {
        (from, ClaimStatus::Draft) => from != ClaimStatus::Draft,
        (ClaimStatus::Draft, ClaimStatus::Submitted) => role == Some(UserRole::Submitter),
        (ClaimStatus::Submitted, ClaimStatus::Approved) => role == Some(UserRole::Reviewer),
        _ => false,
    }
}

/// Every status the actor may move a claim in state `from` to.
pub fn permitted_transitions(role: Option<UserRole>, from: ClaimStatus) -> Vec<ClaimStatus> {
    [ClaimStatus::Draft, ClaimStatus::Submitted, ClaimStatus::Approved]
        .into_iter()
        .filter(|to| may_transition(role, from, *to))
        .collect()
}
