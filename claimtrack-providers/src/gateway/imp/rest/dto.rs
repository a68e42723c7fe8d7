use serde::Deserialize;

use crate::common_models::{claim::ClaimWithProjects, project::Project};

/// `{ "claim": ... }` envelope around a single claim payload.
#[derive(Deserialize)]
pub(super) struct ClaimResponse<T> {
    pub claim: T,
}

#[derive(Deserialize)]
pub(super) struct ClaimsResponse {
    pub claims: Vec<ClaimWithProjects>,
}

/// `{ "project": ... }` envelope around a single project payload.
#[derive(Deserialize)]
pub(super) struct ProjectResponse<T> {
    pub project: T,
}

#[derive(Deserialize)]
pub(super) struct ProjectsResponse {
    pub projects: Vec<Project>,
}

/// Body shape the backend uses for rejections.
#[derive(Deserialize)]
pub(super) struct ErrorBody {
    pub error: Option<String>,
}
