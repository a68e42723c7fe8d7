use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::common_models::{
    claim::{ClaimPeriod, ClaimStatus},
    project::ProjectId,
};

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    pub company_name: String,
    pub claim_period: ClaimPeriod,
    pub amount: i64,
    pub project_ids: Option<Vec<ProjectId>>,
}

/// Partial patch; only the populated fields reach the wire.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClaimRequest {
    pub status: Option<ClaimStatus>,
    pub company_name: Option<String>,
    pub claim_period: Option<ClaimPeriod>,
    pub amount: Option<i64>,
}

impl UpdateClaimRequest {
    pub fn status(status: ClaimStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: String,
}

/// Partial patch; only the populated fields reach the wire.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkProjectsRequest {
    pub project_ids: Vec<ProjectId>,
}
