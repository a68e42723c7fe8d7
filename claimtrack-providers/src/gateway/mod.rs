//! Seam between the domain and the backend REST service.
//!
//! Every operation is one independent request/response exchange; there is no
//! batching, retry, or coalescing. Callers that need ordering must sequence
//! the awaits themselves.

pub mod error;
pub mod imp;
pub mod model;

use crate::common_models::{
    claim::{Claim, ClaimId, ClaimStatus, ClaimWithProjects},
    project::{Project, ProjectId, ProjectWithClaims},
};
use error::GatewayError;
use model::{
    CreateClaimRequest, CreateProjectRequest, LinkProjectsRequest, UpdateClaimRequest,
    UpdateProjectRequest,
};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ClaimsGateway: Send + Sync {
    async fn create(&self, request: CreateClaimRequest) -> Result<Claim, GatewayError>;

    async fn list(
        &self,
        status: Option<ClaimStatus>,
    ) -> Result<Vec<ClaimWithProjects>, GatewayError>;

    async fn get(&self, id: &ClaimId) -> Result<ClaimWithProjects, GatewayError>;

    async fn update(
        &self,
        id: &ClaimId,
        request: UpdateClaimRequest,
    ) -> Result<Claim, GatewayError>;

    async fn delete(&self, id: &ClaimId) -> Result<(), GatewayError>;

    async fn link_projects(
        &self,
        id: &ClaimId,
        request: LinkProjectsRequest,
    ) -> Result<(), GatewayError>;

    async fn unlink_project(
        &self,
        id: &ClaimId,
        project_id: &ProjectId,
    ) -> Result<(), GatewayError>;
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait ProjectsGateway: Send + Sync {
    async fn create(&self, request: CreateProjectRequest) -> Result<Project, GatewayError>;

    async fn list(&self) -> Result<Vec<Project>, GatewayError>;

    async fn get(&self, id: &ProjectId) -> Result<ProjectWithClaims, GatewayError>;

    async fn update(
        &self,
        id: &ProjectId,
        request: UpdateProjectRequest,
    ) -> Result<Project, GatewayError>;

    async fn delete(&self, id: &ProjectId) -> Result<(), GatewayError>;
}
