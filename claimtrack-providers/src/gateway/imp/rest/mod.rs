//! REST implementation of the claims/projects gateway.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::common_models::{
    claim::{Claim, ClaimId, ClaimStatus, ClaimWithProjects},
    project::{Project, ProjectId, ProjectWithClaims},
};
use crate::gateway::{
    error::GatewayError,
    model::{
        CreateClaimRequest, CreateProjectRequest, LinkProjectsRequest, UpdateClaimRequest,
        UpdateProjectRequest,
    },
    ClaimsGateway, ProjectsGateway,
};
use crate::http_client::{HttpClient, RequestBuilder, Response};

use dto::{ClaimResponse, ClaimsResponse, ProjectResponse, ProjectsResponse};

mod dto;
mod mapper;

pub struct RestGateway {
    base_url: Url,
    client: Arc<dyn HttpClient>,
}

impl RestGateway {
    pub fn new(base_url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self { base_url, client }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::Unknown("API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn check_status(response: Response) -> Result<Response, GatewayError> {
    if response.status.is_success() {
        return Ok(response);
    }

    tracing::warn!(status = %response.status, "backend rejected the request");
    Err(GatewayError::Backend {
        status: response.status,
        message: mapper::embedded_error_message(&response.body),
    })
}

async fn send_expecting<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, GatewayError> {
    let response = check_status(builder.send().await?)?;
    Ok(serde_json::from_slice(&response.body)?)
}

async fn send_no_content(builder: RequestBuilder) -> Result<(), GatewayError> {
    check_status(builder.send().await?)?;
    Ok(())
}

#[async_trait]
impl ClaimsGateway for RestGateway {
    async fn create(&self, request: CreateClaimRequest) -> Result<Claim, GatewayError> {
        let url = self.endpoint(&["claims"])?;
        tracing::debug!(%url, "creating claim");

        let response: ClaimResponse<Claim> =
            send_expecting(self.client.post(url.as_str()).json(&request)?).await?;
        Ok(response.claim)
    }

    async fn list(
        &self,
        status: Option<ClaimStatus>,
    ) -> Result<Vec<ClaimWithProjects>, GatewayError> {
        let url = self.endpoint(&["claims"])?;
        tracing::debug!(%url, status = ?status, "listing claims");

        let builder = self
            .client
            .get(url.as_str())
            .query(mapper::status_filter_query(status))?;
        let response: ClaimsResponse = send_expecting(builder).await?;
        Ok(response.claims)
    }

    async fn get(&self, id: &ClaimId) -> Result<ClaimWithProjects, GatewayError> {
        let url = self.endpoint(&["claims", id.as_str()])?;
        tracing::debug!(%url, "fetching claim");

        let response: ClaimResponse<ClaimWithProjects> =
            send_expecting(self.client.get(url.as_str())).await?;
        Ok(response.claim)
    }

    async fn update(
        &self,
        id: &ClaimId,
        request: UpdateClaimRequest,
    ) -> Result<Claim, GatewayError> {
        let url = self.endpoint(&["claims", id.as_str()])?;
        tracing::debug!(%url, "updating claim");

        let response: ClaimResponse<Claim> =
            send_expecting(self.client.patch(url.as_str()).json(&request)?).await?;
        Ok(response.claim)
    }

    async fn delete(&self, id: &ClaimId) -> Result<(), GatewayError> {
        let url = self.endpoint(&["claims", id.as_str()])?;
        tracing::debug!(%url, "deleting claim");

        send_no_content(self.client.delete(url.as_str())).await
    }

    async fn link_projects(
        &self,
        id: &ClaimId,
        request: LinkProjectsRequest,
    ) -> Result<(), GatewayError> {
        let url = self.endpoint(&["claims", id.as_str(), "projects"])?;
        tracing::debug!(%url, count = request.project_ids.len(), "linking projects");

        send_no_content(self.client.post(url.as_str()).json(&request)?).await
    }

    async fn unlink_project(
        &self,
        id: &ClaimId,
        project_id: &ProjectId,
    ) -> Result<(), GatewayError> {
        let url = self.endpoint(&["claims", id.as_str(), "projects", project_id.as_str()])?;
        tracing::debug!(%url, "unlinking project");

        send_no_content(self.client.delete(url.as_str())).await
    }
}

#[async_trait]
impl ProjectsGateway for RestGateway {
    async fn create(&self, request: CreateProjectRequest) -> Result<Project, GatewayError> {
        let url = self.endpoint(&["projects"])?;
        tracing::debug!(%url, "creating project");

        let response: ProjectResponse<Project> =
            send_expecting(self.client.post(url.as_str()).json(&request)?).await?;
        Ok(response.project)
    }

    async fn list(&self) -> Result<Vec<Project>, GatewayError> {
        let url = self.endpoint(&["projects"])?;
        tracing::debug!(%url, "listing projects");

        let response: ProjectsResponse = send_expecting(self.client.get(url.as_str())).await?;
        Ok(response.projects)
    }

    async fn get(&self, id: &ProjectId) -> Result<ProjectWithClaims, GatewayError> {
        let url = self.endpoint(&["projects", id.as_str()])?;
        tracing::debug!(%url, "fetching project");

        let response: ProjectResponse<ProjectWithClaims> =
            send_expecting(self.client.get(url.as_str())).await?;
        Ok(response.project)
    }

    async fn update(
        &self,
        id: &ProjectId,
        request: UpdateProjectRequest,
    ) -> Result<Project, GatewayError> {
        let url = self.endpoint(&["projects", id.as_str()])?;
        tracing::debug!(%url, "updating project");

        let response: ProjectResponse<Project> =
            send_expecting(self.client.patch(url.as_str()).json(&request)?).await?;
        Ok(response.project)
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), GatewayError> {
        let url = self.endpoint(&["projects", id.as_str()])?;
        tracing::debug!(%url, "deleting project");

        send_no_content(self.client.delete(url.as_str())).await
    }
}
