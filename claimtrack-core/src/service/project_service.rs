//! Project operations: validated creation plus the plain CRUD surface.

use std::sync::Arc;

use claimtrack_providers::common_models::project::{Project, ProjectId, ProjectWithClaims};
use claimtrack_providers::gateway::model::UpdateProjectRequest;
use claimtrack_providers::gateway::ProjectsGateway;
use claimtrack_providers::validation::{validate_create_project, CreateProjectForm};

use super::error::ProjectServiceError;

/// Fixed caption for a list request that failed with nothing presentable.
pub const LOAD_PROJECTS_FALLBACK: &str = "Failed to load projects";

pub struct ProjectService {
    gateway: Arc<dyn ProjectsGateway>,
}

impl ProjectService {
    pub fn new(gateway: Arc<dyn ProjectsGateway>) -> Self {
        Self { gateway }
    }

    /// Validates the form and dispatches the create request. A form that
    /// fails validation never reaches the network.
    pub async fn create_project(
        &self,
        form: &CreateProjectForm,
    ) -> Result<Project, ProjectServiceError> {
        let request = validate_create_project(form).map_err(ProjectServiceError::Validation)?;

        Ok(self.gateway.create(request).await?)
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ProjectServiceError> {
        Ok(self.gateway.list().await?)
    }

    pub async fn get_project(
        &self,
        id: &ProjectId,
    ) -> Result<ProjectWithClaims, ProjectServiceError> {
        Ok(self.gateway.get(id).await?)
    }

    pub async fn update_project(
        &self,
        id: &ProjectId,
        request: UpdateProjectRequest,
    ) -> Result<Project, ProjectServiceError> {
        Ok(self.gateway.update(id, request).await?)
    }

    pub async fn delete_project(&self, id: &ProjectId) -> Result<(), ProjectServiceError> {
        Ok(self.gateway.delete(id).await?)
    }
}
