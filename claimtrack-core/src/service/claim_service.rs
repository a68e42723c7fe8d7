//! Claim operations: validated creation, listing, linking, and the
//! role-gated status workflow.

use std::sync::Arc;

use claimtrack_providers::common_models::claim::{
    Claim, ClaimId, ClaimStatus, ClaimWithProjects,
};
use claimtrack_providers::common_models::project::ProjectId;
use claimtrack_providers::common_models::user::UserRole;
use claimtrack_providers::gateway::model::{LinkProjectsRequest, UpdateClaimRequest};
use claimtrack_providers::gateway::ClaimsGateway;
use claimtrack_providers::validation::{validate_create_claim, CreateClaimForm};
use claimtrack_providers::workflow::may_transition;

use super::error::ClaimServiceError;

/// Fixed caption for a list request that failed with nothing presentable.
pub const LOAD_CLAIMS_FALLBACK: &str = "Failed to load claims";

pub struct ClaimService {
    gateway: Arc<dyn ClaimsGateway>,
}

impl ClaimService {
    pub fn new(gateway: Arc<dyn ClaimsGateway>) -> Self {
        Self { gateway }
    }

    /// Validates the form and dispatches the create request. A form that
    /// fails validation never reaches the network.
    pub async fn create_claim(&self, form: &CreateClaimForm) -> Result<Claim, ClaimServiceError> {
        let request = validate_create_claim(form).map_err(ClaimServiceError::Validation)?;

        Ok(self.gateway.create(request).await?)
    }

    pub async fn list_claims(
        &self,
        status: Option<ClaimStatus>,
    ) -> Result<Vec<ClaimWithProjects>, ClaimServiceError> {
        Ok(self.gateway.list(status).await?)
    }

    pub async fn get_claim(&self, id: &ClaimId) -> Result<ClaimWithProjects, ClaimServiceError> {
        Ok(self.gateway.get(id).await?)
    }

    /// Ungated partial patch, exactly as the backend exposes it.
    pub async fn update_claim(
        &self,
        id: &ClaimId,
        request: UpdateClaimRequest,
    ) -> Result<Claim, ClaimServiceError> {
        Ok(self.gateway.update(id, request).await?)
    }

    /// Status patch gated by the workflow policy for the acting role. The
    /// gate is client-side guidance only; it keeps this client from issuing
    /// a patch the workflow would not offer, nothing more.
    pub async fn transition_status(
        &self,
        id: &ClaimId,
        from: ClaimStatus,
        to: ClaimStatus,
        role: Option<UserRole>,
    ) -> Result<Claim, ClaimServiceError> {
        if !may_transition(role, from, to) {
            return Err(ClaimServiceError::TransitionNotPermitted { from, to });
        }

        Ok(self
            .gateway
            .update(id, UpdateClaimRequest::status(to))
            .await?)
    }

    pub async fn delete_claim(&self, id: &ClaimId) -> Result<(), ClaimServiceError> {
        Ok(self.gateway.delete(id).await?)
    }

    pub async fn link_projects(
        &self,
        id: &ClaimId,
        project_ids: Vec<ProjectId>,
    ) -> Result<(), ClaimServiceError> {
        let request = LinkProjectsRequest { project_ids };

        Ok(self.gateway.link_projects(id, request).await?)
    }

    pub async fn unlink_project(
        &self,
        id: &ClaimId,
        project_id: &ProjectId,
    ) -> Result<(), ClaimServiceError> {
        Ok(self.gateway.unlink_project(id, project_id).await?)
    }
}

#[cfg(test)]
mod test {
    use claimtrack_providers::common_models::claim::ClaimPeriod;
    use claimtrack_providers::gateway::error::GatewayError;
    use claimtrack_providers::gateway::MockClaimsGateway;
    use claimtrack_providers::validation::ClaimPeriodForm;
    use mockall::predicate::eq;
    use time::macros::{date, datetime};

    use super::*;

    fn draft_claim() -> Claim {
        Claim {
            claim_id: "claim-1".into(),
            company_name: "Acme Ltd".to_string(),
            claim_period: ClaimPeriod::new(date!(2024 - 01 - 01), date!(2024 - 12 - 31))
                .unwrap(),
            amount: 50000,
            status: ClaimStatus::Draft,
            user_id: None,
            submitted_by: None,
            reviewed_by: None,
            submitted_at: None,
            reviewed_at: None,
            created_at: datetime!(2024-01-15 10:30:00 UTC),
            updated_at: datetime!(2024-01-15 10:30:00 UTC),
        }
    }

    fn valid_form() -> CreateClaimForm {
        CreateClaimForm {
            company_name: "Acme Ltd".to_string(),
            claim_period: ClaimPeriodForm {
                start_date: "2024-01-01".to_string(),
                end_date: "2024-12-31".to_string(),
            },
            amount: "50000".to_string(),
            project_ids: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_claim_dispatches_validated_request() {
        let mut gateway = MockClaimsGateway::default();
        gateway
            .expect_create()
            .withf(|request| {
                request.company_name == "Acme Ltd"
                    && request.amount == 50000
                    && request.project_ids.is_none()
            })
            .once()
            .returning(|_| Ok(draft_claim()));

        let service = ClaimService::new(Arc::new(gateway));

        let claim = service.create_claim(&valid_form()).await.unwrap();
        assert_eq!(claim.status, ClaimStatus::Draft);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_the_network() {
        let mut gateway = MockClaimsGateway::default();
        gateway.expect_create().never();

        let service = ClaimService::new(Arc::new(gateway));

        let mut form = valid_form();
        form.claim_period.end_date = "2024-01-01".to_string();

        let error = service.create_claim(&form).await.unwrap_err();
        let errors = error.field_errors().unwrap();
        assert_eq!(
            errors.field("claimPeriod.endDate"),
            Some("Start date must be before end date")
        );
        assert_eq!(
            error.user_message(LOAD_CLAIMS_FALLBACK),
            "Please fix the validation errors"
        );
    }

    #[tokio::test]
    async fn test_permitted_transition_patches_status() {
        let mut gateway = MockClaimsGateway::default();
        gateway
            .expect_update()
            .with(
                eq(ClaimId::from("claim-1")),
                eq(UpdateClaimRequest::status(ClaimStatus::Submitted)),
            )
            .once()
            .returning(|_, _| {
                Ok(Claim {
                    status: ClaimStatus::Submitted,
                    ..draft_claim()
                })
            });

        let service = ClaimService::new(Arc::new(gateway));

        let claim = service
            .transition_status(
                &"claim-1".into(),
                ClaimStatus::Draft,
                ClaimStatus::Submitted,
                Some(UserRole::Submitter),
            )
            .await
            .unwrap();

        assert_eq!(claim.status, ClaimStatus::Submitted);
    }

    #[tokio::test]
    async fn test_forbidden_transition_is_refused_locally() {
        let mut gateway = MockClaimsGateway::default();
        gateway.expect_update().never();

        let service = ClaimService::new(Arc::new(gateway));

        let error = service
            .transition_status(
                &"claim-1".into(),
                ClaimStatus::Draft,
                ClaimStatus::Submitted,
                Some(UserRole::Reviewer),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            ClaimServiceError::TransitionNotPermitted {
                from: ClaimStatus::Draft,
                to: ClaimStatus::Submitted,
            }
        ));
    }

    #[tokio::test]
    async fn test_unknown_list_failure_uses_fixed_fallback() {
        let mut gateway = MockClaimsGateway::default();
        gateway
            .expect_list()
            .once()
            .returning(|_| Err(GatewayError::Unknown("socket hang up".to_string())));

        let service = ClaimService::new(Arc::new(gateway));

        let error = service.list_claims(None).await.unwrap_err();
        assert_eq!(
            error.user_message(LOAD_CLAIMS_FALLBACK),
            "Failed to load claims"
        );
    }

    #[tokio::test]
    async fn test_backend_list_failure_surfaces_embedded_message() {
        let mut gateway = MockClaimsGateway::default();
        gateway
            .expect_list()
            .with(eq(Some(ClaimStatus::Draft)))
            .once()
            .returning(|_| {
                Err(GatewayError::Backend {
                    status: claimtrack_providers::http_client::StatusCode(400),
                    message: Some("Unknown status filter".to_string()),
                })
            });

        let service = ClaimService::new(Arc::new(gateway));

        let error = service
            .list_claims(Some(ClaimStatus::Draft))
            .await
            .unwrap_err();
        assert_eq!(
            error.user_message(LOAD_CLAIMS_FALLBACK),
            "Unknown status filter"
        );
    }

    #[tokio::test]
    async fn test_link_projects_wraps_identifier_list() {
        let mut gateway = MockClaimsGateway::default();
        gateway
            .expect_link_projects()
            .withf(|id, request| {
                id == &ClaimId::from("claim-1")
                    && request.project_ids == vec![ProjectId::from("proj-1")]
            })
            .once()
            .returning(|_, _| Ok(()));

        let service = ClaimService::new(Arc::new(gateway));

        service
            .link_projects(&"claim-1".into(), vec!["proj-1".into()])
            .await
            .unwrap();
    }
}
