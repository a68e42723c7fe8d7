//! Walks a claim through its whole lifecycle against a running backend:
//! create a project and a claim, link them, submit as Alice (submitter) and
//! approve as Bob (reviewer).
//!
//! Point `CLAIMTRACK_API_URL` at the backend (default `http://localhost:3001`).

use std::error::Error;
use std::sync::Arc;

use claimtrack_core::config::{CoreConfig, GatewayConfig, SessionConfig};
use claimtrack_core::model::SessionStorageKind;
use claimtrack_core::service::session_service::SessionService;
use claimtrack_core::ClaimtrackCore;
use claimtrack_providers::common_models::claim::ClaimStatus;
use claimtrack_providers::http_client::imp::reqwest_client::ReqwestClient;
use claimtrack_providers::util::date::format_date_range;
use claimtrack_providers::util::money::format_amount;
use claimtrack_providers::validation::{ClaimPeriodForm, CreateClaimForm, CreateProjectForm};
use futures::join;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = CoreConfig {
        gateway_config: GatewayConfig::from_env(),
        session_config: SessionConfig {
            storage: SessionStorageKind::InMemory,
            directory: None,
        },
    };
    let core = ClaimtrackCore::new(Some(config), Arc::new(ReqwestClient::default()))?;

    //
    // Create a project and a claim; creation validates before dispatching
    //

    let project = core
        .project_service
        .create_project(&CreateProjectForm {
            name: "Autonomous Widget Research".to_string(),
            description: "Feasibility work on self-calibrating widgets".to_string(),
        })
        .await?;
    println!("Created project {}", project.project_id);

    let claim = core
        .claim_service
        .create_claim(&CreateClaimForm {
            company_name: "Acme Ltd".to_string(),
            claim_period: ClaimPeriodForm {
                start_date: "2024-01-01".to_string(),
                end_date: "2024-12-31".to_string(),
            },
            amount: "50000".to_string(),
            project_ids: vec![project.project_id.clone()],
        })
        .await?;
    assert_eq!(claim.status, ClaimStatus::Draft, "new claims start as drafts");
    println!(
        "Created claim {} for {} covering {}",
        claim.claim_id,
        format_amount(claim.amount),
        format_date_range(claim.claim_period.start_date, claim.claim_period.end_date),
    );

    // a rejected form reports every broken field at once and never touches
    // the backend
    let invalid = core
        .claim_service
        .create_claim(&CreateClaimForm {
            company_name: String::new(),
            claim_period: ClaimPeriodForm {
                start_date: "2024-01-01".to_string(),
                end_date: "2024-01-01".to_string(),
            },
            amount: "-5".to_string(),
            project_ids: vec![],
        })
        .await;
    let error = invalid.expect_err("expected the invalid form to be rejected");
    for (field, message) in error.field_errors().expect("validation errors").iter() {
        println!("  {field}: {message}");
    }

    //
    // Fetch both listings concurrently; the requests are independent
    //

    let (claims, projects) = join!(
        core.claim_service.list_claims(None),
        core.project_service.list_projects(),
    );
    println!("{} claim(s), {} project(s)", claims?.len(), projects?.len());

    //
    // Role-gated workflow: Alice submits, Bob approves
    //

    let users = SessionService::mock_users();
    let (alice, bob) = (users[0].clone(), users[1].clone());

    core.session_service.login(alice)?;
    assert!(core.session_service.is_submitter());
    let claim = core
        .claim_service
        .transition_status(
            &claim.claim_id,
            claim.status,
            ClaimStatus::Submitted,
            core.session_service.role(),
        )
        .await?;
    println!("Submitted claim {}", claim.claim_id);

    // a submitter cannot approve; the refusal is local
    let refused = core
        .claim_service
        .transition_status(
            &claim.claim_id,
            claim.status,
            ClaimStatus::Approved,
            core.session_service.role(),
        )
        .await;
    assert!(refused.is_err(), "expected the submitter to be refused");

    core.session_service.login(bob)?;
    assert!(core.session_service.is_reviewer());
    let claim = core
        .claim_service
        .transition_status(
            &claim.claim_id,
            claim.status,
            ClaimStatus::Approved,
            core.session_service.role(),
        )
        .await?;
    println!("Approved claim {}", claim.claim_id);

    //
    // Inspect the claim with its linked projects, then unlink
    //

    let detailed = core.claim_service.get_claim(&claim.claim_id).await?;
    for linked in &detailed.projects {
        println!("  linked: {} - {}", linked.name, linked.description);
    }

    core.claim_service
        .unlink_project(&claim.claim_id, &project.project_id)
        .await?;
    println!("Unlinked project {}", project.project_id);

    Ok(())
}
