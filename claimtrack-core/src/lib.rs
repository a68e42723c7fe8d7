//! The **claimtrack core** is a typed client library for tracking R&D
//! tax-relief claims and the projects linked to them.
//!
//! It speaks JSON-over-HTTP to a claims backend and keeps a mock
//! authentication session (submitter or reviewer) persisted on the client.
//! The backend owns every entity; this library holds disposable copies with
//! no cache-coherence guarantee beyond "last fetch wins".
//!
//! ## Repository structure
//!
//! The library consists of two crates:
//!
//! * **Providers**: modular building blocks: the domain model, form
//!   validation, the HTTP client seam, the REST gateway, the persisted
//!   session, the status workflow, and display formatting. Each can be used
//!   on its own.
//! * **Core**: a service layer orchestrating the providers behind simple
//!   developer APIs.
//!
//! ## Getting started
//!
//! See **/demos** in the repository for runnable walkthroughs. To use the
//! provided services, initialize the core:
//!
//! ```ignore rust
//! /// `None` initializes the core with the default configuration
//! let core = ClaimtrackCore::new(None, Arc::new(ReqwestClient::default())).unwrap();
//! ```
//!
//! Then start using the services, e.g.:
//! ```ignore rust
//! let claims = core.claim_service.list_claims(None).await?;
//! ```

use std::error::Error;
use std::sync::Arc;

use claimtrack_providers::gateway::imp::rest::RestGateway;
use claimtrack_providers::gateway::{ClaimsGateway, ProjectsGateway};
use claimtrack_providers::http_client::imp::reqwest_client::ReqwestClient;
use claimtrack_providers::http_client::HttpClient;
use claimtrack_providers::session::imp::{
    file::FileSessionStore, in_memory::InMemorySessionStore,
};
use claimtrack_providers::session::{Session, SessionStore};
use url::Url;

use config::CoreConfig;
use model::SessionStorageKind;
use service::claim_service::ClaimService;
use service::project_service::ProjectService;
use service::session_service::SessionService;

pub mod config;
pub mod model;
pub mod service;

pub struct ClaimtrackCore {
    pub claim_service: ClaimService,
    pub project_service: ProjectService,
    pub session_service: SessionService,
}

impl Default for ClaimtrackCore {
    fn default() -> Self {
        Self::new(None, Arc::new(ReqwestClient::new(reqwest::Client::new()))).unwrap()
    }
}

impl ClaimtrackCore {
    pub fn new(
        config: Option<CoreConfig>,
        client: Arc<dyn HttpClient>,
    ) -> Result<Self, Box<dyn Error>> {
        let config = config.unwrap_or_default();

        // initialize the REST gateway
        let base_url: Url = config.gateway_config.base_url.parse()?;
        let gateway = Arc::new(RestGateway::new(base_url, client));

        // initialize the session store
        let store: Arc<dyn SessionStore> = match config.session_config.storage {
            SessionStorageKind::InMemory => Arc::new(InMemorySessionStore::default()),
            SessionStorageKind::File => match config.session_config.directory {
                Some(directory) => Arc::new(FileSessionStore::new(directory)),
                None => Arc::new(FileSessionStore::in_user_data_dir()),
            },
        };
        let session = Arc::new(Session::restore(store));

        let claim_service = ClaimService::new(gateway.clone() as Arc<dyn ClaimsGateway>);
        let project_service = ProjectService::new(gateway as Arc<dyn ProjectsGateway>);
        let session_service = SessionService::new(session);

        Ok(Self {
            claim_service,
            project_service,
            session_service,
        })
    }
}
