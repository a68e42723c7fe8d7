pub mod claim_service;
pub mod error;
pub mod project_service;
pub mod session_service;
