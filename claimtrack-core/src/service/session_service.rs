//! Mock-authentication session: who the current user is and which role
//! flags derive from them.

use std::sync::Arc;

use claimtrack_providers::common_models::user::{User, UserRole};
use claimtrack_providers::session::{Session, SessionError};

pub struct SessionService {
    session: Arc<Session>,
}

impl SessionService {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// The built-in identities a client can switch between. Nothing is
    /// authenticated; these exist to exercise the role-gated workflow.
    pub fn mock_users() -> Vec<User> {
        vec![
            User {
                user_id: "user-1".into(),
                name: "Alice".to_string(),
                role: UserRole::Submitter,
            },
            User {
                user_id: "user-2".into(),
                name: "Bob".to_string(),
                role: UserRole::Reviewer,
            },
        ]
    }

    pub fn login(&self, user: User) -> Result<(), SessionError> {
        self.session.set_current_user(Some(user))
    }

    pub fn logout(&self) -> Result<(), SessionError> {
        self.session.set_current_user(None)
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.current_user()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session.role()
    }

    pub fn is_submitter(&self) -> bool {
        self.session.is_submitter()
    }

    pub fn is_reviewer(&self) -> bool {
        self.session.is_reviewer()
    }
}
