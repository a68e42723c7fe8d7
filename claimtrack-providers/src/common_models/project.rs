use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::common_models::{
    claim::Claim,
    macros::{impl_display, impl_from, impl_from_str, impl_into},
    user::UserId,
};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ProjectId(String);
impl_display!(ProjectId);
impl_from!(ProjectId; String);
impl_from_str!(ProjectId);
impl_into!(ProjectId; String);

impl ProjectId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub project_id: ProjectId,
    pub name: String,
    pub description: String,
    pub user_id: Option<UserId>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectWithClaims {
    #[serde(flatten)]
    pub project: Project,

    // Relations
    pub claims: Vec<Claim>,
}
