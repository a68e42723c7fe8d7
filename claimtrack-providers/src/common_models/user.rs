use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::common_models::macros::{impl_display, impl_from, impl_from_str, impl_into};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct UserId(String);
impl_display!(UserId);
impl_from!(UserId; String);
impl_from_str!(UserId);
impl_into!(UserId; String);

impl UserId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    Submitter,
    Reviewer,
}

/// Client-local mock identity; nothing about it is authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub role: UserRole,
}
