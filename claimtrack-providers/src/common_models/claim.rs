use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use time::{Date, OffsetDateTime};

use super::iso_date;
use crate::common_models::{
    macros::{impl_display, impl_from, impl_from_str, impl_into},
    project::Project,
    user::UserId,
};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ClaimId(String);
impl_display!(ClaimId);
impl_from!(ClaimId; String);
impl_from_str!(ClaimId);
impl_into!(ClaimId; String);

impl ClaimId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Review lifecycle of a claim. The only progression the client offers is
/// `Draft` -> `Submitted` -> `Approved`; see [`crate::workflow`] for the
/// role gating.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum ClaimStatus {
    Draft,
    Submitted,
    Approved,
}

/// Accounting period a claim covers, as `YYYY-MM-DD` calendar dates on the
/// wire. A period is only meaningful when `start_date` strictly precedes
/// `end_date`; [`ClaimPeriod::new`] and the validation layer both enforce it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimPeriod {
    #[serde(with = "iso_date")]
    pub start_date: Date,
    #[serde(with = "iso_date")]
    pub end_date: Date,
}

impl ClaimPeriod {
    /// `None` when the dates are out of order or equal.
    pub fn new(start_date: Date, end_date: Date) -> Option<Self> {
        if start_date < end_date {
            Some(Self {
                start_date,
                end_date,
            })
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub claim_id: ClaimId,
    pub company_name: String,
    pub claim_period: ClaimPeriod,
    /// Minor currency units (pence); never fractional.
    pub amount: i64,
    pub status: ClaimStatus,
    pub user_id: Option<UserId>,
    pub submitted_by: Option<UserId>,
    pub reviewed_by: Option<UserId>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub reviewed_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimWithProjects {
    #[serde(flatten)]
    pub claim: Claim,

    // Relations
    pub projects: Vec<Project>,
}
