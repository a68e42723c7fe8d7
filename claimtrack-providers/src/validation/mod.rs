//! Pre-submission form validation.
//!
//! Each form shape gets one pure checker. Checkers inspect every field before
//! reporting, so a caller can render all field errors in a single pass; a
//! field that breaks several rules reports only the first rule checked.

use std::collections::BTreeMap;

use thiserror::Error;
use time::Date;

use crate::common_models::{claim::ClaimPeriod, project::ProjectId, ISO_DATE_FORMAT};
use crate::gateway::model::{CreateClaimRequest, CreateProjectRequest};

pub const COMPANY_NAME_MAX_LEN: usize = 200;
pub const PROJECT_NAME_MAX_LEN: usize = 200;
pub const PROJECT_DESCRIPTION_MAX_LEN: usize = 1000;

/// Field-path -> message map produced by a failed validation. Paths follow
/// the wire field names (`companyName`, `claimPeriod.endDate`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed for {} field(s)", .0.len())]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn field(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, path: &str, message: &str) {
        // First rule checked wins.
        self.0
            .entry(path.to_string())
            .or_insert_with(|| message.to_string());
    }

    fn prefixed(self, prefix: &str) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|(path, message)| (format!("{prefix}.{path}"), message))
                .collect(),
        )
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Raw text of the claim-period form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimPeriodForm {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateClaimForm {
    pub company_name: String,
    pub claim_period: ClaimPeriodForm,
    /// Raw text so that non-numeric and fractional input stays reportable.
    pub amount: String,
    pub project_ids: Vec<ProjectId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateProjectForm {
    pub name: String,
    pub description: String,
}

fn check_date(
    errors: &mut ValidationErrors,
    path: &str,
    label: &str,
    value: &str,
) -> Option<Date> {
    if value.is_empty() {
        errors.insert(path, &format!("{label} is required"));
        return None;
    }

    match Date::parse(value, ISO_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.insert(path, &format!("{label} must be in YYYY-MM-DD format"));
            None
        }
    }
}

/// Validates a claim period; the order violation is reported on the end-date
/// field, and only once both dates individually parse.
pub fn validate_claim_period(form: &ClaimPeriodForm) -> Result<ClaimPeriod, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let start = check_date(&mut errors, "startDate", "Start date", &form.start_date);
    let end = check_date(&mut errors, "endDate", "End date", &form.end_date);

    let period = match (start, end) {
        (Some(start_date), Some(end_date)) => match ClaimPeriod::new(start_date, end_date) {
            Some(period) => Some(period),
            None => {
                errors.insert("endDate", "Start date must be before end date");
                None
            }
        },
        _ => None,
    };

    match period {
        Some(period) if errors.is_empty() => Ok(period),
        _ => Err(errors),
    }
}

fn check_length(
    errors: &mut ValidationErrors,
    path: &str,
    label: &str,
    value: &str,
    max: usize,
) {
    if value.is_empty() {
        errors.insert(path, &format!("{label} is required"));
    } else if value.chars().count() > max {
        errors.insert(path, &format!("{label} must be at most {max} characters"));
    }
}

fn check_amount(errors: &mut ValidationErrors, value: &str) -> Option<i64> {
    if let Ok(amount) = value.trim().parse::<i64>() {
        if amount > 0 {
            return Some(amount);
        }
        errors.insert("amount", "Amount must be positive");
    } else if value.trim().parse::<f64>().is_ok() {
        errors.insert("amount", "Amount must be an integer (pence)");
    } else {
        errors.insert("amount", "Amount must be a number");
    }
    None
}

pub fn validate_create_claim(
    form: &CreateClaimForm,
) -> Result<CreateClaimRequest, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    check_length(
        &mut errors,
        "companyName",
        "Company name",
        &form.company_name,
        COMPANY_NAME_MAX_LEN,
    );

    let claim_period = match validate_claim_period(&form.claim_period) {
        Ok(period) => Some(period),
        Err(period_errors) => {
            let prefixed = period_errors.prefixed("claimPeriod");
            for (path, message) in prefixed.iter() {
                errors.insert(path, message);
            }
            None
        }
    };

    let amount = check_amount(&mut errors, &form.amount);

    match (claim_period, amount) {
        (Some(claim_period), Some(amount)) if errors.is_empty() => Ok(CreateClaimRequest {
            company_name: form.company_name.clone(),
            claim_period,
            amount,
            project_ids: if form.project_ids.is_empty() {
                None
            } else {
                Some(form.project_ids.clone())
            },
        }),
        _ => Err(errors),
    }
}

pub fn validate_create_project(
    form: &CreateProjectForm,
) -> Result<CreateProjectRequest, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    check_length(
        &mut errors,
        "name",
        "Project name",
        &form.name,
        PROJECT_NAME_MAX_LEN,
    );
    check_length(
        &mut errors,
        "description",
        "Description",
        &form.description,
        PROJECT_DESCRIPTION_MAX_LEN,
    );

    errors.into_result(CreateProjectRequest {
        name: form.name.clone(),
        description: form.description.clone(),
    })
}
