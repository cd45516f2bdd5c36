//! Typed records for the backend rows the onboarding resolver reads.
//!
//! Storage adapters decode their native rows into these structs. A row that
//! cannot be decoded is reported as [`CoreError::UnexpectedSchema`] by the
//! adapter instead of being passed through loosely typed.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::onboarding::MissingStep;
use crate::types::{ProfileId, Timestamp, UserId};

/// A row from the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub onboarding_completed: bool,
    /// Last onboarding screen the client reported, if any.
    pub last_onboarding_step: Option<MissingStep>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserRecord {
    /// Whether the user has picked a city. Blank strings count as unset.
    pub fn has_city(&self) -> bool {
        is_present(self.city.as_deref())
    }
}

/// The columns of a `seeker_profiles` row the resolver needs.
///
/// Skill and category associations live in join tables and are counted
/// separately through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeekerProfileRecord {
    pub id: ProfileId,
    pub user_id: UserId,
    pub experience_level: Option<String>,
}

/// The columns of a `company_profiles` row the resolver needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfileRecord {
    pub id: ProfileId,
    pub user_id: UserId,
    pub company_name: Option<String>,
    pub contact_email: Option<String>,
}

/// `true` when an optional text column holds a non-blank value.
///
/// Whitespace-only values count as unset. This is stricter than a plain
/// non-empty check: a city or company name of `"  "` does not pass a gate.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Parse a user id supplied by a caller (session token subject, route
/// parameter, ...).
pub fn parse_user_id(raw: &str) -> Result<UserId, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "User ID must be a non-empty string".to_string(),
        ));
    }
    UserId::parse_str(trimmed)
        .map_err(|e| CoreError::Validation(format!("Invalid user ID '{trimmed}': {e}")))
}
