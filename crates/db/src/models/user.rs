//! User entity model and DTOs.

use hirelink_core::error::CoreError;
use hirelink_core::onboarding::MissingStep;
use hirelink_core::records::UserRecord;
use hirelink_core::types::{Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: UserId,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub onboarding_completed: bool,
    pub last_onboarding_step: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating the user row on first sign-in.
///
/// `id` is the auth provider's user id.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub id: UserId,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// Fails with `UnexpectedSchema` when `last_onboarding_step` holds a tag
/// outside the known step vocabulary.
impl TryFrom<User> for UserRecord {
    type Error = CoreError;

    fn try_from(row: User) -> Result<Self, Self::Error> {
        let last_onboarding_step = row
            .last_onboarding_step
            .as_deref()
            .map(MissingStep::from_str_db)
            .transpose()
            .map_err(|e| {
                CoreError::UnexpectedSchema(format!("users.last_onboarding_step: {e}"))
            })?;

        Ok(Self {
            id: row.id,
            email: row.email,
            phone_number: row.phone_number,
            city: row.city,
            onboarding_completed: row.onboarding_completed,
            last_onboarding_step,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
