//! Seeker profile entity model and DTOs.

use hirelink_core::records::SeekerProfileRecord;
use hirelink_core::types::{ProfileId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `seeker_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeekerProfile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub experience_level: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a seeker profile when the user picks the seeker role.
#[derive(Debug, Deserialize)]
pub struct CreateSeekerProfile {
    pub user_id: UserId,
    pub experience_level: Option<String>,
}

impl From<SeekerProfile> for SeekerProfileRecord {
    fn from(row: SeekerProfile) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            experience_level: row.experience_level,
        }
    }
}
