//! Company profile entity model and DTOs.

use hirelink_core::records::CompanyProfileRecord;
use hirelink_core::types::{ProfileId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `company_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompanyProfile {
    pub id: ProfileId,
    pub user_id: UserId,
    pub company_name: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a company profile when the user picks the poster role.
#[derive(Debug, Deserialize)]
pub struct CreateCompanyProfile {
    pub user_id: UserId,
    pub company_name: Option<String>,
    pub contact_email: Option<String>,
}

/// DTO for updating company details. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCompanyProfile {
    pub company_name: Option<String>,
    pub contact_email: Option<String>,
}

impl From<CompanyProfile> for CompanyProfileRecord {
    fn from(row: CompanyProfile) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            company_name: row.company_name,
            contact_email: row.contact_email,
        }
    }
}
