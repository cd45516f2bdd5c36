//! Repository for the `company_profiles` table.

use hirelink_core::types::{ProfileId, UserId};
use sqlx::PgPool;

use crate::models::company_profile::{
    CompanyProfile, CreateCompanyProfile, UpdateCompanyProfile,
};

/// Column list for `company_profiles` queries.
const COLUMNS: &str = "id, user_id, company_name, contact_email, created_at, updated_at";

/// Provides CRUD operations for company profiles.
pub struct CompanyProfileRepo;

impl CompanyProfileRepo {
    /// Create the company profile for a user.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCompanyProfile,
    ) -> Result<CompanyProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO company_profiles (user_id, company_name, contact_email)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CompanyProfile>(&query)
            .bind(input.user_id)
            .bind(&input.company_name)
            .bind(&input.contact_email)
            .fetch_one(pool)
            .await
    }

    /// Find the company profile owned by a user.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<CompanyProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM company_profiles WHERE user_id = $1");
        sqlx::query_as::<_, CompanyProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update company details. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: ProfileId,
        input: &UpdateCompanyProfile,
    ) -> Result<Option<CompanyProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE company_profiles SET
                company_name = COALESCE($2, company_name),
                contact_email = COALESCE($3, contact_email)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CompanyProfile>(&query)
            .bind(id)
            .bind(&input.company_name)
            .bind(&input.contact_email)
            .fetch_optional(pool)
            .await
    }
}
