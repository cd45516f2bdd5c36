//! sqlx implementation of [`OnboardingStore`].

use async_trait::async_trait;
use hirelink_core::error::CoreError;
use hirelink_core::onboarding::OnboardingStore;
use hirelink_core::records::{CompanyProfileRecord, SeekerProfileRecord, UserRecord};
use hirelink_core::types::{ProfileId, UserId};
use sqlx::PgPool;

use crate::repositories::{CompanyProfileRepo, SeekerProfileRepo, UserRepo};

/// Reads onboarding state directly from Postgres.
#[derive(Debug, Clone)]
pub struct PgOnboardingStore {
    pool: PgPool,
}

impl PgOnboardingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Classify a sqlx error for the resolver.
///
/// Decode and column errors mean the row shape does not match the record
/// types and become `UnexpectedSchema`; everything else is a backend failure.
pub fn map_db_error(err: sqlx::Error) -> CoreError {
    match err {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::TypeNotFound { .. } => {
            tracing::error!(error = %err, "Row does not match expected schema");
            CoreError::UnexpectedSchema(err.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            CoreError::Backend(other.to_string())
        }
    }
}

#[async_trait]
impl OnboardingStore for PgOnboardingStore {
    async fn find_user(&self, user_id: UserId) -> Result<Option<UserRecord>, CoreError> {
        let row = UserRepo::find_by_id(&self.pool, user_id)
            .await
            .map_err(map_db_error)?;
        row.map(UserRecord::try_from).transpose()
    }

    async fn find_seeker_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<SeekerProfileRecord>, CoreError> {
        let row = SeekerProfileRepo::find_by_user_id(&self.pool, user_id)
            .await
            .map_err(map_db_error)?;
        Ok(row.map(SeekerProfileRecord::from))
    }

    async fn find_company_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<CompanyProfileRecord>, CoreError> {
        let row = CompanyProfileRepo::find_by_user_id(&self.pool, user_id)
            .await
            .map_err(map_db_error)?;
        Ok(row.map(CompanyProfileRecord::from))
    }

    async fn count_seeker_skills(&self, profile_id: ProfileId) -> Result<i64, CoreError> {
        SeekerProfileRepo::count_skills(&self.pool, profile_id)
            .await
            .map_err(map_db_error)
    }

    async fn count_seeker_categories(&self, profile_id: ProfileId) -> Result<i64, CoreError> {
        SeekerProfileRepo::count_categories(&self.pool, profile_id)
            .await
            .map_err(map_db_error)
    }
}
