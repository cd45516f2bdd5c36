//! Read seam between the onboarding resolver and the backend.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::records::{CompanyProfileRecord, SeekerProfileRecord, UserRecord};
use crate::types::{ProfileId, UserId};

/// Backend reads needed to resolve a user's onboarding status.
///
/// Implementations return `Ok(None)` when a row simply does not exist and
/// reserve `Err` for connectivity, query, or decoding failures. Every method
/// is a single attempt; the resolver never retries.
#[async_trait]
pub trait OnboardingStore: Send + Sync {
    /// Fetch the `users` row for `user_id`.
    async fn find_user(&self, user_id: UserId) -> Result<Option<UserRecord>, CoreError>;

    /// Fetch the seeker profile owned by `user_id`, if any.
    async fn find_seeker_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<SeekerProfileRecord>, CoreError>;

    /// Fetch the company profile owned by `user_id`, if any.
    async fn find_company_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<CompanyProfileRecord>, CoreError>;

    /// Number of skills attached to a seeker profile.
    async fn count_seeker_skills(&self, profile_id: ProfileId) -> Result<i64, CoreError>;

    /// Number of categories attached to a seeker profile.
    async fn count_seeker_categories(&self, profile_id: ProfileId) -> Result<i64, CoreError>;
}

#[async_trait]
impl<S: OnboardingStore + ?Sized> OnboardingStore for std::sync::Arc<S> {
    async fn find_user(&self, user_id: UserId) -> Result<Option<UserRecord>, CoreError> {
        (**self).find_user(user_id).await
    }

    async fn find_seeker_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<SeekerProfileRecord>, CoreError> {
        (**self).find_seeker_profile(user_id).await
    }

    async fn find_company_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<CompanyProfileRecord>, CoreError> {
        (**self).find_company_profile(user_id).await
    }

    async fn count_seeker_skills(&self, profile_id: ProfileId) -> Result<i64, CoreError> {
        (**self).count_seeker_skills(profile_id).await
    }

    async fn count_seeker_categories(&self, profile_id: ProfileId) -> Result<i64, CoreError> {
        (**self).count_seeker_categories(profile_id).await
    }
}
