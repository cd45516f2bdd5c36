//! PostgREST implementation of [`OnboardingStore`].

use async_trait::async_trait;
use hirelink_core::error::CoreError;
use hirelink_core::onboarding::OnboardingStore;
use hirelink_core::records::{CompanyProfileRecord, SeekerProfileRecord, UserRecord};
use hirelink_core::types::{ProfileId, UserId};

use crate::client::PostgrestClient;

const USER_COLUMNS: &str = "id,email,phone_number,city,onboarding_completed,\
                            last_onboarding_step,created_at,updated_at";
const SEEKER_COLUMNS: &str = "id,user_id,experience_level";
const COMPANY_COLUMNS: &str = "id,user_id,company_name,contact_email";

/// Reads onboarding state through the Supabase REST API.
#[derive(Debug, Clone)]
pub struct RestOnboardingStore {
    client: PostgrestClient,
}

impl RestOnboardingStore {
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OnboardingStore for RestOnboardingStore {
    async fn find_user(&self, user_id: UserId) -> Result<Option<UserRecord>, CoreError> {
        Ok(self
            .client
            .select_one("users", "id", &user_id.to_string(), USER_COLUMNS)
            .await?)
    }

    async fn find_seeker_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<SeekerProfileRecord>, CoreError> {
        Ok(self
            .client
            .select_one("seeker_profiles", "user_id", &user_id.to_string(), SEEKER_COLUMNS)
            .await?)
    }

    async fn find_company_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<CompanyProfileRecord>, CoreError> {
        Ok(self
            .client
            .select_one("company_profiles", "user_id", &user_id.to_string(), COMPANY_COLUMNS)
            .await?)
    }

    async fn count_seeker_skills(&self, profile_id: ProfileId) -> Result<i64, CoreError> {
        Ok(self
            .client
            .count("seeker_profile_skills", "seeker_profile_id", &profile_id.to_string())
            .await?)
    }

    async fn count_seeker_categories(&self, profile_id: ProfileId) -> Result<i64, CoreError> {
        Ok(self
            .client
            .count(
                "seeker_profile_categories",
                "seeker_profile_id",
                &profile_id.to_string(),
            )
            .await?)
    }
}
