//! In-memory [`OnboardingStore`] for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::onboarding::store::OnboardingStore;
use crate::records::{CompanyProfileRecord, SeekerProfileRecord, UserRecord};
use crate::types::{ProfileId, UserId};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, UserRecord>,
    seekers: HashMap<UserId, SeekerProfileRecord>,
    companies: HashMap<UserId, CompanyProfileRecord>,
    skill_counts: HashMap<ProfileId, i64>,
    category_counts: HashMap<ProfileId, i64>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failure: Mutex<Option<CoreError>>,
    profile_failure: Mutex<Option<CoreError>>,
    count_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, city: Option<&str>) -> UserId {
        let now = chrono::Utc::now();
        let user = UserRecord {
            id: uuid::Uuid::new_v4(),
            email: Some("test@example.com".to_string()),
            phone_number: None,
            city: city.map(str::to_string),
            onboarding_completed: false,
            last_onboarding_step: None,
            created_at: now,
            updated_at: now,
        };
        let id = user.id;
        self.tables.lock().unwrap().users.insert(id, user);
        id
    }

    pub fn set_city(&self, user_id: UserId, city: &str) {
        if let Some(user) = self.tables.lock().unwrap().users.get_mut(&user_id) {
            user.city = Some(city.to_string());
        }
    }

    pub fn set_onboarding_completed(&self, user_id: UserId, completed: bool) {
        if let Some(user) = self.tables.lock().unwrap().users.get_mut(&user_id) {
            user.onboarding_completed = completed;
        }
    }

    pub fn add_seeker(
        &self,
        user_id: UserId,
        experience_level: Option<&str>,
        skills: i64,
        categories: i64,
    ) -> ProfileId {
        let profile = SeekerProfileRecord {
            id: uuid::Uuid::new_v4(),
            user_id,
            experience_level: experience_level.map(str::to_string),
        };
        let id = profile.id;
        let mut tables = self.tables.lock().unwrap();
        tables.seekers.insert(user_id, profile);
        tables.skill_counts.insert(id, skills);
        tables.category_counts.insert(id, categories);
        id
    }

    pub fn add_company(
        &self,
        user_id: UserId,
        company_name: Option<&str>,
        contact_email: Option<&str>,
    ) -> ProfileId {
        let profile = CompanyProfileRecord {
            id: uuid::Uuid::new_v4(),
            user_id,
            company_name: company_name.map(str::to_string),
            contact_email: contact_email.map(str::to_string),
        };
        let id = profile.id;
        self.tables.lock().unwrap().companies.insert(user_id, profile);
        id
    }

    /// Make every subsequent read fail with `err`.
    pub fn fail_with(&self, err: CoreError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    /// Make only the seeker/company profile lookups fail with `err`.
    pub fn fail_profile_reads_with(&self, err: CoreError) {
        *self.profile_failure.lock().unwrap() = Some(err);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
        *self.profile_failure.lock().unwrap() = None;
    }

    /// Number of association-count reads served so far.
    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), CoreError> {
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn check_profile_failure(&self) -> Result<(), CoreError> {
        self.check_failure()?;
        match self.profile_failure.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OnboardingStore for MemoryStore {
    async fn find_user(&self, user_id: UserId) -> Result<Option<UserRecord>, CoreError> {
        self.check_failure()?;
        Ok(self.tables.lock().unwrap().users.get(&user_id).cloned())
    }

    async fn find_seeker_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<SeekerProfileRecord>, CoreError> {
        self.check_profile_failure()?;
        Ok(self.tables.lock().unwrap().seekers.get(&user_id).cloned())
    }

    async fn find_company_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<CompanyProfileRecord>, CoreError> {
        self.check_profile_failure()?;
        Ok(self.tables.lock().unwrap().companies.get(&user_id).cloned())
    }

    async fn count_seeker_skills(&self, profile_id: ProfileId) -> Result<i64, CoreError> {
        self.check_failure()?;
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .tables
            .lock()
            .unwrap()
            .skill_counts
            .get(&profile_id)
            .copied()
            .unwrap_or(0))
    }

    async fn count_seeker_categories(&self, profile_id: ProfileId) -> Result<i64, CoreError> {
        self.check_failure()?;
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .tables
            .lock()
            .unwrap()
            .category_counts
            .get(&profile_id)
            .copied()
            .unwrap_or(0))
    }
}
