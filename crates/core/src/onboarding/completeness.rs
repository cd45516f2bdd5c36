//! Profile existence and completeness checks.
//!
//! Existence is a pair of independent lookups; completeness is only
//! evaluated for profiles that exist.

use crate::error::CoreError;
use crate::onboarding::store::OnboardingStore;
use crate::records::{is_present, CompanyProfileRecord, SeekerProfileRecord};
use crate::types::UserId;

// ---------------------------------------------------------------------------
// Existence
// ---------------------------------------------------------------------------

/// Which role profiles a user has. A user may have both, one, or neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePresence {
    pub seeker: Option<SeekerProfileRecord>,
    pub company: Option<CompanyProfileRecord>,
}

impl ProfilePresence {
    pub fn has_seeker_profile(&self) -> bool {
        self.seeker.is_some()
    }

    pub fn has_company_profile(&self) -> bool {
        self.company.is_some()
    }

    /// `false` means the user has not picked a role yet.
    pub fn has_any_profile(&self) -> bool {
        self.has_seeker_profile() || self.has_company_profile()
    }
}

/// Look up both profile kinds for a user.
///
/// A missing row is a `None` entry, not an error.
pub async fn check_profile_presence<S>(
    store: &S,
    user_id: UserId,
) -> Result<ProfilePresence, CoreError>
where
    S: OnboardingStore + ?Sized,
{
    let (seeker, company) = tokio::try_join!(
        store.find_seeker_profile(user_id),
        store.find_company_profile(user_id),
    )?;

    tracing::debug!(
        user_id = %user_id,
        has_seeker_profile = seeker.is_some(),
        has_company_profile = company.is_some(),
        "Checked profile presence"
    );

    Ok(ProfilePresence { seeker, company })
}

// ---------------------------------------------------------------------------
// Seeker completeness
// ---------------------------------------------------------------------------

/// Inputs that decide whether a seeker profile is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeekerCompleteness {
    pub skill_count: i64,
    pub category_count: i64,
    pub has_experience_level: bool,
}

impl SeekerCompleteness {
    pub fn evaluate(profile: &SeekerProfileRecord, skill_count: i64, category_count: i64) -> Self {
        Self {
            skill_count,
            category_count,
            has_experience_level: is_present(profile.experience_level.as_deref()),
        }
    }

    /// Complete iff at least one skill, at least one category, and an
    /// experience level are present.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the requirements that are not met, for logging.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.skill_count < 1 {
            missing.push("skills");
        }
        if self.category_count < 1 {
            missing.push("categories");
        }
        if !self.has_experience_level {
            missing.push("experience_level");
        }
        missing
    }
}

/// Fetch association counts for an existing seeker profile and evaluate it.
pub async fn check_seeker_completeness<S>(
    store: &S,
    profile: &SeekerProfileRecord,
) -> Result<SeekerCompleteness, CoreError>
where
    S: OnboardingStore + ?Sized,
{
    let (skill_count, category_count) = tokio::try_join!(
        store.count_seeker_skills(profile.id),
        store.count_seeker_categories(profile.id),
    )?;

    let completeness = SeekerCompleteness::evaluate(profile, skill_count, category_count);
    if !completeness.is_complete() {
        tracing::debug!(
            profile_id = %profile.id,
            missing = ?completeness.missing_fields(),
            "Seeker profile incomplete"
        );
    }
    Ok(completeness)
}

// ---------------------------------------------------------------------------
// Company completeness
// ---------------------------------------------------------------------------

/// Complete iff both company name and contact email are non-blank.
pub fn company_profile_is_complete(profile: &CompanyProfileRecord) -> bool {
    is_present(profile.company_name.as_deref()) && is_present(profile.contact_email.as_deref())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
