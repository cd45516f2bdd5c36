//! Onboarding status aggregation.
//!
//! Status is recomputed from backend rows on every call; nothing about the
//! user's position in the flow is stored apart from the
//! `onboarding_completed` flag. Calling [`resolve_status`] repeatedly with
//! no intervening writes yields identical results.

use serde::Serialize;

use crate::error::CoreError;
use crate::onboarding::completeness::{
    check_profile_presence, check_seeker_completeness, company_profile_is_complete,
    ProfilePresence,
};
use crate::onboarding::steps::{decide_next_screen, MissingStep, NextScreen};
use crate::onboarding::store::OnboardingStore;
use crate::records::UserRecord;
use crate::types::UserId;

/// Entity label used in `NotFound` errors for the users table.
const USER_ENTITY: &str = "user";

/// Resolved onboarding status for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingStatus {
    pub is_complete: bool,
    /// Unsatisfied gates in fixed order: city, role, seeker, company.
    pub missing_steps: Vec<MissingStep>,
    pub next_screen: NextScreen,
    pub needs_city_selection: bool,
    pub needs_role_selection: bool,
    pub has_seeker_profile: bool,
    pub has_company_profile: bool,
    #[serde(rename = "userRecord")]
    pub user: UserRecord,
}

/// Profile completeness results feeding [`derive_missing_steps`].
///
/// `None` means the profile does not exist and was not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileChecks {
    pub seeker_complete: Option<bool>,
    pub company_complete: Option<bool>,
}

/// Compute the missing steps from already-loaded data.
pub fn derive_missing_steps(user: &UserRecord, checks: ProfileChecks) -> Vec<MissingStep> {
    let mut missing = Vec::new();

    if !user.has_city() {
        missing.push(MissingStep::CitySelection);
    }
    if checks.seeker_complete.is_none() && checks.company_complete.is_none() {
        missing.push(MissingStep::RoleSelection);
    }
    if checks.seeker_complete == Some(false) {
        missing.push(MissingStep::SeekerProfileIncomplete);
    }
    if checks.company_complete == Some(false) {
        missing.push(MissingStep::CompanyProfileIncomplete);
    }

    missing
}

/// Resolve what a signed-in user should see next.
///
/// Any read failure aborts the whole resolution; there is no fallback
/// screen. A missing `users` row is reported as `NotFound`. Users flagged
/// `onboarding_completed` always resolve to `Main`; their profile lookup
/// only feeds the `has_*_profile` flags and may fail without effect.
#[tracing::instrument(skip_all, fields(user_id = %user_id))]
pub async fn resolve_status<S>(store: &S, user_id: UserId) -> Result<OnboardingStatus, CoreError>
where
    S: OnboardingStore + ?Sized,
{
    let user = store
        .find_user(user_id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: USER_ENTITY,
            id: user_id.to_string(),
        })?;

    if user.onboarding_completed {
        tracing::info!("Onboarding flagged complete, skipping profile checks");
        let presence = match check_profile_presence(store, user_id).await {
            Ok(presence) => presence,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "Profile lookup failed for completed user, reporting no profiles"
                );
                ProfilePresence::default()
            }
        };
        return Ok(completed_status(user, &presence));
    }

    let presence = check_profile_presence(store, user_id).await?;

    let checks = ProfileChecks {
        seeker_complete: match &presence.seeker {
            Some(profile) => Some(check_seeker_completeness(store, profile).await?.is_complete()),
            None => None,
        },
        company_complete: presence.company.as_ref().map(company_profile_is_complete),
    };

    let missing_steps = derive_missing_steps(&user, checks);
    let next_screen = decide_next_screen(&missing_steps);

    tracing::info!(
        next_screen = %next_screen,
        missing = ?missing_steps,
        "Resolved onboarding status"
    );

    Ok(OnboardingStatus {
        is_complete: missing_steps.is_empty(),
        needs_city_selection: missing_steps.contains(&MissingStep::CitySelection),
        needs_role_selection: missing_steps.contains(&MissingStep::RoleSelection),
        has_seeker_profile: presence.has_seeker_profile(),
        has_company_profile: presence.has_company_profile(),
        missing_steps,
        next_screen,
        user,
    })
}

fn completed_status(user: UserRecord, presence: &ProfilePresence) -> OnboardingStatus {
    OnboardingStatus {
        is_complete: true,
        missing_steps: Vec::new(),
        next_screen: NextScreen::Main,
        needs_city_selection: false,
        needs_role_selection: false,
        has_seeker_profile: presence.has_seeker_profile(),
        has_company_profile: presence.has_company_profile(),
        user,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
