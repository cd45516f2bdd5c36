//! Onboarding step vocabulary and the next-screen decision function.
//!
//! [`decide_next_screen`] is pure: it maps the set of unsatisfied
//! onboarding gates to the single screen the client should render.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Missing steps
// ---------------------------------------------------------------------------

pub const STEP_CITY_SELECTION: &str = "city_selection";
pub const STEP_ROLE_SELECTION: &str = "role_selection";
pub const STEP_SEEKER_PROFILE_INCOMPLETE: &str = "seeker_profile_incomplete";
pub const STEP_COMPANY_PROFILE_INCOMPLETE: &str = "company_profile_incomplete";

/// All valid missing-step tags.
pub const VALID_STEPS: &[&str] = &[
    STEP_CITY_SELECTION,
    STEP_ROLE_SELECTION,
    STEP_SEEKER_PROFILE_INCOMPLETE,
    STEP_COMPANY_PROFILE_INCOMPLETE,
];

/// One onboarding gate the user has not yet passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingStep {
    CitySelection,
    RoleSelection,
    SeekerProfileIncomplete,
    CompanyProfileIncomplete,
}

impl MissingStep {
    /// Parse a tag as stored in `users.last_onboarding_step`.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            STEP_CITY_SELECTION => Ok(Self::CitySelection),
            STEP_ROLE_SELECTION => Ok(Self::RoleSelection),
            STEP_SEEKER_PROFILE_INCOMPLETE => Ok(Self::SeekerProfileIncomplete),
            STEP_COMPANY_PROFILE_INCOMPLETE => Ok(Self::CompanyProfileIncomplete),
            _ => Err(CoreError::Validation(format!(
                "Invalid onboarding step '{s}'. Must be one of: {}",
                VALID_STEPS.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CitySelection => STEP_CITY_SELECTION,
            Self::RoleSelection => STEP_ROLE_SELECTION,
            Self::SeekerProfileIncomplete => STEP_SEEKER_PROFILE_INCOMPLETE,
            Self::CompanyProfileIncomplete => STEP_COMPANY_PROFILE_INCOMPLETE,
        }
    }
}

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

/// Screen the client navigates to once status has been resolved.
///
/// Serialized with the client's route names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NextScreen {
    CitySelection,
    /// Role picker (seeker or poster).
    Onboarding,
    SeekerProfileSetup,
    CompanyProfileSetup,
    /// Fully onboarded.
    Main,
}

impl NextScreen {
    /// Route name used by the client navigator.
    pub fn route_name(&self) -> &'static str {
        match self {
            Self::CitySelection => "CitySelection",
            Self::Onboarding => "Onboarding",
            Self::SeekerProfileSetup => "SeekerProfileSetup",
            Self::CompanyProfileSetup => "CompanyProfileSetup",
            Self::Main => "Main",
        }
    }
}

impl std::fmt::Display for NextScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.route_name())
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Pick the screen for a set of missing steps.
///
/// Priority: city, then role, then seeker profile, then company profile.
/// With no missing steps the user goes to `Main`. The order of `missing`
/// does not matter.
pub fn decide_next_screen(missing: &[MissingStep]) -> NextScreen {
    let has = |step: MissingStep| missing.contains(&step);

    if has(MissingStep::CitySelection) {
        NextScreen::CitySelection
    } else if has(MissingStep::RoleSelection) {
        NextScreen::Onboarding
    } else if has(MissingStep::SeekerProfileIncomplete) {
        NextScreen::SeekerProfileSetup
    } else if has(MissingStep::CompanyProfileIncomplete) {
        NextScreen::CompanyProfileSetup
    } else {
        NextScreen::Main
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
