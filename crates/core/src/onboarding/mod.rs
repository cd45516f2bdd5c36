//! Onboarding status resolution.
//!
//! Decides, for a signed-in user, whether to show the city picker, the role
//! picker, a profile setup screen, or the main app. The decision is derived
//! from backend rows read through [`OnboardingStore`].

pub mod completeness;
pub mod resolver;
pub mod steps;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use completeness::{
    check_profile_presence, check_seeker_completeness, company_profile_is_complete,
    ProfilePresence, SeekerCompleteness,
};
pub use resolver::{derive_missing_steps, resolve_status, OnboardingStatus, ProfileChecks};
pub use steps::{decide_next_screen, MissingStep, NextScreen};
pub use store::OnboardingStore;
