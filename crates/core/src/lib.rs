//! Domain core for the hirelink job marketplace backend.
//!
//! Contains the onboarding status resolver, the typed row records it reads,
//! the [`onboarding::OnboardingStore`] seam implemented by the storage
//! crates, and the signed-in [`session::AuthSession`]. This crate has no
//! database or HTTP dependencies.

pub mod error;
pub mod onboarding;
pub mod records;
pub mod session;
pub mod types;
