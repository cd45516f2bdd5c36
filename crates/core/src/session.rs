//! Signed-in session state consumed by the client navigator.
//!
//! [`AuthSession`] owns a store handle, the signed-in user, the last
//! resolved [`OnboardingStatus`], the current [`Route`], and the active
//! [`UserMode`]. Status is re-resolved on sign-in and whenever the caller
//! asks for a refresh (for example when the app returns to the foreground).
//! A failed refresh leaves the route untouched so a partially onboarded
//! user is never sent to a guessed screen.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::onboarding::{resolve_status, NextScreen, OnboardingStatus, OnboardingStore};
use crate::records::parse_user_id;
use crate::types::UserId;

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// Which navigation stack the client renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stack", content = "screen")]
pub enum Route {
    /// Sign-in screens.
    SignedOut,
    /// Signed in, status not resolved yet (splash).
    Resolving,
    /// Onboarding or main app screen chosen by the resolver.
    Screen(NextScreen),
}

// ---------------------------------------------------------------------------
// User mode
// ---------------------------------------------------------------------------

/// Which side of the marketplace the user is currently acting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserMode {
    /// Looking for a job.
    Seeker,
    /// Hiring.
    Poster,
}

impl UserMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Seeker => "seeker",
            Self::Poster => "poster",
        }
    }
}

/// Modes backed by an existing profile, seeker first.
pub fn available_modes(status: &OnboardingStatus) -> Vec<UserMode> {
    let mut modes = Vec::with_capacity(2);
    if status.has_seeker_profile {
        modes.push(UserMode::Seeker);
    }
    if status.has_company_profile {
        modes.push(UserMode::Poster);
    }
    modes
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

pub struct AuthSession<S> {
    store: S,
    user_id: Option<UserId>,
    status: Option<OnboardingStatus>,
    route: Route,
    mode: Option<UserMode>,
    last_error: Option<CoreError>,
}

impl<S: OnboardingStore> AuthSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            user_id: None,
            status: None,
            route: Route::SignedOut,
            mode: None,
            last_error: None,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn status(&self) -> Option<&OnboardingStatus> {
        self.status.as_ref()
    }

    pub fn active_mode(&self) -> Option<UserMode> {
        self.mode
    }

    /// Error from the most recent failed refresh, cleared on success.
    pub fn last_error(&self) -> Option<&CoreError> {
        self.last_error.as_ref()
    }

    /// Start a session for `user_id` and resolve its onboarding status.
    ///
    /// If resolution fails the session stays signed in on
    /// [`Route::Resolving`] and the error is returned.
    pub async fn sign_in(&mut self, user_id: UserId) -> Result<&OnboardingStatus, CoreError> {
        if self.user_id != Some(user_id) {
            self.status = None;
            self.mode = None;
        }
        self.user_id = Some(user_id);
        self.route = Route::Resolving;
        self.last_error = None;
        tracing::info!(user_id = %user_id, "Session signed in");

        self.refresh().await
    }

    /// Sign in with the raw `sub` claim of an auth token.
    ///
    /// A malformed subject is rejected before the session changes state.
    pub async fn sign_in_subject(
        &mut self,
        subject: &str,
    ) -> Result<&OnboardingStatus, CoreError> {
        let user_id = parse_user_id(subject)?;
        self.sign_in(user_id).await
    }

    /// Re-resolve status for the signed-in user.
    pub async fn refresh(&mut self) -> Result<&OnboardingStatus, CoreError> {
        let user_id = self
            .user_id
            .ok_or_else(|| CoreError::Validation("No user is signed in".to_string()))?;

        match resolve_status(&self.store, user_id).await {
            Ok(status) => {
                self.route = Route::Screen(status.next_screen);
                self.mode = pick_mode(self.mode, &status);
                self.last_error = None;
                Ok(&*self.status.insert(status))
            }
            Err(err) => {
                tracing::warn!(
                    user_id = %user_id,
                    error = %err,
                    route = ?self.route,
                    "Onboarding status refresh failed, keeping current route"
                );
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Switch the active marketplace side. Only modes backed by a profile
    /// are accepted.
    pub fn switch_mode(&mut self, mode: UserMode) -> Result<(), CoreError> {
        let status = self
            .status
            .as_ref()
            .ok_or_else(|| CoreError::Validation("Onboarding status not resolved".to_string()))?;

        if !available_modes(status).contains(&mode) {
            return Err(CoreError::Validation(format!(
                "Cannot switch to '{}' mode without a matching profile",
                mode.as_str()
            )));
        }

        self.mode = Some(mode);
        Ok(())
    }

    pub fn sign_out(&mut self) {
        if let Some(user_id) = self.user_id.take() {
            tracing::info!(user_id = %user_id, "Session signed out");
        }
        self.status = None;
        self.mode = None;
        self.last_error = None;
        self.route = Route::SignedOut;
    }
}

/// Keep the current mode while it stays available, otherwise fall back to
/// the first available one.
fn pick_mode(current: Option<UserMode>, status: &OnboardingStatus) -> Option<UserMode> {
    let modes = available_modes(status);
    match current {
        Some(mode) if modes.contains(&mode) => Some(mode),
        _ => modes.first().copied(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
