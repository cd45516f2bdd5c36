use std::time::Duration;

/// Default HTTP request timeout for a single PostgREST call.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Path of the PostgREST API under a Supabase project URL.
const REST_PATH: &str = "/rest/v1";

/// Connection settings for a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`.
    pub url: String,
    /// Public anon key, sent as the `apikey` header.
    pub anon_key: String,
    /// Signed-in user's access token. Falls back to the anon key when unset.
    pub access_token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            access_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SUPABASE_URL` or `SUPABASE_ANON_KEY` is not set.
    ///
    /// | Variable                | Required | Default |
    /// |-------------------------|----------|---------|
    /// | `SUPABASE_URL`          | yes      | -       |
    /// | `SUPABASE_ANON_KEY`     | yes      | -       |
    /// | `SUPABASE_ACCESS_TOKEN` | no       | -       |
    /// | `SUPABASE_TIMEOUT_SECS` | no       | `15`    |
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("SUPABASE_URL").ok()?;
        let anon_key = std::env::var("SUPABASE_ANON_KEY").ok()?;
        Some(Self {
            access_token: std::env::var("SUPABASE_ACCESS_TOKEN").ok(),
            timeout: Duration::from_secs(
                std::env::var("SUPABASE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            ..Self::new(url, anon_key)
        })
    }

    /// Base URL of the PostgREST API.
    pub fn rest_url(&self) -> String {
        format!("{}{REST_PATH}", self.url.trim_end_matches('/'))
    }

    /// Token for the `Authorization: Bearer` header.
    pub fn bearer_token(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.anon_key)
    }
}
