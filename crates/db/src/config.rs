use std::time::Duration;

/// Default pool size.
const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Default time to wait for a free connection.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DbConfig {
    /// Settings for `database_url` with default pool limits.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `DATABASE_URL` is not set.
    ///
    /// | Variable                      | Required | Default |
    /// |-------------------------------|----------|---------|
    /// | `DATABASE_URL`                | yes      | -       |
    /// | `DATABASE_MAX_CONNECTIONS`    | no       | `20`    |
    /// | `DATABASE_ACQUIRE_TIMEOUT_SECS` | no     | `10`    |
    pub fn from_env() -> Option<Self> {
        let database_url = std::env::var("DATABASE_URL").ok()?;
        Some(Self::from_parts(
            database_url,
            std::env::var("DATABASE_MAX_CONNECTIONS").ok().as_deref(),
            std::env::var("DATABASE_ACQUIRE_TIMEOUT_SECS").ok().as_deref(),
        ))
    }

    fn from_parts(
        database_url: String,
        max_connections: Option<&str>,
        acquire_timeout_secs: Option<&str>,
    ) -> Self {
        let mut config = Self::new(database_url);
        if let Some(n) = max_connections.and_then(|v| v.parse().ok()) {
            config.max_connections = n;
        }
        if let Some(secs) = acquire_timeout_secs.and_then(|v| v.parse().ok()) {
            config.acquire_timeout = Duration::from_secs(secs);
        }
        config
    }
}
