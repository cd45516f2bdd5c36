use hirelink_core::error::CoreError;
use serde::Deserialize;

/// PostgREST error code for "JSON object requested, multiple (or no) rows
/// returned". With `Accept: application/vnd.pgrst.object+json` on a
/// unique filter this means the row does not exist.
pub const NO_ROWS_CODE: &str = "PGRST116";

/// Errors from the PostgREST layer.
#[derive(Debug, thiserror::Error)]
pub enum PostgrestError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// PostgREST returned a non-2xx status code.
    #[error("PostgREST error ({status}): {message}")]
    Api {
        status: u16,
        /// PostgREST or Postgres error code, when the body carried one.
        code: Option<String>,
        message: String,
    },

    /// The response body or headers did not have the expected shape.
    #[error("Unexpected response shape: {0}")]
    Schema(String),
}

/// JSON error body returned by PostgREST.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl ApiErrorBody {
    /// Parse an error body, tolerating non-JSON responses from proxies.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| Self {
            message: Some(body.to_string()),
            ..Self::default()
        })
    }

    pub fn is_no_rows(&self) -> bool {
        self.code.as_deref() == Some(NO_ROWS_CODE)
    }
}

impl PostgrestError {
    pub fn from_body(status: u16, body: ApiErrorBody) -> Self {
        let message = match (body.message, body.details) {
            (Some(message), Some(details)) => format!("{message} ({details})"),
            (Some(message), None) => message,
            (None, Some(details)) => details,
            (None, None) => "<empty body>".to_string(),
        };
        Self::Api {
            status,
            code: body.code,
            message,
        }
    }
}

impl From<PostgrestError> for CoreError {
    fn from(err: PostgrestError) -> Self {
        match err {
            PostgrestError::Schema(msg) => CoreError::UnexpectedSchema(msg),
            other => CoreError::Backend(other.to_string()),
        }
    }
}
