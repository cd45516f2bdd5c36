//! HTTP client for the PostgREST endpoint of a Supabase project.
//!
//! Only the read shapes the onboarding resolver needs are wrapped: a
//! single row by equality filter and an exact row count.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_RANGE};
use serde::de::DeserializeOwned;

use crate::config::SupabaseConfig;
use crate::error::{ApiErrorBody, PostgrestError};

/// Media type asking PostgREST for a single JSON object instead of an array.
const SINGLE_OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";

/// `Prefer` value requesting an exact count in `Content-Range`.
const PREFER_EXACT_COUNT: &str = "count=exact";

/// PostgREST client bound to one project and one bearer token.
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    client: reqwest::Client,
    rest_url: String,
    anon_key: String,
    bearer_token: String,
}

impl PostgrestClient {
    /// Create a client with its own connection pool and the configured timeout.
    pub fn new(config: &SupabaseConfig) -> Result<Self, PostgrestError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &SupabaseConfig) -> Self {
        Self {
            client,
            rest_url: config.rest_url(),
            anon_key: config.anon_key.clone(),
            bearer_token: config.bearer_token().to_string(),
        }
    }

    /// Same client, authenticated as a signed-in user so row level security
    /// policies apply to that user.
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.bearer_token = access_token.into();
        self
    }

    /// Fetch at most one row where `column` equals `value`.
    ///
    /// The `PGRST116` "no rows" error is returned as `Ok(None)`; every other
    /// non-2xx response is an error.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: &str,
        columns: &str,
    ) -> Result<Option<T>, PostgrestError> {
        let response = self
            .client
            .get(self.table_url(table))
            .headers(self.auth_headers())
            .header(ACCEPT, SINGLE_OBJECT_MEDIA_TYPE)
            .query(&[(column, eq_filter(value)), ("select", columns.to_string())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error_body = ApiErrorBody::parse(&body);
            if error_body.is_no_rows() {
                tracing::debug!(table, column, value, "No matching row");
                return Ok(None);
            }
            return Err(PostgrestError::from_body(status.as_u16(), error_body));
        }

        decode_row(table, &body).map(Some)
    }

    /// Count rows where `column` equals `value`.
    pub async fn count(
        &self,
        table: &str,
        column: &str,
        value: &str,
    ) -> Result<i64, PostgrestError> {
        let response = self
            .client
            .head(self.table_url(table))
            .headers(self.auth_headers())
            .header("Prefer", PREFER_EXACT_COUNT)
            .query(&[(column, eq_filter(value)), ("select", column.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // HEAD responses carry no body to explain the failure.
            return Err(PostgrestError::from_body(
                status.as_u16(),
                ApiErrorBody::default(),
            ));
        }

        let range = response
            .headers()
            .get(CONTENT_RANGE)
            .ok_or_else(|| {
                PostgrestError::Schema(format!("count on '{table}' returned no Content-Range"))
            })?
            .to_str()
            .map_err(|e| PostgrestError::Schema(format!("invalid Content-Range: {e}")))?;

        parse_content_range_total(range)
    }

    // ---- private helpers ----

    fn table_url(&self, table: &str) -> String {
        format!("{}/{table}", self.rest_url)
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.anon_key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", self.bearer_token)) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }
}

/// PostgREST equality filter value.
fn eq_filter(value: &str) -> String {
    format!("eq.{value}")
}

/// Decode a single-object response body into `T`.
pub fn decode_row<T: DeserializeOwned>(table: &str, body: &str) -> Result<T, PostgrestError> {
    serde_json::from_str(body)
        .map_err(|e| PostgrestError::Schema(format!("row from '{table}' did not decode: {e}")))
}

/// Extract the total from a `Content-Range` header such as `0-4/5` or `*/0`.
pub fn parse_content_range_total(range: &str) -> Result<i64, PostgrestError> {
    let total = range
        .rsplit_once('/')
        .map(|(_, total)| total.trim())
        .ok_or_else(|| PostgrestError::Schema(format!("malformed Content-Range '{range}'")))?;

    total.parse::<i64>().map_err(|_| {
        PostgrestError::Schema(format!("Content-Range '{range}' has no exact total"))
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        id: i64,
        name: Option<String>,
    }

    #[test]
    fn content_range_totals() {
        assert_eq!(parse_content_range_total("0-4/5").unwrap(), 5);
        assert_eq!(parse_content_range_total("*/0").unwrap(), 0);
        assert_eq!(parse_content_range_total("*/12").unwrap(), 12);
    }

    #[test]
    fn content_range_without_exact_total_is_schema_error() {
        assert_matches!(parse_content_range_total("0-4/*"), Err(PostgrestError::Schema(_)));
        assert_matches!(parse_content_range_total("items"), Err(PostgrestError::Schema(_)));
    }

    #[test]
    fn decode_row_accepts_matching_shape() {
        let row: Row = decode_row("things", r#"{"id": 7, "name": null}"#).unwrap();
        assert_eq!(row.id, 7);
        assert!(row.name.is_none());
    }

    #[test]
    fn decode_row_rejects_wrong_shape() {
        let result = decode_row::<Row>("things", r#"{"id": "seven"}"#);
        assert_matches!(result, Err(PostgrestError::Schema(msg)) if msg.contains("things"));
    }

    #[test]
    fn client_builds_from_config() {
        let config = SupabaseConfig::new("https://proj.supabase.co", "anon");
        let client = PostgrestClient::new(&config).unwrap();
        assert_eq!(client.table_url("users"), "https://proj.supabase.co/rest/v1/users");

        let headers = client.auth_headers();
        assert_eq!(headers.get("apikey").unwrap(), "anon");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer anon");

        let user_client = client.with_access_token("jwt");
        assert_eq!(user_client.auth_headers().get(AUTHORIZATION).unwrap(), "Bearer jwt");
    }
}
