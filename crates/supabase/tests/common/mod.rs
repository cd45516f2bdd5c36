//! Canned-response PostgREST server built on an axum `Router`.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::header::{CONTENT_RANGE, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use hirelink_supabase::{PostgrestClient, SupabaseConfig};
use tokio::net::TcpListener;

pub const ANON_KEY: &str = "test-anon-key";

/// Response returned for one request.
#[derive(Debug, Clone)]
pub struct Canned {
    pub status: u16,
    pub headers: Vec<(HeaderName, String)>,
    pub body: String,
}

impl Canned {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            headers: vec![(CONTENT_TYPE, "application/json".to_string())],
            body: body.to_string(),
        }
    }

    /// The 406 PostgREST returns for a single-object read with no match.
    pub fn no_rows() -> Self {
        Self::json(
            406,
            serde_json::json!({
                "code": "PGRST116",
                "details": "The result contains 0 rows",
                "hint": null,
                "message": "JSON object requested, multiple (or no) rows returned"
            }),
        )
    }

    /// Response to a `Prefer: count=exact` HEAD request.
    pub fn count(total: i64) -> Self {
        Self {
            status: 200,
            headers: vec![(CONTENT_RANGE, format!("*/{total}"))],
            body: String::new(),
        }
    }
}

impl IntoResponse for Canned {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap();
        let mut headers = HeaderMap::new();
        for (name, value) in self.headers {
            headers.insert(name, HeaderValue::from_str(&value).unwrap());
        }
        (status, headers, self.body).into_response()
    }
}

/// A request as seen by the server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    /// Path and query string.
    pub target: String,
    pub headers: HeaderMap,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

type Handler = dyn Fn(&Method, &str) -> Canned + Send + Sync;

#[derive(Clone)]
struct MockState {
    handler: Arc<Handler>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

async fn respond(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Canned {
    let canned = (state.handler)(&method, uri.path());
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    state.requests.lock().unwrap().push(Recorded {
        method,
        target,
        headers,
    });
    canned
}

pub struct MockPostgrest {
    pub url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockPostgrest {
    /// Serve `handler(method, path)` on a random local port.
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&Method, &str) -> Canned + Send + Sync + 'static,
    {
        let requests: Arc<Mutex<Vec<Recorded>>> = Arc::default();
        let state = MockState {
            handler: Arc::new(handler),
            requests: Arc::clone(&requests),
        };
        let app = Router::new().fallback(respond).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn client(&self) -> PostgrestClient {
        PostgrestClient::new(&SupabaseConfig::new(self.url.clone(), ANON_KEY)).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}
