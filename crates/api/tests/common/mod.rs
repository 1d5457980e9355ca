#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::{RawQuery, State};
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get as get_route;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use gamevault_api::config::{RawgConfig, ServerConfig};
use gamevault_api::router::build_app_router;
use gamevault_api::state::AppState;

/// Credential the test gateway is configured with.
pub const TEST_API_KEY: &str = "test-key-123";

// ---------------------------------------------------------------------------
// Fake upstream catalog
// ---------------------------------------------------------------------------

/// Canned answer for one fake catalog endpoint.
#[derive(Clone)]
pub struct FakeResponse {
    pub status: StatusCode,
    pub body: Value,
    pub delay: Duration,
}

impl FakeResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Clone)]
struct FakeState {
    games: FakeResponse,
    genres: FakeResponse,
    queries: Arc<Mutex<Vec<String>>>,
}

async fn respond(fake: &FakeState, response: &FakeResponse, query: Option<String>) -> Response {
    fake.queries.lock().unwrap().push(query.unwrap_or_default());
    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }
    (response.status, Json(response.body.clone())).into_response()
}

async fn fake_games(State(fake): State<FakeState>, RawQuery(query): RawQuery) -> Response {
    respond(&fake, &fake.games, query).await
}

async fn fake_genres(State(fake): State<FakeState>, RawQuery(query): RawQuery) -> Response {
    respond(&fake, &fake.genres, query).await
}

/// An in-process stand-in for the RAWG API that records raw query strings.
pub struct FakeCatalog {
    pub addr: SocketAddr,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeCatalog {
    pub async fn start(games: FakeResponse, genres: FakeResponse) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            games,
            genres,
            queries: Arc::clone(&queries),
        };
        let app = Router::new()
            .route("/games", get_route(fake_games))
            .route("/genres", get_route(fake_genres))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        Self { addr, queries }
    }

    /// Serve the same games page for every request; genres answer empty.
    pub async fn with_games(body: Value) -> Self {
        Self::start(
            FakeResponse::ok(body),
            FakeResponse::ok(serde_json::json!({ "results": [] })),
        )
        .await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Raw query strings received so far, in arrival order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Gateway under test
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` pointing at `upstream_base`.
///
/// Any CORS origin, a 30-second request timeout and a 5-second upstream
/// timeout.
pub fn test_config(upstream_base: &str, static_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: Vec::new(),
        request_timeout_secs: 30,
        static_dir: static_dir.to_path_buf(),
        rawg: RawgConfig {
            api_key: Some(TEST_API_KEY.to_string()),
            base_url: upstream_base.to_string(),
            timeout_secs: 5,
        },
    }
}

/// A static directory holding a minimal shell.
pub fn static_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("index.html"),
        "<!doctype html><title>GameVault</title>",
    )
    .unwrap();
    std::fs::write(dir.path().join("script.js"), "console.log('vault');").unwrap();
    dir
}

/// Build the full application router from `config`.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_app(config: ServerConfig) -> Router {
    let state = AppState::from_config(config.clone()).unwrap();
    build_app_router(state, &config)
}

/// Build the gateway against `upstream_base`. Keep the returned directory
/// alive for as long as the router is used.
pub fn build_test_app(upstream_base: &str) -> (Router, TempDir) {
    let dir = static_dir();
    let app = build_app(test_config(upstream_base, dir.path()));
    (app, dir)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
