use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use kontrast::clock::{Clock, IdGenerator};
use kontrast::config::Config;
use kontrast::notify::NotifierRegistry;
use kontrast::state::AppState;
use kontrast::store::MemoryStore;

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Ids 00000000-0000-0000-0000-000000000001, ...02, and so on.
#[derive(Default)]
pub struct SequentialIds(AtomicU64);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> Uuid {
        let n = self.0.fetch_add(1, Ordering::SeqCst) + 1;
        Uuid::from_u128(n as u128)
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 18, 10, 0, 0).unwrap()
}

/// A running test server backed by an in-memory store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<MemoryStore>,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET a JSON endpoint, return (body, status).
    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a JSON body, return (body, status).
    pub async fn post(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a raw body with an explicit content type.
    pub async fn post_raw(&self, path: &str, content_type: &str, body: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .header("content-type", content_type)
            .body(body.to_string())
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Load the sample dataset.
    pub async fn seed(&self) {
        let (body, status) = self.post("/api/seed-data", &json!({})).await;
        assert_eq!(status, StatusCode::OK, "seed failed: {body}");
    }
}

/// Spawn a test app with a fresh in-memory store, a fixed clock and
/// sequential ids.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config(), NotifierRegistry::new()).await
}

pub fn test_config() -> Config {
    Config {
        log_level: "warn".to_string(),
        ..Config::default()
    }
}

/// Like [`spawn_app`], with a custom config and notifiers.
pub async fn spawn_app_with(config: Config, notifiers: NotifierRegistry) -> TestApp {
    let store = Arc::new(MemoryStore::new());

    let state = AppState {
        store: store.clone(),
        config,
        clock: Arc::new(FixedClock(fixed_now())),
        ids: Arc::new(SequentialIds::default()),
        notifiers,
    };

    let app = kontrast::build_app(state);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        store,
        client: Client::new(),
    }
}
