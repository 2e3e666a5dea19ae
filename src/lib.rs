pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod notify;
pub mod pricing;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::clock::{SystemClock, UuidV7Generator};
use crate::config::Config;
use crate::notify::NotifierRegistry;
use crate::state::{AppState, SharedState};
use crate::store::ContentStore;

/// State wired with the system clock, v7 ids and the configured notifiers.
pub fn default_state(store: Arc<dyn ContentStore>, config: Config) -> AppState {
    let notifiers = NotifierRegistry::from_config(&config);
    if notifiers.is_empty() {
        tracing::info!("No contact notifiers configured; submissions are stored only");
    }
    AppState {
        store,
        config,
        clock: Arc::new(SystemClock),
        ids: Arc::new(UuidV7Generator),
        notifiers,
    }
}

pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config);
    let max_body_size = state.config.max_body_size;
    let state: SharedState = Arc::new(state);

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

/// Any origin when none are configured, otherwise the configured list.
fn build_cors_layer(config: &Config) -> CorsLayer {
    let allow_origin = if config.cors_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring invalid CORS origin '{o}': {e}");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

async fn health() -> &'static str {
    "ok"
}
