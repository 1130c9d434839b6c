//! # jsv-api — HTTP Transport for the Validation Engine
//!
//! Exposes the engine in `jsv-schema` over HTTP, built on Axum/Tower/Tokio.
//!
//! ## API Surface
//!
//! | Route                    | Module                | Purpose                     |
//! |--------------------------|-----------------------|-----------------------------|
//! | `POST /validate`         | [`routes::validate`]  | Validate a document         |
//! | `GET /metrics`           | [`routes::status`]    | Request and outcome counters |
//! | `GET /health/liveness`   | this module           | Liveness probe              |
//! | `GET /health/readiness`  | this module           | Readiness probe             |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CorsLayer → TraceLayer → MetricsMiddleware → CatchPanic → BodyLimit → Handler
//! ```
//!
//! ## Crate Policy
//!
//! - No validation logic in route handlers; delegates to `jsv-schema`.
//! - All errors map to structured HTTP responses via `AppError`.

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let metrics = state.metrics.clone();
    let body_limit = state.config.max_body_bytes;

    let api = Router::new()
        .merge(routes::validate::router())
        .merge(routes::status::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new()
        .merge(health)
        .merge(api)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(metrics))
        .layer(CorsLayer::permissive())
}

/// Liveness probe; 200 while the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe; the engine holds no external resources, so always ready.
async fn readiness() -> &'static str {
    "ready"
}
