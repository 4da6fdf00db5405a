//! ThreatLens Triage Service
//!
//! Stateless HTTP API that scores user-submitted emails, URLs, and log
//! records with flat heuristic checks and returns a coarse risk label plus
//! the indicators that fired.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      THREATLENS                        │
//! ├────────────────────────────────────────────────────────┤
//! │  ┌──────────────┐       ┌───────────────────────────┐  │
//! │  │  Ingest API  │──────▶│  Triage (pure functions)  │  │
//! │  │  (Axum)      │       │  email / url / log        │  │
//! │  └──────────────┘       │  + risk aggregation       │  │
//! │         │               └───────────────────────────┘  │
//! │         ▼                                              │
//! │  {type, risk_score, details}                           │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! No database, no sessions, no shared state: every request is analyzed and
//! answered in isolation.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod triage;

pub use error::{AppError, AppResult};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main router with all routes
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::check))
        .route("/ingest/email", post(handlers::ingest::email))
        .route("/ingest/url", post(handlers::ingest::url))
        .route("/ingest/log", post(handlers::ingest::log))
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
