//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (database)
//! - `/api/*`            - REST API, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/api` (optional)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, RateLimit};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `api_limits` - per-IP limits for `/api`, or `None` to disable; when enabled
///   the router must be served with connect info
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(
    state: AppState,
    api_limits: Option<RateLimit>,
) -> anyhow::Result<NormalizePath<Router>> {
    let mut api_router = api::routes::routes();

    if let Some(limits) = api_limits {
        api_router = if limits.behind_proxy {
            api_router.layer(rate_limit::proxy_layer(&limits)?)
        } else {
            api_router.layer(rate_limit::layer(&limits)?)
        };
    }

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(api::middleware::tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
