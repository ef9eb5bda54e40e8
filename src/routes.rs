//! Top-level router configuration combining API and page routes.
//!
//! # Route Structure
//!
//! - `GET  /health`       - Health check: store and response queue
//! - `/api/*`             - JSON API
//! - `GET  /`             - Landing page
//! - `GET  /create`       - Link creation form
//! - `GET  /{slug}`       - Valentine page
//! - `POST /{slug}/yes`   - Celebration page
//!
//! Static segments take priority over `/{slug}`, so slugs equal to `health`,
//! `api` or `create` cannot be reached through the page routes.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes and request tracing, without path normalization.
///
/// Trailing-slash trimming has to wrap the whole router, so it is applied in
/// [`app_router`]; this is the part handlers see.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .merge(web::routes::page_routes())
        .with_state(state)
        .layer(tracing::layer())
}
