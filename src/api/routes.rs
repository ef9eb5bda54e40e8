//! API route configuration.

use crate::api::handlers::{
    check_slug_handler, create_link_handler, get_link_handler, respond_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All JSON API routes. No authentication.
///
/// # Endpoints
///
/// - `POST /create-link`          - Create a link with a chosen slug
/// - `GET  /check-slug?slug=`     - Slug availability
/// - `GET  /link/{slug}`          - Public fields of a link
/// - `POST /link/{slug}/respond`  - Record a "yes" / "no" answer
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/create-link", post(create_link_handler))
        .route("/check-slug", get(check_slug_handler))
        .route("/link/{slug}", get(get_link_handler))
        .route("/link/{slug}/respond", post(respond_handler))
}
