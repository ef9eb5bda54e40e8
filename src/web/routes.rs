//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    create_page_handler, home_handler, valentine_page_handler, yes_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET  /`           - Landing page
/// - `GET  /create`     - Link creation form
/// - `GET  /{slug}`     - The themed Valentine page
/// - `POST /{slug}/yes` - Celebration page; the answer is stored asynchronously
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/create", get(create_page_handler))
        .route("/{slug}", get(valentine_page_handler))
        .route("/{slug}/yes", post(yes_handler))
}
