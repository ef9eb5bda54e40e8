//! Valentine page and celebration handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tokio::sync::mpsc::error::TrySendError;
use tracing::warn;

use crate::domain::entities::Link;
use crate::domain::response_event::ResponseEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_builder::full_url;

const PAGE_DESCRIPTION: &str = "Someone has a special question for you...";

/// Template for the question page.
///
/// Renders `templates/valentine.html` with OpenGraph and Twitter card
/// metadata so shared links preview as the question itself.
#[derive(Template, WebTemplate)]
#[template(path = "valentine.html")]
pub struct ValentineTemplate {
    pub slug: String,
    pub recipient_name: String,
    pub theme: &'static str,
    pub title: String,
    pub description: &'static str,
    pub page_url: String,
}

/// Template shown after the recipient says yes.
#[derive(Template, WebTemplate)]
#[template(path = "celebrate.html")]
pub struct CelebrateTemplate {
    pub recipient_name: String,
    pub theme: &'static str,
    pub title: String,
}

/// Template for unknown slugs.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub slug: String,
    pub title: String,
}

impl ValentineTemplate {
    fn new(link: Link, page_url: String) -> Self {
        Self {
            title: question_title(&link.recipient_name),
            slug: link.slug,
            recipient_name: link.recipient_name,
            theme: link.theme.as_str(),
            description: PAGE_DESCRIPTION,
            page_url,
        }
    }
}

fn question_title(recipient_name: &str) -> String {
    format!("Will you be my Valentine, {}?", recipient_name)
}

fn not_found_page(slug: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            slug,
            title: "Valentine not found".to_string(),
        },
    )
        .into_response()
}

/// Renders the Valentine page.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Errors
///
/// Unknown slugs render `templates/not_found.html` with 404. Store failures
/// are returned as JSON errors.
pub async fn valentine_page_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.get_link_by_slug(&slug).await {
        Ok(link) => {
            let page_url = full_url(state.base_url.as_ref(), &link.slug);
            Ok(ValentineTemplate::new(link, page_url).into_response())
        }
        Err(AppError::NotFound { .. }) => Ok(not_found_page(slug)),
        Err(e) => Err(e),
    }
}

/// Shows the celebration and queues the "yes" acknowledgement.
///
/// # Endpoint
///
/// `POST /{slug}/yes`
///
/// # Acknowledgement
///
/// The answer is sent to a bounded channel with `try_send` and persisted by
/// [`crate::domain::response_worker::run_response_worker`]. A full or closed
/// queue is logged and counted; the celebration is rendered either way.
pub async fn yes_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = match state.link_service.get_link_by_slug(&slug).await {
        Ok(link) => link,
        Err(AppError::NotFound { .. }) => return Ok(not_found_page(slug)),
        Err(e) => return Err(e),
    };

    match state
        .response_sender
        .try_send(ResponseEvent::new(link.slug.clone()))
    {
        Ok(()) => {}
        Err(TrySendError::Full(event)) => {
            warn!(slug = %event.slug, "Response queue full, acknowledgement dropped");
            metrics::counter!("valentine_acknowledgements_dropped_total").increment(1);
        }
        Err(TrySendError::Closed(event)) => {
            warn!(slug = %event.slug, "Response queue closed, acknowledgement dropped");
            metrics::counter!("valentine_acknowledgements_dropped_total").increment(1);
        }
    }

    Ok(CelebrateTemplate {
        title: format!("{} said yes!", link.recipient_name),
        recipient_name: link.recipient_name,
        theme: link.theme.as_str(),
    }
    .into_response())
}
