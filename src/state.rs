//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::mpsc;
use url::Url;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;
use crate::domain::response_event::ResponseEvent;

/// Handles shared by all request handlers.
///
/// Cloned per request; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Queue feeding [`crate::domain::response_worker::run_response_worker`].
    pub response_sender: mpsc::Sender<ResponseEvent>,
    /// Public origin used to build absolute link URLs; `None` yields relative paths.
    pub base_url: Option<Url>,
}

impl AppState {
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        response_sender: mpsc::Sender<ResponseEvent>,
        base_url: Option<Url>,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            response_sender,
            base_url,
        }
    }
}
