//! Acknowledgement event for a "yes" answered on the Valentine page.

use chrono::{DateTime, Utc};

/// An in-memory "yes" acknowledgement waiting to be persisted.
///
/// Created by the page handler after the celebration has been rendered and sent
/// to the background worker via a bounded channel. The handler never waits for
/// the outcome.
///
/// # Usage Flow
///
/// 1. Created in [`crate::web::handlers::yes_handler`]
/// 2. Sent to channel with `try_send` (non-blocking)
/// 3. Processed by [`crate::domain::response_worker::run_response_worker`]
#[derive(Debug, Clone)]
pub struct ResponseEvent {
    pub slug: String,
    pub answered_at: DateTime<Utc>,
}

impl ResponseEvent {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            answered_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_event_creation() {
        let before = Utc::now();
        let event = ResponseEvent::new("anna-2026");

        assert_eq!(event.slug, "anna-2026");
        assert!(event.answered_at >= before);
    }
}
