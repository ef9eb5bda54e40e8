//! Link entity representing a persisted Valentine link.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// A Valentine link with its response status.
///
/// Every field except `responded_yes` is immutable once the store has created
/// the record; `responded_yes` only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub recipient_name: String,
    pub theme: Theme,
    pub responded_yes: bool,
    pub created_at: DateTime<Utc>,
}

/// Response status of a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Pending,
    Accepted,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        slug: String,
        recipient_name: String,
        theme: Theme,
        responded_yes: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            slug,
            recipient_name,
            theme,
            responded_yes,
            created_at,
        }
    }

    pub fn status(&self) -> LinkStatus {
        if self.responded_yes {
            LinkStatus::Accepted
        } else {
            LinkStatus::Pending
        }
    }
}

/// Input data for creating a new link.
///
/// `recipient_name` is expected to be trimmed already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub slug: String,
    pub recipient_name: String,
    pub theme: Theme,
}

/// The recipient's answer on the Valentine page.
///
/// Only [`ResponseChoice::Yes`] has a persisted effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseChoice {
    Yes,
    No,
}

impl ResponseChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseChoice::Yes => "yes",
            ResponseChoice::No => "no",
        }
    }
}

/// Aggregate counts over all links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkCounts {
    pub total: i64,
    pub accepted: i64,
}
