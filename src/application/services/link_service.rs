//! Slug registry: validation, uniqueness-enforcing creation and lookup of links.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::{Link, LinkCounts, NewLink, ResponseChoice, Theme};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;
use crate::utils::slug::validate_slug;

pub const MAX_RECIPIENT_NAME_LEN: usize = 100;

/// Result of an availability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugAvailability {
    Available,
    Taken,
}

impl SlugAvailability {
    pub fn is_available(&self) -> bool {
        matches!(self, SlugAvailability::Available)
    }
}

/// The slug registry, sole writer of link records.
///
/// Stateless between calls: it holds only the store handle and performs one
/// store round trip per operation (two for creation). Uniqueness is delegated
/// to the store's atomic insert-if-absent; the registry neither locks nor
/// retries, and a lost race is reported as [`AppError::Conflict`].
pub struct LinkService<L: LinkRepository + ?Sized = dyn LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new registry over the given store.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Reports whether a slug is free right now.
    ///
    /// This is not a reservation; a later [`Self::create_link`] can still lose
    /// the slug to a concurrent creator.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the slug is malformed.
    pub async fn check_availability(&self, slug: &str) -> Result<SlugAvailability, AppError> {
        validate_slug(slug)?;

        if self.link_repository.exists_by_slug(slug).await? {
            Ok(SlugAvailability::Taken)
        } else {
            Ok(SlugAvailability::Available)
        }
    }

    /// Creates a link.
    ///
    /// # Validation Order
    ///
    /// 1. Slug format
    /// 2. Slug availability
    /// 3. Recipient name presence and length (after trimming)
    /// 4. Theme membership
    ///
    /// The first failing check determines the error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for malformed input and
    /// [`AppError::Conflict`] if the slug is taken, including when a concurrent
    /// creator wins the insert after the availability check passed.
    pub async fn create_link(
        &self,
        slug: &str,
        recipient_name: &str,
        theme: &str,
    ) -> Result<Link, AppError> {
        validate_slug(slug)?;

        if self.link_repository.exists_by_slug(slug).await? {
            return Err(slug_conflict(slug));
        }

        let recipient_name = validate_recipient_name(recipient_name)?;
        let theme = parse_theme(theme)?;

        let new_link = NewLink {
            slug: slug.to_string(),
            recipient_name,
            theme,
        };

        match self.link_repository.insert_if_absent(new_link).await? {
            InsertOutcome::Inserted(link) => {
                info!(slug = %link.slug, id = link.id, theme = %link.theme, "Link created");
                metrics::counter!("valentine_links_created_total").increment(1);
                Ok(link)
            }
            InsertOutcome::SlugTaken => {
                debug!(slug, "Slug lost to a concurrent creator");
                Err(slug_conflict(slug))
            }
        }
    }

    /// Resolves a link by exact, case-sensitive slug match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this slug.
    pub async fn get_link_by_slug(&self, slug: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| link_not_found(slug))
    }

    /// Marks the link as accepted.
    ///
    /// Idempotent: repeating the call on an accepted link succeeds and changes
    /// nothing. The flag is never cleared.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this slug.
    pub async fn record_yes_response(&self, slug: &str) -> Result<(), AppError> {
        let matched = self.link_repository.mark_responded_yes(slug).await?;

        if matched == 0 {
            return Err(link_not_found(slug));
        }

        metrics::counter!("valentine_yes_responses_total").increment(1);
        debug!(slug, "Yes response recorded");
        Ok(())
    }

    /// Records the recipient's answer.
    ///
    /// Only [`ResponseChoice::Yes`] is persisted; a "no" is acknowledged after
    /// confirming the link exists and leaves the record untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this slug.
    pub async fn record_response(
        &self,
        slug: &str,
        response: ResponseChoice,
    ) -> Result<(), AppError> {
        match response {
            ResponseChoice::Yes => self.record_yes_response(slug).await,
            ResponseChoice::No => {
                if self.link_repository.exists_by_slug(slug).await? {
                    Ok(())
                } else {
                    Err(link_not_found(slug))
                }
            }
        }
    }

    /// Returns aggregate link counts.
    pub async fn link_counts(&self) -> Result<LinkCounts, AppError> {
        self.link_repository.count_links().await
    }
}

/// Trims and length-checks a recipient name.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the trimmed name is empty or longer
/// than [`MAX_RECIPIENT_NAME_LEN`] characters.
pub fn validate_recipient_name(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(AppError::bad_request(
            "Recipient name is required",
            json!({ "field": "recipientName", "reason": "missing" }),
        ));
    }

    let len = trimmed.chars().count();
    if len > MAX_RECIPIENT_NAME_LEN {
        return Err(AppError::bad_request(
            "Recipient name must be 100 characters or less",
            json!({ "field": "recipientName", "reason": "too-long", "provided_length": len }),
        ));
    }

    Ok(trimmed.to_string())
}

fn parse_theme(raw: &str) -> Result<Theme, AppError> {
    raw.parse::<Theme>().map_err(|_| {
        AppError::bad_request(
            format!("Theme must be one of: {}", Theme::names()),
            json!({ "field": "theme", "reason": "unknown-theme", "theme": raw }),
        )
    })
}

fn slug_conflict(slug: &str) -> AppError {
    metrics::counter!("valentine_slug_conflicts_total").increment(1);
    AppError::conflict(
        "This slug is already taken. Try a different one.",
        json!({ "field": "slug", "slug": slug }),
    )
}

fn link_not_found(slug: &str) -> AppError {
    AppError::not_found("Valentine link not found", json!({ "slug": slug }))
}
