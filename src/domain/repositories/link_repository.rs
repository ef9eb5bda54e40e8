//! Repository trait for Valentine link data access.

use crate::domain::entities::{Link, LinkCounts, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of an atomic insert-if-absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The row was created; carries the store-assigned `id` and `created_at`.
    Inserted(Link),
    /// A link with this slug already exists. Nothing was written.
    SlugTaken,
}

/// Repository interface for the link store.
///
/// Each method is a single independent round trip to the store. Implementations
/// must make [`LinkRepository::insert_if_absent`] atomic with respect to the slug:
/// of any number of concurrent inserts with one slug, exactly one reports
/// [`InsertOutcome::Inserted`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a link unless a row with the same slug exists.
    ///
    /// A uniqueness violation is reported as [`InsertOutcome::SlugTaken`], never as an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] when the store cannot be reached and
    /// [`AppError::Internal`] on other database errors.
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError>;

    /// Finds a link by exact slug match.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Sets `responded_yes = true` for the slug.
    ///
    /// Returns the number of matching rows (0 or 1). A link that already
    /// responded still counts as matched.
    async fn mark_responded_yes(&self, slug: &str) -> Result<u64, AppError>;

    /// Returns true if a link with this slug exists.
    async fn exists_by_slug(&self, slug: &str) -> Result<bool, AppError>;

    /// Counts all links and those that received a "yes".
    async fn count_links(&self) -> Result<LinkCounts, AppError>;
}
