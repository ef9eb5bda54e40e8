//! In-process link store backed by a concurrent hash map.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

use crate::domain::entities::{Link, LinkCounts, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;

/// Link store kept in memory for development and tests.
///
/// Slug uniqueness relies on the `DashMap` entry API: the shard holding a slug
/// stays write-locked between the vacancy check and the insert. Data does not
/// survive a restart.
pub struct MemoryLinkRepository {
    links: DashMap<String, Link>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self {
            links: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        match self.links.entry(new_link.slug.clone()) {
            Entry::Occupied(_) => Ok(InsertOutcome::SlugTaken),
            Entry::Vacant(vacant) => {
                let link = Link::new(
                    self.next_id.fetch_add(1, Ordering::Relaxed),
                    new_link.slug,
                    new_link.recipient_name,
                    new_link.theme,
                    false,
                    Utc::now(),
                );
                vacant.insert(link.clone());
                Ok(InsertOutcome::Inserted(link))
            }
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(slug).map(|entry| entry.value().clone()))
    }

    async fn mark_responded_yes(&self, slug: &str) -> Result<u64, AppError> {
        match self.links.get_mut(slug) {
            Some(mut entry) => {
                entry.responded_yes = true;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn exists_by_slug(&self, slug: &str) -> Result<bool, AppError> {
        Ok(self.links.contains_key(slug))
    }

    async fn count_links(&self) -> Result<LinkCounts, AppError> {
        let (total, accepted) = self.links.iter().fold((0i64, 0i64), |(t, a), entry| {
            (t + 1, a + i64::from(entry.responded_yes))
        });

        Ok(LinkCounts { total, accepted })
    }
}
