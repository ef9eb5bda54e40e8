//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkCounts, NewLink, Theme};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::{AppError, map_sqlx_error};
use crate::utils::db_error::is_unique_violation_on_slug;

const LINK_COLUMNS: &str = "id, slug, recipient_name, theme, responded_yes, created_at";

/// PostgreSQL repository for Valentine links.
///
/// Slug uniqueness is enforced by the `valentine_links_slug_key` constraint;
/// inserts use `ON CONFLICT (slug) DO NOTHING` so a lost race is an empty
/// result rather than an error.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    slug: String,
    recipient_name: String,
    theme: String,
    responded_yes: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<LinkRow> for Link {
    type Error = AppError;

    fn try_from(row: LinkRow) -> Result<Self, Self::Error> {
        let theme: Theme = row.theme.parse().map_err(|_| {
            AppError::internal(
                "Stored link has an unknown theme",
                json!({ "slug": row.slug, "theme": row.theme }),
            )
        })?;

        Ok(Link::new(
            row.id,
            row.slug,
            row.recipient_name,
            theme,
            row.responded_yes,
            row.created_at,
        ))
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert_if_absent(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let sql = format!(
            r#"
            INSERT INTO valentine_links (slug, recipient_name, theme)
            VALUES ($1, $2, $3)
            ON CONFLICT (slug) DO NOTHING
            RETURNING {LINK_COLUMNS}
            "#
        );

        let result = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(&new_link.slug)
            .bind(&new_link.recipient_name)
            .bind(new_link.theme.as_str())
            .fetch_optional(self.pool.as_ref())
            .await;

        match result {
            Ok(Some(row)) => Ok(InsertOutcome::Inserted(row.try_into()?)),
            Ok(None) => Ok(InsertOutcome::SlugTaken),
            Err(e) if is_unique_violation_on_slug(&e) => Ok(InsertOutcome::SlugTaken),
            Err(e) => Err(map_sqlx_error(e)),
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM valentine_links WHERE slug = $1 LIMIT 1");

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Link::try_from).transpose()
    }

    async fn mark_responded_yes(&self, slug: &str) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE valentine_links SET responded_yes = TRUE WHERE slug = $1")
            .bind(slug)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn exists_by_slug(&self, slug: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM valentine_links WHERE slug = $1)",
        )
        .bind(slug)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn count_links(&self) -> Result<LinkCounts, AppError> {
        let (total, accepted): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*)                                   AS total,
                COUNT(*) FILTER (WHERE responded_yes)      AS accepted
            FROM valentine_links
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(LinkCounts { total, accepted })
    }
}
