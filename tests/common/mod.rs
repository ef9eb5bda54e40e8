#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;
use valentine_links::domain::repositories::LinkRepository;
use valentine_links::domain::response_event::ResponseEvent;
use valentine_links::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository};
use valentine_links::state::AppState;

pub async fn create_test_link(pool: &PgPool, slug: &str, recipient_name: &str, theme: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO valentine_links (slug, recipient_name, theme) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(slug)
    .bind(recipient_name)
    .bind(theme)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_accepted_link(pool: &PgPool, slug: &str, recipient_name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO valentine_links (slug, recipient_name, responded_yes) VALUES ($1, $2, TRUE) RETURNING id",
    )
    .bind(slug)
    .bind(recipient_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM valentine_links")
        .fetch_one(pool)
        .await
        .unwrap()
}

fn build_state(
    repository: Arc<dyn LinkRepository>,
) -> (AppState, mpsc::Receiver<ResponseEvent>) {
    let (tx, rx) = mpsc::channel(100);
    (AppState::new(repository, tx, None), rx)
}

/// State over a fresh in-memory store; relative `fullUrl`s.
pub fn create_memory_state() -> (AppState, mpsc::Receiver<ResponseEvent>) {
    build_state(Arc::new(MemoryLinkRepository::new()))
}

/// State over the test database.
pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<ResponseEvent>) {
    build_state(Arc::new(PgLinkRepository::new(Arc::new(pool))))
}
