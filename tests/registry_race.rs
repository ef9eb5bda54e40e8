mod common;

use sqlx::PgPool;
use std::sync::Arc;
use valentine_links::application::services::LinkService;
use valentine_links::domain::repositories::LinkRepository;
use valentine_links::error::AppError;
use valentine_links::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository};

const CREATORS: usize = 16;

async fn race(service: Arc<LinkService>) -> (usize, usize) {
    let mut handles = Vec::with_capacity(CREATORS);
    for i in 0..CREATORS {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .create_link("contested", &format!("Creator {i}"), "classic")
                .await
        }));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(AppError::Conflict { .. }) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    (created, conflicts)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_in_memory() {
    let repo: Arc<dyn LinkRepository> = Arc::new(MemoryLinkRepository::new());
    let service = Arc::new(LinkService::new(repo.clone()));

    let (created, conflicts) = race(service).await;

    assert_eq!(created, 1);
    assert_eq!(conflicts, CREATORS - 1);
    assert_eq!(repo.count_links().await.unwrap().total, 1);
}

#[sqlx::test]
async fn test_concurrent_creates_postgres(pool: PgPool) {
    let repo: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    let service = Arc::new(LinkService::new(repo));

    let (created, conflicts) = race(service).await;

    assert_eq!(created, 1);
    assert_eq!(conflicts, CREATORS - 1);
    assert_eq!(common::count_links(&pool).await, 1);
}
