//! Shared wiring for integration tests: real SQLite stores behind the services.

#![allow(dead_code)]

use atelier_core::application::{NotionService, WorkshopService};
use atelier_core::port::{ObjectIdProvider, SystemTimeProvider};
use atelier_infra_sqlite::{
    create_pool, run_migrations, SqliteNotionRepository, SqliteWorkshopRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;

pub struct Catalog {
    pub pool: SqlitePool,
    pub notions: Arc<NotionService>,
    pub workshops: Arc<WorkshopService>,
}

/// Fresh in-memory catalog
pub async fn in_memory() -> Catalog {
    open(":memory:").await
}

/// Catalog over the given database URL or path, migrated
pub async fn open(database_url: &str) -> Catalog {
    let pool = create_pool(database_url).await.unwrap();
    run_migrations(&pool).await.unwrap();
    wire(pool)
}

pub fn wire(pool: SqlitePool) -> Catalog {
    let ids = Arc::new(ObjectIdProvider::new());
    let clock = Arc::new(SystemTimeProvider);
    let notion_repo = Arc::new(SqliteNotionRepository::new(pool.clone()));
    let workshop_repo = Arc::new(SqliteWorkshopRepository::new(pool.clone()));

    Catalog {
        notions: Arc::new(NotionService::new(
            notion_repo.clone(),
            ids.clone(),
            clock.clone(),
        )),
        workshops: Arc::new(WorkshopService::new(workshop_repo, notion_repo, ids, clock)),
        pool,
    }
}

/// On-disk database inside a fresh temp dir; the dir and any WAL/SHM
/// files go away when the returned guard drops.
pub fn temp_db(label: &str) -> (TempDir, String) {
    let dir = tempfile::Builder::new()
        .prefix(&format!("atelier_{}_", label))
        .tempdir()
        .unwrap();
    let path = dir.path().join("atelier.db").to_string_lossy().to_string();
    (dir, path)
}
