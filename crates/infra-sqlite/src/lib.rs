// Atelier Infrastructure - SQLite Adapter
// Implements: NotionRepository, WorkshopRepository

mod connection;
mod error;
mod migration;
mod notion_repository;
mod workshop_repository;

pub use connection::create_pool;
pub use migration::run_migrations;
pub use notion_repository::SqliteNotionRepository;
pub use workshop_repository::SqliteWorkshopRepository;

// sqlx::Error -> AppError goes through error::map_sqlx_error (orphan rule)
