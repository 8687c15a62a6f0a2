// Port Layer - Interfaces for external dependencies

pub mod id_provider; // For deterministic testing
pub mod notion_repository;
pub mod time_provider;
pub mod workshop_repository;

// Re-exports
pub use id_provider::{IdProvider, ObjectIdProvider};
pub use notion_repository::NotionRepository;
pub use time_provider::{FixedTimeProvider, SystemTimeProvider, TimeProvider};
pub use workshop_repository::WorkshopRepository;
