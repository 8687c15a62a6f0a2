// Domain Layer - Pure business logic and entities

pub mod error;
pub mod id;
pub mod name;
pub mod notion;
pub mod workshop;

// Re-exports
pub use error::DomainError;
pub use id::EntityId;
pub use name::{EntityName, MAX_NAME_CHARS};
pub use notion::{Notion, NotionId};
pub use workshop::{ExpandedWorkshop, Workshop, WorkshopId};
