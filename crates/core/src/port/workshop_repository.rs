// Workshop Repository Port (Interface)

use crate::domain::{Workshop, WorkshopId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Workshop persistence.
///
/// Works on the stored form only: Notion references come back as IDs and
/// are never checked against the Notion store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkshopRepository: Send + Sync {
    /// Insert a workshop together with its ordered reference list (atomic per workshop)
    async fn insert(&self, workshop: &Workshop) -> Result<()>;

    /// Up to `limit` workshops in storage order
    async fn find_all(&self, limit: u32) -> Result<Vec<Workshop>>;

    /// Find workshop by ID
    async fn find_by_id(&self, id: &WorkshopId) -> Result<Option<Workshop>>;
}
