// Notion Repository Port (Interface)

use crate::domain::{Notion, NotionId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Notion persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotionRepository: Send + Sync {
    /// Insert a new notion (ID and timestamps already assigned)
    async fn insert(&self, notion: &Notion) -> Result<()>;

    /// All notions in storage order
    async fn find_all(&self) -> Result<Vec<Notion>>;

    /// Find notion by ID
    async fn find_by_id(&self, id: &NotionId) -> Result<Option<Notion>>;

    /// Batch resolution: the notions among `ids` that exist, in any order.
    /// Unknown IDs are skipped, not reported.
    async fn find_by_ids(&self, ids: &[NotionId]) -> Result<Vec<Notion>>;
}
