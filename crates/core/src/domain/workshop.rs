// Workshop Domain Model

use super::id::EntityId;
use super::name::EntityName;
use super::notion::{Notion, NotionId};
use serde::{Deserialize, Serialize};

/// Workshop ID (24-hex reference token)
pub type WorkshopId = EntityId;

/// Workshop as stored: Notions are held by identifier only.
///
/// `notions` keeps submission order and duplicates. Nothing guarantees an
/// entry still resolves; a Notion may be gone by the time it is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    pub id: WorkshopId,
    pub name: String,
    pub notions: Vec<NotionId>,
    pub created_at: i64, // epoch ms
    pub updated_at: i64, // epoch ms
}

impl Workshop {
    /// Create a new Workshop
    ///
    /// # Arguments
    ///
    /// * `id` - Unique ID (injected, not generated)
    /// * `name` - Already-validated name
    /// * `notions` - Referenced Notion IDs, kept as submitted
    /// * `now_millis` - Creation timestamp in epoch ms
    pub fn new(id: WorkshopId, name: EntityName, notions: Vec<NotionId>, now_millis: i64) -> Self {
        Self {
            id,
            name: name.into_inner(),
            notions,
            created_at: now_millis,
            updated_at: now_millis,
        }
    }

    /// Attach resolved Notions, producing the read-side projection
    pub fn into_expanded(self, notions: Vec<Notion>) -> ExpandedWorkshop {
        ExpandedWorkshop {
            id: self.id,
            name: self.name,
            notions,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Workshop as returned to callers, with references replaced by Notions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedWorkshop {
    pub id: WorkshopId,
    pub name: String,
    pub notions: Vec<Notion>,
    pub created_at: i64,
    pub updated_at: i64,
}
