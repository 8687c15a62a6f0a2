// Notion Domain Model

use super::id::EntityId;
use super::name::EntityName;
use serde::{Deserialize, Serialize};

/// Notion ID (24-hex reference token)
pub type NotionId = EntityId;

/// Named topic/tag, persisted independently of any Workshop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notion {
    pub id: NotionId,
    pub name: String,
    pub created_at: i64, // epoch ms
    pub updated_at: i64, // epoch ms
}

impl Notion {
    /// Create a new Notion
    ///
    /// # Arguments
    ///
    /// * `id` - Unique ID (injected, not generated)
    /// * `name` - Already-validated name
    /// * `now_millis` - Creation timestamp in epoch ms (injected, not system time)
    pub fn new(id: NotionId, name: EntityName, now_millis: i64) -> Self {
        Self {
            id,
            name: name.into_inner(),
            created_at: now_millis,
            updated_at: now_millis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape_is_camel_case() {
        let notion = Notion::new(
            EntityId::parse("aaaaaaaaaaaaaaaaaaaaaaaa").unwrap(),
            EntityName::parse("Docker").unwrap(),
            1000,
        );

        let value = serde_json::to_value(&notion).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "aaaaaaaaaaaaaaaaaaaaaaaa",
                "name": "Docker",
                "createdAt": 1000,
                "updatedAt": 1000,
            })
        );
    }
}
