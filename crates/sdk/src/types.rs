//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC wire shapes served by the daemon.

use serde::{Deserialize, Serialize};

/// A topic/tag entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notion {
    pub id: String,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A workshop with its notion references already expanded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    pub id: String,
    pub name: String,
    pub notions: Vec<Notion>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// notions.create.v1
#[derive(Debug, Clone, Serialize)]
pub struct CreateNotionRequest {
    pub name: String,
}

/// workshops.create.v1
#[derive(Debug, Clone, Serialize)]
pub struct CreateWorkshopRequest {
    pub name: String,
    /// Notion IDs, in the order the workshop should list them
    pub notions: Vec<String>,
}

/// workshops.list.v1
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListWorkshopsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct GetByIdRequest {
    pub id: String,
}

/// system.health.v1
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    #[serde(default)]
    pub uptime_seconds: u64,
}
