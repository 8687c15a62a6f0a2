//! RPC Request/Response Types
//!
//! Create payloads travel as raw JSON objects and are validated in core.
//! Only the shapes below are decoded here.

use serde::{Deserialize, Serialize};

/// notions.get.v1 / workshops.get.v1
#[derive(Debug, Deserialize)]
pub struct GetByIdRequest {
    pub id: String,
}

/// system.health.v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339, UTC
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: u64,
}
