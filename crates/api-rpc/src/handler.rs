//! RPC Method Handlers
//!
//! One method per JSON-RPC method; each decodes params and delegates to a
//! core service.

use crate::error::{not_found, to_rpc_error};
use crate::types::{GetByIdRequest, HealthResponse};
use atelier_core::application::{
    CreateNotionRequest, CreateWorkshopRequest, ListWorkshopsRequest, NotionService,
    WorkshopService,
};
use atelier_core::domain::{ExpandedWorkshop, Notion};
use jsonrpsee::types::ErrorObjectOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

/// RPC Handler with injected services
pub struct RpcHandler {
    notions: Arc<NotionService>,
    workshops: Arc<WorkshopService>,
    start_time: Instant,
}

impl RpcHandler {
    pub fn new(notions: Arc<NotionService>, workshops: Arc<WorkshopService>) -> Self {
        Self {
            notions,
            workshops,
            start_time: Instant::now(),
        }
    }

    /// notions.create.v1
    pub async fn create_notion(&self, params: Value) -> Result<Notion, ErrorObjectOwned> {
        let req = CreateNotionRequest::from_json(params).map_err(to_rpc_error)?;
        self.notions.create(req).await.map_err(to_rpc_error)
    }

    /// notions.list.v1
    pub async fn list_notions(&self) -> Result<Vec<Notion>, ErrorObjectOwned> {
        self.notions.list().await.map_err(to_rpc_error)
    }

    /// notions.get.v1
    pub async fn get_notion(&self, params: GetByIdRequest) -> Result<Notion, ErrorObjectOwned> {
        self.notions
            .get(&params.id)
            .await
            .map_err(to_rpc_error)?
            .ok_or_else(|| not_found("Notion"))
    }

    /// workshops.create.v1
    pub async fn create_workshop(
        &self,
        params: Value,
    ) -> Result<ExpandedWorkshop, ErrorObjectOwned> {
        let req = CreateWorkshopRequest::from_json(params).map_err(to_rpc_error)?;
        self.workshops.create(req).await.map_err(to_rpc_error)
    }

    /// workshops.list.v1
    pub async fn list_workshops(
        &self,
        params: ListWorkshopsRequest,
    ) -> Result<Vec<ExpandedWorkshop>, ErrorObjectOwned> {
        self.workshops.list(params).await.map_err(to_rpc_error)
    }

    /// workshops.get.v1
    pub async fn get_workshop(
        &self,
        params: GetByIdRequest,
    ) -> Result<ExpandedWorkshop, ErrorObjectOwned> {
        self.workshops
            .get(&params.id)
            .await
            .map_err(to_rpc_error)?
            .ok_or_else(|| not_found("Workshop"))
    }

    /// system.health.v1
    pub fn health(&self) -> Result<HealthResponse, ErrorObjectOwned> {
        Ok(HealthResponse {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: atelier_core::VERSION.to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        })
    }
}
