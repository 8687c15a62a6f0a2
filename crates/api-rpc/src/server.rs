//! JSON-RPC Server
//!
//! JSON-RPC 2.0 over HTTP with a CORS layer in front.

use crate::handler::RpcHandler;
use crate::types::GetByIdRequest;
use atelier_core::application::{ListWorkshopsRequest, NotionService, WorkshopService};
use http::{header, HeaderValue, Method};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    /// 0 picks a free port
    pub port: u16,
    pub cors_origin: String,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(
        config: RpcServerConfig,
        notions: Arc<NotionService>,
        workshops: Arc<WorkshopService>,
    ) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(notions, workshops)),
        }
    }

    /// Start the JSON-RPC server, returning the bound address and its handle
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let cors = build_cors(&self.config.cors_origin)?;

        info!(
            host = %self.config.host,
            port = %self.config.port,
            cors_origin = %self.config.cors_origin,
            "Starting JSON-RPC server"
        );

        let server = Server::builder()
            .set_http_middleware(tower::ServiceBuilder::new().layer(cors))
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;

        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        let module = self.build_module()?;

        info!(addr = %local_addr, "JSON-RPC server started successfully");

        let handle = server.start(module);
        Ok((local_addr, handle))
    }

    fn build_module(&self) -> Result<RpcModule<()>, String> {
        let mut module = RpcModule::new(());

        // Notions
        let handler = self.handler.clone();
        module
            .register_async_method("notions.create.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: Value = params.parse()?;
                    handler.create_notion(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("notions.list.v1", move |_, _, _| {
                let handler = handler.clone();
                async move { handler.list_notions().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("notions.get.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: GetByIdRequest = params.parse()?;
                    handler.get_notion(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        // Workshops
        let handler = self.handler.clone();
        module
            .register_async_method("workshops.create.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: Value = params.parse()?;
                    handler.create_workshop(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("workshops.list.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    // No params at all means "use the defaults"
                    let req: Option<ListWorkshopsRequest> = params.parse()?;
                    handler.list_workshops(req.unwrap_or_default()).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("workshops.get.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: GetByIdRequest = params.parse()?;
                    handler.get_workshop(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        // System
        let handler = self.handler.clone();
        module
            .register_method("system.health.v1", move |_, _, _| handler.health())
            .map_err(|e| e.to_string())?;

        Ok(module)
    }
}

fn build_cors(origin: &str) -> Result<CorsLayer, String> {
    let origin: HeaderValue = origin
        .parse()
        .map_err(|e| format!("Invalid CORS origin {:?}: {}", origin, e))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RpcServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origin, "http://localhost:5173");
    }

    #[test]
    fn test_cors_origin_must_be_header_value() {
        assert!(build_cors("http://localhost:5173").is_ok());
        assert!(build_cors("http://bad\norigin").is_err());
    }
}
