//! JSON-RPC API Layer
//!
//! JSON-RPC 2.0 over HTTP for the Atelier catalog. Every method delegates to
//! the core services; this crate only decodes params, maps errors to codes
//! and applies CORS.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;

pub use server::{RpcServer, RpcServerConfig};
