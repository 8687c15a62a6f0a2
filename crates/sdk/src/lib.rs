//! Atelier SDK - Rust Client Library
//!
//! Typed async client for the Atelier catalog daemon.
//!
//! # Example
//!
//! ```no_run
//! use atelier_sdk::AtelierClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AtelierClient::connect("http://127.0.0.1:3000").await?;
//!
//!     let docker = client.create_notion("Docker").await?;
//!     let workshop = client
//!         .create_workshop("DevOps 101", vec![docker.id])
//!         .await?;
//!
//!     println!("Workshop created: {}", workshop.id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::AtelierClient;
pub use error::{code, Result, SdkError};
pub use types::{
    CreateNotionRequest, CreateWorkshopRequest, HealthResponse, ListWorkshopsRequest, Notion,
    Workshop,
};
