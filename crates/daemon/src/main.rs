//! Atelier Daemon - Main Entry Point
//! Notion & Workshop catalog served over JSON-RPC

mod settings;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use atelier_api_rpc::{RpcServer, RpcServerConfig};
use atelier_core::application::{NotionService, WorkshopService};
use atelier_core::port::{ObjectIdProvider, SystemTimeProvider};
use atelier_infra_sqlite::{
    create_pool, run_migrations, SqliteNotionRepository, SqliteWorkshopRepository,
};
use settings::{LogFormat, Settings};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load configuration
    let settings = Settings::load()?;

    // 2. Initialize logging
    init_logging(settings.log_format);

    info!(
        environment = %settings.environment,
        "Atelier daemon v{} starting...",
        VERSION
    );

    // 3. Initialize database
    info!(db_path = %settings.db_path, "Initializing database...");
    ensure_parent_dir(&settings.db_path)?;

    let pool = create_pool(&settings.db_path)
        .await
        .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    // 4. Setup dependencies (DI wiring)
    let time_provider = Arc::new(SystemTimeProvider);
    let id_provider = Arc::new(ObjectIdProvider::new());
    let notion_repo = Arc::new(SqliteNotionRepository::new(pool.clone()));
    let workshop_repo = Arc::new(SqliteWorkshopRepository::new(pool.clone()));

    let notion_service = Arc::new(NotionService::new(
        notion_repo.clone(),
        id_provider.clone(),
        time_provider.clone(),
    ));
    let workshop_service = Arc::new(WorkshopService::new(
        workshop_repo,
        notion_repo,
        id_provider,
        time_provider,
    ));

    // 5. Start JSON-RPC server
    info!("Starting JSON-RPC server...");
    let rpc_config = RpcServerConfig {
        host: settings.rpc_host.clone(),
        port: settings.rpc_port,
        cors_origin: settings.cors_origin.clone(),
    };
    let (addr, rpc_handle) = RpcServer::new(rpc_config, notion_service, workshop_service)
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("RPC server start failed: {}", e))?;

    info!(%addr, "System ready");
    info!("Press Ctrl+C to shutdown");

    // 6. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received. Exiting gracefully...");

    // 7. Graceful shutdown
    rpc_handle
        .stop()
        .map_err(|e| anyhow::anyhow!("RPC server stop failed: {}", e))?;
    rpc_handle.stopped().await;
    pool.close().await;

    info!("Shutdown complete.");

    Ok(())
}

fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("atelier=info"))
        .expect("Failed to create env filter");

    match format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}

/// SQLite creates the file but not its directory
fn ensure_parent_dir(db_path: &str) -> Result<()> {
    if db_path.contains(":memory:") {
        return Ok(());
    }
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
