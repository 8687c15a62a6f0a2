//! Daemon settings
//!
//! Layered: built-in defaults, then an optional `atelier.toml` in the working
//! directory, then `ATELIER_*` environment variables.

use anyhow::{Context, Result};
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

const DEFAULT_DB_PATH: &str = "~/.atelier/atelier.db";
const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_ENVIRONMENT: &str = "development";

const ENV_PREFIX: &str = "ATELIER";
const CONFIG_FILE: &str = "atelier";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_path: String,
    pub rpc_host: String,
    pub rpc_port: u16,
    pub cors_origin: String,
    pub environment: String,
    pub log_format: LogFormat,
}

impl Settings {
    /// Load from `atelier.toml` (if present) and the process environment
    pub fn load() -> Result<Self> {
        Self::from_sources(
            File::with_name(CONFIG_FILE).required(false),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn from_sources<F>(file: F, env: Environment) -> Result<Self>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let mut settings: Settings = defaults()?
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to assemble configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        settings.db_path = shellexpand::tilde(&settings.db_path).into_owned();
        Ok(settings)
    }
}

fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>> {
    Ok(Config::builder()
        .set_default("db_path", DEFAULT_DB_PATH)?
        .set_default("rpc_host", DEFAULT_RPC_HOST)?
        .set_default("rpc_port", i64::from(DEFAULT_RPC_PORT))?
        .set_default("cors_origin", DEFAULT_CORS_ORIGIN)?
        .set_default("environment", DEFAULT_ENVIRONMENT)?
        .set_default("log_format", "pretty")?)
}
