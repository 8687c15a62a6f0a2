//! Atelier CLI - Command-line interface for the Atelier catalog daemon

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:3000";

/// Returned by the daemon when a well-formed ID matches nothing
const NOT_FOUND: i32 = 4001;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Atelier notion & workshop catalog CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, global = true, env = "ATELIER_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage notions
    Notion {
        #[command(subcommand)]
        command: NotionCommand,
    },

    /// Manage workshops
    Workshop {
        #[command(subcommand)]
        command: WorkshopCommand,
    },

    /// Check that the daemon is up
    Health,
}

#[derive(Subcommand)]
enum NotionCommand {
    /// Create a notion
    Create {
        /// Notion name (1-200 characters)
        name: String,
    },

    /// List all notions
    List,

    /// Show one notion
    Get {
        /// Notion ID (24 hex characters)
        id: String,
    },
}

#[derive(Subcommand)]
enum WorkshopCommand {
    /// Create a workshop
    Create {
        /// Workshop name (1-200 characters)
        name: String,

        /// Referenced notion ID (repeatable, order is kept)
        #[arg(short, long = "notion")]
        notions: Vec<String>,
    },

    /// List workshops
    List {
        /// Maximum number of workshops (daemon default: 100)
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Show one workshop
    Get {
        /// Workshop ID (24 hex characters)
        id: String,
    },
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
    data: Option<Value>,
}

impl std::fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RPC error ({}): {}", self.code, self.message)?;
        if let Some(details) = self
            .data
            .as_ref()
            .and_then(|d| d.get("details"))
            .and_then(Value::as_str)
        {
            write!(f, " - {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for JsonRpcError {}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Notion {
    id: String,
    name: String,
    created_at: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Workshop {
    id: String,
    name: String,
    notions: Vec<Notion>,
    created_at: i64,
}

#[derive(Tabled)]
struct NotionRow {
    id: String,
    name: String,
    created: String,
}

impl From<Notion> for NotionRow {
    fn from(notion: Notion) -> Self {
        Self {
            id: notion.id,
            name: notion.name,
            created: format_millis(notion.created_at),
        }
    }
}

#[derive(Tabled)]
struct WorkshopRow {
    id: String,
    name: String,
    notions: String,
    created: String,
}

impl From<Workshop> for WorkshopRow {
    fn from(workshop: Workshop) -> Self {
        let notions = workshop
            .notions
            .iter()
            .map(|n| n.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            id: workshop.id,
            name: workshop.name,
            notions,
            created: format_millis(workshop.created_at),
        }
    }
}

fn format_millis(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| millis.to_string())
}

async fn call_rpc(url: &str, method: &str, params: Value) -> Result<Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to daemon")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        return Err(error.into());
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

/// `Ok(None)` when the daemon reports NOT_FOUND
async fn call_rpc_optional(url: &str, method: &str, params: Value) -> Result<Option<Value>> {
    match call_rpc(url, method, params).await {
        Ok(value) => Ok(Some(value)),
        Err(e) => match e.downcast_ref::<JsonRpcError>() {
            Some(rpc) if rpc.code == NOT_FOUND => Ok(None),
            _ => Err(e),
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let url = cli.rpc_url.as_str();

    match cli.command {
        Commands::Notion { command } => match command {
            NotionCommand::Create { name } => {
                let result = call_rpc(url, "notions.create.v1", json!({ "name": name })).await?;
                let notion: Notion = serde_json::from_value(result)?;

                println!("{}", "✓ Notion created".green().bold());
                println!();
                println!("{}", Table::new(vec![NotionRow::from(notion)]));
            }

            NotionCommand::List => {
                let result = call_rpc(url, "notions.list.v1", json!({})).await?;
                let notions: Vec<Notion> = serde_json::from_value(result)?;

                if notions.is_empty() {
                    println!("{}", "No notions yet".yellow());
                } else {
                    let rows: Vec<NotionRow> = notions.into_iter().map(NotionRow::from).collect();
                    println!("{}", Table::new(rows));
                }
            }

            NotionCommand::Get { id } => {
                match call_rpc_optional(url, "notions.get.v1", json!({ "id": id })).await? {
                    Some(result) => {
                        let notion: Notion = serde_json::from_value(result)?;
                        println!("{}", Table::new(vec![NotionRow::from(notion)]));
                    }
                    None => println!("{}", format!("Notion {} not found", id).yellow()),
                }
            }
        },

        Commands::Workshop { command } => match command {
            WorkshopCommand::Create { name, notions } => {
                let params = json!({ "name": name, "notions": notions });
                let result = call_rpc(url, "workshops.create.v1", params).await?;
                let workshop: Workshop = serde_json::from_value(result)?;

                println!("{}", "✓ Workshop created".green().bold());
                let dropped = notions.len().saturating_sub(workshop.notions.len());
                if dropped > 0 {
                    println!(
                        "{}",
                        format!("  {} notion reference(s) did not resolve", dropped).yellow()
                    );
                }
                println!();
                println!("{}", Table::new(vec![WorkshopRow::from(workshop)]));
            }

            WorkshopCommand::List { limit } => {
                let params = match limit {
                    Some(limit) => json!({ "limit": limit }),
                    None => json!({}),
                };
                let result = call_rpc(url, "workshops.list.v1", params).await?;
                let workshops: Vec<Workshop> = serde_json::from_value(result)?;

                if workshops.is_empty() {
                    println!("{}", "No workshops yet".yellow());
                } else {
                    let rows: Vec<WorkshopRow> =
                        workshops.into_iter().map(WorkshopRow::from).collect();
                    println!("{}", Table::new(rows));
                }
            }

            WorkshopCommand::Get { id } => {
                match call_rpc_optional(url, "workshops.get.v1", json!({ "id": id })).await? {
                    Some(result) => {
                        let workshop: Workshop = serde_json::from_value(result)?;
                        println!("{}", Table::new(vec![WorkshopRow::from(workshop)]));
                    }
                    None => println!("{}", format!("Workshop {} not found", id).yellow()),
                }
            }
        },

        Commands::Health => {
            println!("{}", "System Status".cyan().bold());
            println!();

            match call_rpc(url, "system.health.v1", json!({})).await {
                Ok(health) => {
                    println!("  {} {}", "RPC URL:".bold(), url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!("  {} {}", "Version:".bold(), health["version"]);
                    println!("  {} {}", "Timestamp:".bold(), health["timestamp"]);
                    println!("  {} {} seconds", "Uptime:".bold(), health["uptimeSeconds"]);
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}
