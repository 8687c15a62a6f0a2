// Create Notion Use Case

use crate::application::store_failure;
use crate::application::validation::CreateNotionRequest;
use crate::domain::Notion;
use crate::error::Result;
use crate::port::{IdProvider, NotionRepository, TimeProvider};
use tracing::info;

/// Execute create-notion use case
///
/// # Arguments
///
/// * `notion_repo` - Notion store
/// * `id_provider` - ID generator (injected for determinism)
/// * `time_provider` - Time provider (injected for determinism)
/// * `req` - Create request (validated here, before any store call)
pub async fn execute(
    notion_repo: &dyn NotionRepository,
    id_provider: &dyn IdProvider,
    time_provider: &dyn TimeProvider,
    req: CreateNotionRequest,
) -> Result<Notion> {
    let valid = req.validate()?;

    let notion = Notion::new(
        id_provider.generate_id(),
        valid.name,
        time_provider.now_millis(),
    );

    notion_repo
        .insert(&notion)
        .await
        .map_err(store_failure("Failed to create notion"))?;

    info!(notion_id = %notion.id, "Notion created");
    Ok(notion)
}
