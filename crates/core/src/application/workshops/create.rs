// Create Workshop Use Case

use crate::application::expansion;
use crate::application::store_failure;
use crate::application::validation::CreateWorkshopRequest;
use crate::domain::{ExpandedWorkshop, Workshop};
use crate::error::{AppError, Result};
use crate::port::{IdProvider, NotionRepository, TimeProvider, WorkshopRepository};
use tracing::info;

const OPERATION: &str = "Failed to create workshop";

/// Execute create-workshop use case
///
/// References are stored exactly as submitted (no existence check). The
/// returned value is a read-through of the stored record, expanded.
pub async fn execute(
    workshop_repo: &dyn WorkshopRepository,
    notion_repo: &dyn NotionRepository,
    id_provider: &dyn IdProvider,
    time_provider: &dyn TimeProvider,
    req: CreateWorkshopRequest,
) -> Result<ExpandedWorkshop> {
    let valid = req.validate()?;

    let workshop = Workshop::new(
        id_provider.generate_id(),
        valid.name,
        valid.notions,
        time_provider.now_millis(),
    );

    workshop_repo
        .insert(&workshop)
        .await
        .map_err(store_failure(OPERATION))?;

    info!(
        workshop_id = %workshop.id,
        references = workshop.notions.len(),
        "Workshop created"
    );

    let stored = workshop_repo
        .find_by_id(&workshop.id)
        .await
        .map_err(store_failure(OPERATION))?
        .ok_or_else(|| {
            AppError::Internal(format!(
                "created workshop {} not found in read-back",
                workshop.id
            ))
        })?;

    expansion::expand_one(notion_repo, stored)
        .await
        .map_err(store_failure(OPERATION))
}
