// List Workshops Use Case

use crate::application::expansion;
use crate::application::limit::coerce_limit;
use crate::application::store_failure;
use crate::domain::ExpandedWorkshop;
use crate::error::Result;
use crate::port::{NotionRepository, WorkshopRepository};
use serde::{Deserialize, Serialize};
use tracing::debug;

const OPERATION: &str = "Failed to fetch workshops";

/// List request. `limit` is loosely typed on purpose: number or numeric
/// string, coerced by `coerce_limit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListWorkshopsRequest {
    #[serde(default)]
    pub limit: Option<serde_json::Value>,
}

impl ListWorkshopsRequest {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit.into()),
        }
    }
}

/// Execute list-workshops use case
pub async fn execute(
    workshop_repo: &dyn WorkshopRepository,
    notion_repo: &dyn NotionRepository,
    req: ListWorkshopsRequest,
) -> Result<Vec<ExpandedWorkshop>> {
    let limit = coerce_limit(req.limit.as_ref())?;

    let workshops = workshop_repo
        .find_all(limit)
        .await
        .map_err(store_failure(OPERATION))?;

    debug!(limit, count = workshops.len(), "Workshops fetched");

    expansion::expand_all(notion_repo, workshops)
        .await
        .map_err(store_failure(OPERATION))
}
