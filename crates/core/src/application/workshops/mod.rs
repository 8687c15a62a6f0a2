// Workshop Service - create/list/fetch with notion expansion on every read

pub mod create;
pub mod list;

pub use list::ListWorkshopsRequest;

use crate::application::expansion;
use crate::application::store_failure;
use crate::application::validation::CreateWorkshopRequest;
use crate::domain::{EntityId, ExpandedWorkshop};
use crate::error::Result;
use crate::port::{IdProvider, NotionRepository, TimeProvider, WorkshopRepository};
use std::sync::Arc;

/// Workshop Service
pub struct WorkshopService {
    workshop_repo: Arc<dyn WorkshopRepository>,
    notion_repo: Arc<dyn NotionRepository>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl WorkshopService {
    pub fn new(
        workshop_repo: Arc<dyn WorkshopRepository>,
        notion_repo: Arc<dyn NotionRepository>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            workshop_repo,
            notion_repo,
            id_provider,
            time_provider,
        }
    }

    /// Create a workshop and return it expanded
    pub async fn create(&self, req: CreateWorkshopRequest) -> Result<ExpandedWorkshop> {
        create::execute(
            self.workshop_repo.as_ref(),
            self.notion_repo.as_ref(),
            self.id_provider.as_ref(),
            self.time_provider.as_ref(),
            req,
        )
        .await
    }

    /// List up to `limit` workshops (default 100), each expanded
    pub async fn list(&self, req: ListWorkshopsRequest) -> Result<Vec<ExpandedWorkshop>> {
        list::execute(self.workshop_repo.as_ref(), self.notion_repo.as_ref(), req).await
    }

    /// Fetch one workshop, expanded. A well-formed but unknown ID is `Ok(None)`.
    pub async fn get(&self, id: &str) -> Result<Option<ExpandedWorkshop>> {
        const OPERATION: &str = "Failed to fetch workshop";

        let id = EntityId::parse(id)?;
        let Some(workshop) = self
            .workshop_repo
            .find_by_id(&id)
            .await
            .map_err(store_failure(OPERATION))?
        else {
            return Ok(None);
        };

        expansion::expand_one(self.notion_repo.as_ref(), workshop)
            .await
            .map(Some)
            .map_err(store_failure(OPERATION))
    }
}
