// Notion Service - create/list/fetch over the Notion store

pub mod create;

use crate::application::store_failure;
use crate::application::validation::CreateNotionRequest;
use crate::domain::{EntityId, Notion};
use crate::error::Result;
use crate::port::{IdProvider, NotionRepository, TimeProvider};
use std::sync::Arc;

/// Notion Service
pub struct NotionService {
    notion_repo: Arc<dyn NotionRepository>,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
}

impl NotionService {
    pub fn new(
        notion_repo: Arc<dyn NotionRepository>,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            notion_repo,
            id_provider,
            time_provider,
        }
    }

    /// Create a notion
    pub async fn create(&self, req: CreateNotionRequest) -> Result<Notion> {
        create::execute(
            self.notion_repo.as_ref(),
            self.id_provider.as_ref(),
            self.time_provider.as_ref(),
            req,
        )
        .await
    }

    /// Every stored notion, in storage order
    pub async fn list(&self) -> Result<Vec<Notion>> {
        self.notion_repo
            .find_all()
            .await
            .map_err(store_failure("Failed to fetch notions"))
    }

    /// Fetch one notion. A well-formed but unknown ID is `Ok(None)`.
    pub async fn get(&self, id: &str) -> Result<Option<Notion>> {
        let id = EntityId::parse(id)?;
        self.notion_repo
            .find_by_id(&id)
            .await
            .map_err(store_failure("Failed to fetch notion"))
    }
}
