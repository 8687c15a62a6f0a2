//! Reference expansion
//!
//! Turns stored Workshops (Notion IDs) into `ExpandedWorkshop`s (Notion
//! objects). All references across a batch are resolved with a single
//! `find_by_ids` call and re-associated in memory. References that no longer
//! resolve are dropped; order and duplicates of the rest are kept.

use crate::domain::{ExpandedWorkshop, Notion, NotionId, Workshop};
use crate::error::Result;
use crate::port::NotionRepository;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Expand a batch of workshops with one notion lookup
pub async fn expand_all(
    notion_repo: &dyn NotionRepository,
    workshops: Vec<Workshop>,
) -> Result<Vec<ExpandedWorkshop>> {
    let referenced: BTreeSet<&NotionId> =
        workshops.iter().flat_map(|w| w.notions.iter()).collect();

    if referenced.is_empty() {
        return Ok(workshops
            .into_iter()
            .map(|w| w.into_expanded(Vec::new()))
            .collect());
    }

    let ids: Vec<NotionId> = referenced.into_iter().cloned().collect();
    let resolved: HashMap<NotionId, Notion> = notion_repo
        .find_by_ids(&ids)
        .await?
        .into_iter()
        .map(|notion| (notion.id.clone(), notion))
        .collect();

    if resolved.len() < ids.len() {
        debug!(
            referenced = ids.len(),
            resolved = resolved.len(),
            "Dropping dangling notion references"
        );
    }

    Ok(workshops
        .into_iter()
        .map(|workshop| {
            let notions = workshop
                .notions
                .iter()
                .filter_map(|id| resolved.get(id).cloned())
                .collect();
            workshop.into_expanded(notions)
        })
        .collect())
}

/// Expand a single workshop
pub async fn expand_one(
    notion_repo: &dyn NotionRepository,
    workshop: Workshop,
) -> Result<ExpandedWorkshop> {
    let mut expanded = expand_all(notion_repo, vec![workshop]).await?;
    expanded
        .pop()
        .ok_or_else(|| crate::error::AppError::Internal("expansion lost a workshop".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntityId, EntityName};
    use crate::port::notion_repository::MockNotionRepository;

    fn id(c: char) -> EntityId {
        EntityId::parse(&c.to_string().repeat(24)).unwrap()
    }

    fn notion(c: char, name: &str) -> Notion {
        Notion::new(id(c), EntityName::parse(name).unwrap(), 1)
    }

    fn workshop(c: char, refs: Vec<EntityId>) -> Workshop {
        Workshop::new(id(c), EntityName::parse("W").unwrap(), refs, 2)
    }

    #[tokio::test]
    async fn test_drops_dangling_and_keeps_order() {
        let mut repo = MockNotionRepository::new();
        repo.expect_find_by_ids()
            .times(1)
            .returning(|_| Ok(vec![notion('b', "CI/CD"), notion('a', "Docker")]));

        let w = workshop('f', vec![id('a'), id('d'), id('b'), id('a')]);
        let expanded = expand_one(&repo, w.clone()).await.unwrap();

        let names: Vec<&str> = expanded.notions.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Docker", "CI/CD", "Docker"]);
        // Stored form untouched
        assert_eq!(w.notions.len(), 4);
    }

    #[tokio::test]
    async fn test_batch_resolves_union_once() {
        let mut repo = MockNotionRepository::new();
        repo.expect_find_by_ids()
            .times(1)
            .withf(|ids| ids.to_vec() == vec![id('a'), id('b'), id('c')])
            .returning(|_| Ok(vec![notion('a', "A"), notion('c', "C")]));

        let batch = vec![
            workshop('e', vec![id('b'), id('a')]),
            workshop('f', vec![id('c'), id('a')]),
        ];
        let expanded = expand_all(&repo, batch).await.unwrap();

        assert_eq!(expanded.len(), 2);
        assert_eq!(expanded[0].notions, vec![notion('a', "A")]);
        assert_eq!(expanded[1].notions, vec![notion('c', "C"), notion('a', "A")]);
    }

    #[tokio::test]
    async fn test_no_references_skips_lookup() {
        let mut repo = MockNotionRepository::new();
        repo.expect_find_by_ids().times(0);

        let expanded = expand_all(&repo, vec![workshop('e', vec![])]).await.unwrap();
        assert!(expanded[0].notions.is_empty());
    }
}
