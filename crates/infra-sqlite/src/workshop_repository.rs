// SQLite WorkshopRepository Implementation

use crate::error::map_sqlx_error;
use crate::notion_repository::LOOKUP_CHUNK;
use async_trait::async_trait;
use atelier_core::domain::{EntityId, NotionId, Workshop, WorkshopId};
use atelier_core::error::{AppError, Result};
use atelier_core::port::WorkshopRepository;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;

pub struct SqliteWorkshopRepository {
    pool: SqlitePool,
}

impl SqliteWorkshopRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Reference lists for a set of workshops, each in submission order
    async fn load_references(
        &self,
        workshop_ids: &[&str],
    ) -> Result<HashMap<String, Vec<NotionId>>> {
        let mut refs: HashMap<String, Vec<NotionId>> = HashMap::new();

        for chunk in workshop_ids.chunks(LOOKUP_CHUNK) {
            let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
                "SELECT workshop_id, notion_id FROM workshop_notions WHERE workshop_id IN (",
            );
            let mut separated = query.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(") ORDER BY workshop_id ASC, position ASC");

            let rows: Vec<ReferenceRow> = query
                .build_query_as()
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            for row in rows {
                let notion_id = parse_stored_id("workshop_notions.notion_id", &row.notion_id)?;
                refs.entry(row.workshop_id).or_default().push(notion_id);
            }
        }

        Ok(refs)
    }
}

#[async_trait]
impl WorkshopRepository for SqliteWorkshopRepository {
    async fn insert(&self, workshop: &Workshop) -> Result<()> {
        // Workshop row and its references land together or not at all
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query(
            r#"
            INSERT INTO workshops (id, name, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(workshop.id.as_str())
        .bind(&workshop.name)
        .bind(workshop.created_at)
        .bind(workshop.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        for (position, notion_id) in workshop.notions.iter().enumerate() {
            sqlx::query(
                "INSERT INTO workshop_notions (workshop_id, position, notion_id) VALUES (?, ?, ?)",
            )
            .bind(workshop.id.as_str())
            .bind(position as i64)
            .bind(notion_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        }

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn find_all(&self, limit: u32) -> Result<Vec<Workshop>> {
        let rows: Vec<WorkshopRow> = sqlx::query_as(
            r#"
            SELECT id, name, created_at, updated_at
            FROM workshops
            ORDER BY rowid ASC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
        let mut refs = self.load_references(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let notions = refs.remove(&row.id).unwrap_or_default();
                row.into_workshop(notions)
            })
            .collect()
    }

    async fn find_by_id(&self, id: &WorkshopId) -> Result<Option<Workshop>> {
        let row: Option<WorkshopRow> = sqlx::query_as(
            "SELECT id, name, created_at, updated_at FROM workshops WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let notions = self
            .load_references(&[row.id.as_str()])
            .await?
            .remove(&row.id)
            .unwrap_or_default();

        row.into_workshop(notions).map(Some)
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct WorkshopRow {
    id: String,
    name: String,
    created_at: i64,
    updated_at: i64,
}

impl WorkshopRow {
    fn into_workshop(self, notions: Vec<NotionId>) -> Result<Workshop> {
        Ok(Workshop {
            id: parse_stored_id("workshops.id", &self.id)?,
            name: self.name,
            notions,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ReferenceRow {
    workshop_id: String,
    notion_id: String,
}

fn parse_stored_id(column: &str, raw: &str) -> Result<EntityId> {
    EntityId::parse(raw)
        .map_err(|_| AppError::Persistence(format!("Corrupt row: invalid {} {:?}", column, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};
    use atelier_core::domain::EntityName;

    async fn setup_test_repo() -> (SqlitePool, SqliteWorkshopRepository) {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        (pool.clone(), SqliteWorkshopRepository::new(pool))
    }

    fn id(n: u8) -> EntityId {
        EntityId::from_bytes([n; 12])
    }

    fn workshop(n: u8, name: &str, notions: Vec<EntityId>) -> Workshop {
        Workshop::new(id(n), EntityName::parse(name).unwrap(), notions, 1000)
    }

    #[tokio::test]
    async fn test_insert_and_find_keeps_raw_references() {
        let (_pool, repo) = setup_test_repo().await;
        // Dangling, duplicated, unsorted: all stored as given
        let refs = vec![id(0x30), id(0x10), id(0x30), id(0x20)];
        let devops = workshop(1, "DevOps 101", refs.clone());

        repo.insert(&devops).await.unwrap();

        let found = repo.find_by_id(&devops.id).await.unwrap().unwrap();
        assert_eq!(found, devops);
        assert_eq!(found.notions, refs);
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let (_pool, repo) = setup_test_repo().await;
        assert!(repo.find_by_id(&id(9)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_workshop_without_references() {
        let (_pool, repo) = setup_test_repo().await;
        let solo = workshop(1, "Solo", vec![]);
        repo.insert(&solo).await.unwrap();

        let found = repo.find_by_id(&solo.id).await.unwrap().unwrap();
        assert!(found.notions.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_respects_limit_and_order() {
        let (_pool, repo) = setup_test_repo().await;
        for n in 1..=5u8 {
            let w = workshop(6 - n, &format!("W{}", n), vec![id(0x40 + n)]);
            repo.insert(&w).await.unwrap();
        }

        let two = repo.find_all(2).await.unwrap();
        assert_eq!(two.len(), 2);
        assert_eq!(two[0].name, "W1");
        assert_eq!(two[1].name, "W2");
        assert_eq!(two[1].notions, vec![id(0x42)]);

        let all = repo.find_all(100).await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[4].notions, vec![id(0x45)]);
    }

    #[tokio::test]
    async fn test_failed_insert_leaves_nothing_behind() {
        let (pool, repo) = setup_test_repo().await;
        let first = workshop(1, "First", vec![id(0x10)]);
        repo.insert(&first).await.unwrap();

        // Same ID again: the workshop row conflicts, so no reference rows may leak
        let clash = workshop(1, "Clash", vec![id(0x20), id(0x21)]);
        let err = repo.insert(&clash).await.unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));

        let ref_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workshop_notions")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(ref_rows, 1);
    }
}
