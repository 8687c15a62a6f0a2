// SQLite NotionRepository Implementation

use crate::error::map_sqlx_error;
use async_trait::async_trait;
use atelier_core::domain::{EntityId, Notion, NotionId};
use atelier_core::error::{AppError, Result};
use atelier_core::port::NotionRepository;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Upper bound on bound parameters per `IN (...)` lookup
pub(crate) const LOOKUP_CHUNK: usize = 500;

pub struct SqliteNotionRepository {
    pool: SqlitePool,
}

impl SqliteNotionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotionRepository for SqliteNotionRepository {
    async fn insert(&self, notion: &Notion) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO notions (id, name, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(notion.id.as_str())
        .bind(&notion.name)
        .bind(notion.created_at)
        .bind(notion.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Notion>> {
        let rows: Vec<NotionRow> = sqlx::query_as(
            r#"
            SELECT id, name, created_at, updated_at
            FROM notions
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(NotionRow::into_notion).collect()
    }

    async fn find_by_id(&self, id: &NotionId) -> Result<Option<Notion>> {
        let row: Option<NotionRow> = sqlx::query_as(
            "SELECT id, name, created_at, updated_at FROM notions WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(NotionRow::into_notion).transpose()
    }

    async fn find_by_ids(&self, ids: &[NotionId]) -> Result<Vec<Notion>> {
        let mut notions = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(LOOKUP_CHUNK) {
            let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
                "SELECT id, name, created_at, updated_at FROM notions WHERE id IN (",
            );
            let mut separated = query.separated(", ");
            for id in chunk {
                separated.push_bind(id.as_str());
            }
            separated.push_unseparated(")");

            let rows: Vec<NotionRow> = query
                .build_query_as()
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            for row in rows {
                notions.push(row.into_notion()?);
            }
        }

        Ok(notions)
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct NotionRow {
    id: String,
    name: String,
    created_at: i64,
    updated_at: i64,
}

impl NotionRow {
    fn into_notion(self) -> Result<Notion> {
        let id = EntityId::parse(&self.id).map_err(|_| {
            AppError::Persistence(format!("Corrupt notion row: invalid id {:?}", self.id))
        })?;

        Ok(Notion {
            id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
