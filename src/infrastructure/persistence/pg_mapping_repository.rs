//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::{AppError, map_sqlx_read_error, map_sqlx_write_error};

#[derive(sqlx::FromRow)]
struct MappingRow {
    id: String,
    original_url: String,
}

impl From<MappingRow> for UrlMapping {
    fn from(row: MappingRow) -> Self {
        UrlMapping::new(row.id, row.original_url)
    }
}

/// PostgreSQL repository backed by the `url` table.
///
/// Uniqueness of `id` is enforced by the table's primary key.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        sqlx::query(
            r#"
            INSERT INTO url (id, original_url)
            VALUES ($1, $2)
            "#,
        )
        .bind(&new_mapping.id)
        .bind(&new_mapping.url)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| {
            tracing::warn!(id = %new_mapping.id, error = %e, "Failed to insert mapping");
            map_sqlx_write_error(e)
        })?;

        Ok(UrlMapping::from(new_mapping))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UrlMapping>, AppError> {
        // PostgreSQL text cannot hold NUL, so no stored id can match.
        if id.contains('\0') {
            return Ok(None);
        }

        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, original_url
            FROM url
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_read_error)?;

        Ok(row.map(UrlMapping::from))
    }

    async fn list_all(&self) -> Result<Vec<UrlMapping>, AppError> {
        // COLLATE "C" keeps the ordering bytewise regardless of the database locale.
        let rows = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT id, original_url
            FROM url
            ORDER BY id COLLATE "C" DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_read_error)?;

        Ok(rows.into_iter().map(UrlMapping::from).collect())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
