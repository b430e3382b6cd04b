//! SQLite implementation of the organisation repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{NewOrganisation, Organisation};
use crate::domain::repositories::OrganisationRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct OrganisationRow {
    id: i64,
    name: String,
}

impl From<OrganisationRow> for Organisation {
    fn from(row: OrganisationRow) -> Self {
        Organisation::new(row.id, row.name)
    }
}

/// SQLite repository for the organisation registry.
pub struct SqliteOrganisationRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteOrganisationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrganisationRepository for SqliteOrganisationRepository {
    async fn create(&self, new_organisation: NewOrganisation) -> Result<Organisation, AppError> {
        let row = sqlx::query_as::<_, OrganisationRow>(
            r#"
            INSERT INTO organisation (name)
            VALUES (?)
            RETURNING id, name
            "#,
        )
        .bind(new_organisation.name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Organisation>, AppError> {
        let row = sqlx::query_as::<_, OrganisationRow>(
            r#"
            SELECT id, name
            FROM organisation
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Organisation::from))
    }

    async fn list(&self) -> Result<Vec<Organisation>, AppError> {
        let rows = sqlx::query_as::<_, OrganisationRow>(
            r#"
            SELECT id, name
            FROM organisation
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Organisation::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM organisation")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
