//! SQLite implementation of the location repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::{Location, NewLocation};
use crate::domain::repositories::LocationRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct LocationRow {
    id: i64,
    organisation_id: i64,
    location_name: String,
    longitude: f64,
    latitude: f64,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location::new(
            row.id,
            row.organisation_id,
            row.location_name,
            row.longitude,
            row.latitude,
        )
    }
}

/// SQLite repository for location storage.
///
/// Bounding-box filtering is not pushed into SQL: the service scans the
/// organisation's rows with [`crate::domain::bounding_box::BoundingBox::contains`].
pub struct SqliteLocationRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLocationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for SqliteLocationRepository {
    async fn create(&self, new_location: NewLocation) -> Result<Location, AppError> {
        let row = sqlx::query_as::<_, LocationRow>(
            r#"
            INSERT INTO location (organisation_id, location_name, longitude, latitude)
            VALUES (?, ?, ?, ?)
            RETURNING id, organisation_id, location_name, longitude, latitude
            "#,
        )
        .bind(new_location.organisation_id)
        .bind(new_location.name)
        .bind(new_location.longitude)
        .bind(new_location.latitude)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list_by_organisation(&self, organisation_id: i64) -> Result<Vec<Location>, AppError> {
        let rows = sqlx::query_as::<_, LocationRow>(
            r#"
            SELECT id, organisation_id, location_name, longitude, latitude
            FROM location
            WHERE organisation_id = ?
            ORDER BY id
            "#,
        )
        .bind(organisation_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM location")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
