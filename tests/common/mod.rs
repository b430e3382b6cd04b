#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use location_registry::infrastructure::persistence::run_migrations;
use location_registry::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Opens a migrated, private in-memory database.
///
/// A single connection that is never recycled keeps the in-memory database alive
/// for the whole test.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub async fn create_test_organisation(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO organisation (name) VALUES (?) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_location(
    pool: &SqlitePool,
    organisation_id: i64,
    name: &str,
    longitude: f64,
    latitude: f64,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO location (organisation_id, location_name, longitude, latitude) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(organisation_id)
    .bind(name)
    .bind(longitude)
    .bind(latitude)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Salzburg, Vienna and Berlin as `(name, longitude, latitude)`.
pub const CITIES: [(&str, f64, f64); 3] = [
    ("Salzburg", 13.0550, 47.8095),
    ("Vienna", 16.3738, 48.2082),
    ("Berlin", 13.4050, 52.5200),
];

pub async fn create_cities(pool: &SqlitePool, organisation_id: i64) {
    for (name, longitude, latitude) in CITIES {
        create_test_location(pool, organisation_id, name, longitude, latitude).await;
    }
}
