//! Connection pool setup and embedded migrations.

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::config::Config;

/// Opens a connection pool using the database settings from `config`.
///
/// The database file is created if it does not exist. Foreign key enforcement
/// is switched on for every connection.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(options)
        .await
}

/// Applies the migrations embedded from `./migrations`.
///
/// # Errors
///
/// Returns an error if a migration fails or the applied history diverges.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
