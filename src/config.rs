//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Database
//!
//! ```bash
//! # Full URL
//! export DATABASE_URL="sqlite://locations.db"
//!
//! # Or just a file path, turned into `sqlite://<path>`
//! export DB_PATH="/var/lib/location-registry/locations.db"
//! ```
//!
//! `DATABASE_URL` takes priority. If neither is set the service uses
//! `sqlite://locations.db` in the working directory.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT`, `DB_IDLE_TIMEOUT`, `DB_MAX_LIFETIME` - pool tuning
//! - `RATE_LIMIT_ENABLED` - Per-IP rate limiting on `/api` (default: `true`)
//! - `RATE_LIMIT_REPLENISH_MS` - One request is replenished every N ms (default: 500)
//! - `RATE_LIMIT_BURST` - Token bucket size (default: 100)
//! - `BEHIND_PROXY` - Read client IP from forwarding headers (default: `false`)

use anyhow::{Context, Result};
use std::env;

const DEFAULT_DB_PATH: &str = "locations.db";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// Idle connection lifetime in seconds before it is closed
    /// (`DB_IDLE_TIMEOUT`, default: 600).
    pub db_idle_timeout: u64,
    /// Maximum connection lifetime in seconds (`DB_MAX_LIFETIME`, default: 1800).
    pub db_max_lifetime: u64,

    // ── Rate limiting ───────────────────────────────────────────────────────
    pub rate_limit_enabled: bool,
    pub rate_limit_replenish_ms: u64,
    pub rate_limit_burst: u32,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url = Self::load_database_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 5)?,
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT", 30)?,
            db_idle_timeout: parse_var("DB_IDLE_TIMEOUT", 600)?,
            db_max_lifetime: parse_var("DB_MAX_LIFETIME", 1800)?,
            rate_limit_enabled: flag_var("RATE_LIMIT_ENABLED", true),
            rate_limit_replenish_ms: parse_var("RATE_LIMIT_REPLENISH_MS", 500)?,
            rate_limit_burst: parse_var("RATE_LIMIT_BURST", 100)?,
            behind_proxy: flag_var("BEHIND_PROXY", false),
        })
    }

    /// Loads the database URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://` + `DB_PATH`
    /// 3. `sqlite://locations.db`
    fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path = env::var("DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        format!("sqlite://{}", path)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - a pool or rate limit setting is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        if self.rate_limit_enabled {
            if self.rate_limit_replenish_ms == 0 {
                anyhow::bail!("RATE_LIMIT_REPLENISH_MS must be greater than 0");
            }
            if self.rate_limit_burst == 0 {
                anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
            }
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", mask_connection_string(&self.database_url));
        tracing::info!("  Pool size: {}", self.db_max_connections);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.rate_limit_enabled {
            tracing::info!(
                "  Rate limit: burst {}, one request per {}ms{}",
                self.rate_limit_burst,
                self.rate_limit_replenish_ms,
                if self.behind_proxy { " (behind proxy)" } else { "" }
            );
        } else {
            tracing::info!("  Rate limit: disabled");
        }
    }
}

/// Parses a numeric variable, falling back to `default` when it is unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

fn flag_var(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(default)
}

/// Masks credentials in connection strings for logging.
///
/// SQLite URLs usually carry none, but query parameters such as
/// `password=` are blanked when present.
fn mask_connection_string(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_string();
    };

    let masked: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if key.eq_ignore_ascii_case("password") || key == "key" => {
                format!("{}=***", key)
            }
            _ => pair.to_string(),
        })
        .collect();

    format!("{}?{}", base, masked.join("&"))
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            database_url: "sqlite://locations.db".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_connect_timeout: 30,
            db_idle_timeout: 600,
            db_max_lifetime: 1800,
            rate_limit_enabled: true,
            rate_limit_replenish_ms: 500,
            rate_limit_burst: 100,
            behind_proxy: false,
        }
    }

    #[test]
    fn test_mask_connection_string() {
        assert_eq!(
            mask_connection_string("sqlite://data.db?mode=rwc&password=secret"),
            "sqlite://data.db?mode=rwc&password=***"
        );

        assert_eq!(
            mask_connection_string("sqlite://data.db"),
            "sqlite://data.db"
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rate_limit_validation_only_when_enabled() {
        let mut config = valid_config();

        config.rate_limit_burst = 0;
        assert!(config.validate().is_err());

        config.rate_limit_enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_database_url_from_path() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::set_var("DB_PATH", "/tmp/registry.db");
        }

        assert_eq!(Config::load_database_url(), "sqlite:///tmp/registry.db");

        unsafe {
            env::remove_var("DB_PATH");
        }

        assert_eq!(Config::load_database_url(), "sqlite://locations.db");
    }

    #[test]
    #[serial]
    fn test_database_url_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DATABASE_URL", "sqlite://from-url.db");
            env::set_var("DB_PATH", "from-path.db");
        }

        let url = Config::load_database_url();

        assert!(url.contains("from-url"));
        assert!(!url.contains("from-path"));

        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("DB_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_invalid_number_is_error() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DB_MAX_CONNECTIONS", "many");
        }

        assert!(Config::from_env().is_err());

        unsafe {
            env::remove_var("DB_MAX_CONNECTIONS");
        }
    }

    #[test]
    #[serial]
    fn test_flag_var() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("BEHIND_PROXY", "TRUE");
        }
        assert!(flag_var("BEHIND_PROXY", false));

        unsafe {
            env::set_var("BEHIND_PROXY", "no");
        }
        assert!(!flag_var("BEHIND_PROXY", true));

        unsafe {
            env::remove_var("BEHIND_PROXY");
        }
        assert!(flag_var("BEHIND_PROXY", true));
    }
}
