//! Response body of `GET /health`.

use serde::Serialize;

/// Overall status plus the database probe.
///
/// `status` is `healthy` when the organisation count query succeeds and
/// `degraded` otherwise; the handler pairs `degraded` with a 503.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// The service depends on SQLite only, so there is one check.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Outcome of a single probe: `ok` or `error`, with an optional detail such as
/// the organisation count or the database error text.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
