//! Application error type and its HTTP mapping.
//!
//! Every layer returns [`AppError`]. Status codes are chosen only here, in the
//! [`IntoResponse`] implementation, so services and repositories stay unaware of HTTP.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::bounding_box::BoundingBoxError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            // The only foreign key in the schema is location.organisation_id.
            if db.is_foreign_key_violation() {
                return AppError::not_found("Organisation not found", json!({}));
            }
        }

        tracing::error!(error = %e, "database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<BoundingBoxError> for AppError {
    fn from(e: BoundingBoxError) -> Self {
        let details = match &e {
            BoundingBoxError::WrongArity { found } => json!({ "expected": 4, "found": found }),
            BoundingBoxError::Incomplete { missing } => json!({ "missing": missing }),
            BoundingBoxError::Ambiguous => {
                json!({ "hint": "Use either bounding_box or sw_lat/sw_lon/ne_lat/ne_lon" })
            }
            BoundingBoxError::NotNumeric { parameter, value } => {
                json!({ "parameter": parameter, "value": value })
            }
            BoundingBoxError::Inverted { axis } => json!({ "axis": axis }),
        };

        AppError::bad_request(format!("Invalid bounding box: {e}"), details)
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::bad_request("Invalid query string", json!({ "reason": e.body_text() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or_default();
        AppError::bad_request("Request validation failed", details)
    }
}
