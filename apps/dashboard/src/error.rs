//! HTTP error type for the dashboard.
//!
//! Every store taxonomy member maps to a status code and a JSON body; no
//! handler ever lets a raw storage error (or a panic) reach the wire.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use stockroom_db::StoreError;

/// Dashboard error with HTTP status code and message.
#[derive(Debug)]
pub struct DashboardError {
    pub status: StatusCode,
    pub message: String,
}

impl DashboardError {
    /// Creates a new dashboard error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        DashboardError {
            status,
            message: message.into(),
        }
    }

    /// 401 Unauthorized - missing or invalid token.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// 403 Forbidden - valid token, wrong role.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 500 Internal Server Error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

/// Maps the store taxonomy onto HTTP statuses.
///
/// ```text
/// Validation          → 400 Bad Request
/// AuthenticationFailed→ 401 Unauthorized
/// NotFound            → 404 Not Found
/// Duplicate           → 409 Conflict
/// InsufficientStock   → 409 Conflict
/// Unavailable         → 503 Service Unavailable
/// Migration           → 503 Service Unavailable
/// ```
impl From<StoreError> for DashboardError {
    fn from(err: StoreError) -> Self {
        let status = match &err {
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::Duplicate { .. } | StoreError::InsufficientStock { .. } => {
                StatusCode::CONFLICT
            }
            StoreError::Unavailable(detail) => {
                tracing::error!(%detail, "Store unavailable");
                return DashboardError::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "database operation failed",
                );
            }
            StoreError::Migration(detail) => {
                tracing::error!(%detail, "Migration failed");
                return DashboardError::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "database migration failed",
                );
            }
        };
        DashboardError::new(status, err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_status_mapping() {
        let err: DashboardError = StoreError::AuthenticationFailed.into();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);

        let err: DashboardError = StoreError::duplicate("product", "Rice (Food)").into();
        assert_eq!(err.status, StatusCode::CONFLICT);

        let err: DashboardError = StoreError::not_found("product", 1).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unavailable_hides_detail() {
        let err: DashboardError = StoreError::Unavailable("disk I/O error".to_string()).into();
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!err.message.contains("disk"));
    }
}
