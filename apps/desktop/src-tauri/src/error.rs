//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom Desktop                      │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('record_exit')                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  StoreError::InsufficientStock ──► ApiError ────────────────────►│  │
//! │  │  StoreError::Validation        ──► ApiError ────────────────────►│  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try { await invoke('record_exit') }                                    │
//! │  catch (e) {                                                            │
//! │    // e.message = "insufficient stock for 'Rice': available 3, ..."     │
//! │    // e.code = "INSUFFICIENT_STOCK"  → rendered as a modal dialog       │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.
//! No member of the taxonomy ever crashes the host process.

use serde::Serialize;
use stockroom_db::StoreError;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await invoke('record_exit', { productId, quantity });
/// } catch (e) {
///   switch (e.code) {
///     case 'INSUFFICIENT_STOCK':
///       showDialog(e.message);
///       break;
///     case 'AUTHENTICATION_FAILED':
///       showLoginError();
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Uniqueness violation
    DuplicateEntity,

    /// Exit exceeds the units on hand
    InsufficientStock,

    /// Wrong name/password
    AuthenticationFailed,

    /// Caller's role does not permit the action
    PermissionDenied,

    /// No user is logged in
    NotLoggedIn,

    /// Database unreachable or rejected the operation
    StoreUnavailable,

    /// Launching the dashboard process failed
    DashboardLaunch,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a permission-denied error (administrator-only action).
    pub fn permission_denied() -> Self {
        ApiError::new(
            ErrorCode::PermissionDenied,
            "this action requires an administrator",
        )
    }

    /// Creates a not-logged-in error.
    pub fn not_logged_in() -> Self {
        ApiError::new(ErrorCode::NotLoggedIn, "no user is logged in")
    }
}

/// Converts store errors to API errors.
///
/// Every taxonomy member maps to a code the frontend can dispatch on; the
/// message is already user-presentable.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::Validation(_) => ErrorCode::ValidationError,
            StoreError::Duplicate { .. } => ErrorCode::DuplicateEntity,
            StoreError::NotFound { .. } => ErrorCode::NotFound,
            StoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
            StoreError::AuthenticationFailed => ErrorCode::AuthenticationFailed,
            StoreError::Unavailable(detail) => {
                // Log the storage detail but keep the user message generic
                tracing::error!(%detail, "Store unavailable");
                return ApiError::new(ErrorCode::StoreUnavailable, "database operation failed");
            }
            StoreError::Migration(detail) => {
                tracing::error!(%detail, "Migration failed");
                return ApiError::new(ErrorCode::StoreUnavailable, "database migration failed");
            }
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_mapping_keeps_codes_stable() {
        let err: ApiError = StoreError::AuthenticationFailed.into();
        assert!(matches!(err.code, ErrorCode::AuthenticationFailed));

        let err: ApiError = StoreError::InsufficientStock {
            name: "Rice".to_string(),
            available: 1,
            requested: 2,
        }
        .into();
        assert!(matches!(err.code, ErrorCode::InsufficientStock));
        assert!(err.message.contains("Rice"));
    }

    #[test]
    fn test_unavailable_hides_storage_detail() {
        let err: ApiError = StoreError::Unavailable("disk I/O error".to_string()).into();
        assert!(matches!(err.code, ErrorCode::StoreUnavailable));
        assert!(!err.message.contains("disk"));
    }
}
