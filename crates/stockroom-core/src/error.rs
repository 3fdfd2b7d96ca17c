//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stockroom-db errors (separate crate)                                  │
//! │  └── StoreError       - Full operation taxonomy (wraps Validation)     │
//! │                                                                         │
//! │  Presentation errors (per app)                                         │
//! │  ├── ApiError         - What the desktop frontend sees (serialized)    │
//! │  └── DashboardError   - HTTP status + JSON body                        │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → ApiError/DashboardError → UI     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

/// Input validation errors.
///
/// These occur when form input does not meet requirements. Validation runs
/// before any write, so a validation failure never leaves partial state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be greater than zero")]
    NotPositive { field: String },

    /// A numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value is not in the allowed set (e.g. an unknown role name).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        allowed: Vec<String>,
    },

    /// The seeded administrator account cannot be removed.
    #[error("user '{name}' is reserved and cannot be deleted")]
    ReservedUser { name: String },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must not be negative");

        let err = ValidationError::ReservedUser {
            name: "admin".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "user 'admin' is reserved and cannot be deleted"
        );
    }
}
