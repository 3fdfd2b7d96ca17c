//! # Store Error Types
//!
//! The full error taxonomy for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Translates constraints into the taxonomy   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError / DashboardError (per app) ← Serialized for the UI           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Front end displays user-friendly message                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A raw storage error never crosses this crate's boundary: UNIQUE
//! violations become [`StoreError::Duplicate`], connection and pool
//! failures become [`StoreError::Unavailable`], and so on.

use stockroom_core::ValidationError;
use thiserror::Error;

/// Store operation errors.
///
/// Every repository method returns this taxonomy; callers can match on it
/// exhaustively instead of parsing strings.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input failed validation before any write was attempted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Uniqueness violation.
    ///
    /// ## When This Occurs
    /// - Creating a product with an existing (name, category) pair
    /// - Creating a user with an existing name
    #[error("{entity} '{name}' already exists")]
    Duplicate { entity: String, name: String },

    /// A referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// An exit movement requested more units than are on hand.
    ///
    /// ## When This Occurs
    /// - The sufficiency check inside the ledger transaction failed
    /// - No partial state remains: neither the quantity nor the history
    ///   changed
    #[error("insufficient stock for '{name}': available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Name/password pair did not match any stored user.
    ///
    /// Deliberately carries no detail - an unknown name and a wrong
    /// password are indistinguishable to the caller.
    #[error("invalid name or password")]
    AuthenticationFailed,

    /// The underlying database is unreachable, or its constraint engine
    /// rejected a write that passed validation.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Migration failed during startup.
    #[error("migration failed: {0}")]
    Migration(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Duplicate error.
    pub fn duplicate(entity: impl Into<String>, name: impl Into<String>) -> Self {
        StoreError::Duplicate {
            entity: entity.into(),
            name: name.into(),
        }
    }

    /// Whether this is the uniqueness-violation variant.
    ///
    /// Used by repositories to re-attribute a raw UNIQUE translation with
    /// the entity and name they were inserting.
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::Duplicate { .. })
    }
}

/// Convert sqlx errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound      → StoreError::NotFound
/// UNIQUE constraint failed      → StoreError::Duplicate
/// FOREIGN KEY / CHECK failed    → StoreError::Unavailable (validation
///                                 runs first, so a tripped constraint
///                                 means the store disagrees with us)
/// Pool timeout / closed         → StoreError::Unavailable
/// Other                         → StoreError::Unavailable
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound {
                entity: "record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint messages:
                // "UNIQUE constraint failed: <table>.<column>[, ...]"
                // "FOREIGN KEY constraint failed"
                // "CHECK constraint failed: <expr>"
                if msg.contains("UNIQUE constraint failed") {
                    let columns = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown");
                    StoreError::Duplicate {
                        entity: columns
                            .split('.')
                            .next()
                            .unwrap_or("record")
                            .to_string(),
                        name: "unknown".to_string(),
                    }
                } else {
                    StoreError::Unavailable(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => {
                StoreError::Unavailable("connection pool exhausted".to_string())
            }

            sqlx::Error::PoolClosed => StoreError::Unavailable("pool is closed".to_string()),

            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::Migration(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_message() {
        let err = StoreError::InsufficientStock {
            name: "Rice 5kg".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for 'Rice 5kg': available 3, requested 5"
        );
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let err: StoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_authentication_failed_carries_no_detail() {
        assert_eq!(
            StoreError::AuthenticationFailed.to_string(),
            "invalid name or password"
        );
    }
}
