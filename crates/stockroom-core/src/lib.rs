//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It contains the domain types
//! and rules shared by every front end, as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stockroom Architecture                            │
//! │                                                                         │
//! │  ┌───────────────────────────┐   ┌───────────────────────────────────┐ │
//! │  │  Desktop client (Tauri)   │   │  Web dashboard (axum)             │ │
//! │  │  login, product forms,    │   │  filterable table, charts,        │ │
//! │  │  entry/exit prompts       │   │  CSV export                       │ │
//! │  └─────────────┬─────────────┘   └─────────────────┬─────────────────┘ │
//! │                │                                   │                   │
//! │  ┌─────────────▼───────────────────────────────────▼─────────────────┐ │
//! │  │               ★ stockroom-core (THIS CRATE) ★                     │ │
//! │  │                                                                   │ │
//! │  │   ┌───────────┐  ┌────────────┐  ┌────────────┐  ┌────────────┐  │ │
//! │  │   │   types   │  │ validation │  │ credential │  │   error    │  │ │
//! │  │   │  Product  │  │   rules    │  │  digest    │  │  variants  │  │ │
//! │  │   │  Movement │  │   checks   │  │  compare   │  │            │  │ │
//! │  │   └───────────┘  └────────────┘  └────────────┘  └────────────┘  │ │
//! │  │                                                                   │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS             │ │
//! │  └─────────────────────────────┬─────────────────────────────────────┘ │
//! │                                │                                       │
//! │  ┌─────────────────────────────▼─────────────────────────────────────┐ │
//! │  │                  stockroom-db (Database Layer)                    │ │
//! │  │            SQLite queries, migrations, catalog, ledger            │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, Movement, filters)
//! - [`error`] - Validation error type
//! - [`validation`] - Input validation rules
//! - [`credential`] - Credential digest and comparison
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod credential;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Product` instead of
// `use stockroom_core::types::Product`

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name of the administrator seeded when the user table is empty.
///
/// ## Why a constant?
/// Bootstrap (stockroom-db) inserts it, the user repository refuses to
/// delete it, and the login forms document it. One definition keeps the
/// three in agreement.
pub const DEFAULT_ADMIN_NAME: &str = "admin";

/// Password of the seeded administrator. Documented on the login screens;
/// expected to be changed by creating a real administrator and deleting
/// nothing (the seeded account itself cannot be removed).
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// A product with this quantity or fewer counts as "low stock" in the
/// dashboard summary.
pub const LOW_STOCK_THRESHOLD: i64 = 5;
