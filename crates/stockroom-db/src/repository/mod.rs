//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Desktop command / dashboard handler                                   │
//! │       │                                                                 │
//! │       │  db.movements().apply(id, 3, MovementKind::Exit, …)            │
//! │       ▼                                                                 │
//! │  MovementRepository                                                    │
//! │  ├── apply(...)          ← validate, then one guarded transaction      │
//! │  ├── list(limit)                                                       │
//! │  └── list_for_product(id)                                              │
//! │       │                                                                 │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Business rules are callable and testable without any UI             │
//! │  • SQL is isolated in one place                                        │
//! │  • Validation short-circuits before anything is written                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Catalog CRUD, filtering, summary
//! - [`user::UserRepository`] - Accounts, authentication, bootstrap seeding
//! - [`movement::MovementRepository`] - The stock-movement ledger

pub mod movement;
pub mod product;
pub mod user;
