//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(db_state);                                          │   │
//! │  │  app.manage(session_state);                                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │              ┌───────────────┴───────────────┐                         │
//! │              ▼                               ▼                          │
//! │  ┌──────────────────────┐      ┌───────────────────────────┐           │
//! │  │      DbState         │      │      SessionState         │           │
//! │  │                      │      │                           │           │
//! │  │  Database            │      │  Arc<Mutex<               │           │
//! │  │  (SQLite pool)       │      │    Option<User>           │           │
//! │  │                      │      │  >>                       │           │
//! │  └──────────────────────┘      └───────────────────────────┘           │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: Database has internal connection pool (thread-safe)        │
//! │  • SessionState: Protected by Arc<Mutex<T>> for exclusive access       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod db;
mod session;

pub use db::DbState;
pub use session::SessionState;
