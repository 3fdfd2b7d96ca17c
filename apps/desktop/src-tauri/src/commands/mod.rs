//! # Tauri Commands Module
//!
//! All commands exposed to the desktop frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── auth.rs      ◄─── Login, logout, current user
//! ├── product.rs   ◄─── Catalog CRUD and filtered listing
//! ├── movement.rs  ◄─── Stock entries/exits and history
//! ├── user.rs      ◄─── User management (administrator only)
//! └── dashboard.rs ◄─── Launching the companion dashboard process
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ─────────                                                              │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  await invoke('record_exit', { productId: 3, quantity: 2 });            │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  async fn record_exit(                                                  │
//! │      db: State<'_, DbState>,        ◄── Injected by Tauri              │
//! │      session: State<'_, SessionState>,                                  │
//! │      product_id: i64,               ◄── From invoke params             │
//! │      quantity: i64,                                                     │
//! │  ) -> Result<MovementOutcomeDto, ApiError>                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Thin adapter: check session, call the repository, map to a DTO.        │
//! │  No business logic lives here.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod dashboard;
pub mod movement;
pub mod product;
pub mod user;
