//! HTTP handlers, one module per resource.
//!
//! ```text
//! handlers/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── page.rs      ◄─── GET /            server-rendered shell
//! ├── products.rs  ◄─── /api/products    listing + admin CRUD
//! ├── summary.rs   ◄─── /api/summary     metrics + chart feed, /api/filters
//! ├── movements.rs ◄─── /api/movements   history + admin registration
//! ├── users.rs     ◄─── /api/login, /api/users
//! └── export.rs    ◄─── /api/export.csv  CSV of the current filtered view
//! ```
//!
//! Handlers are thin: parse the request, consult the token where the route
//! is gated, call a repository, map the result. Business rules live in
//! stockroom-core/stockroom-db.

pub mod export;
pub mod movements;
pub mod page;
pub mod products;
pub mod summary;
pub mod users;
