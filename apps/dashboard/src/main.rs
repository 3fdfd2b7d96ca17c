//! # Stockroom Dashboard
//!
//! Companion web process over the same SQLite store as the desktop client.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Dashboard Server                                  │
//! │                                                                         │
//! │  Browser ──► HTTP (8701) ──► axum handlers ──► stockroom-db ──► SQLite │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                         Bearer-token gate                              │
//! │                  (mutations require an administrator)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Started by the desktop client's "Open Dashboard" button or standalone;
//! either way it opens the store pointed at by `STOCKROOM_DB_PATH`.

mod auth;
mod config;
mod error;
mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::auth::TokenIssuer;
use crate::config::DashboardConfig;
use stockroom_db::{Database, DbConfig};

/// Shared handler state: the store handle and the token issuer.
///
/// `Database` is a pooled handle, so cloning per request is cheap; there
/// is no other shared mutable state in the process.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tokens: TokenIssuer,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug,sqlx=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Stockroom dashboard");

    // Load configuration
    let config = DashboardConfig::load()?;
    info!(
        port = config.port,
        db_path = %config.database_path,
        "Configuration loaded"
    );

    // Connect to the shared store (runs migrations + bootstrap if needed)
    let db = Database::new(DbConfig::new(&config.database_path)).await?;
    info!("Database connected");

    let state = AppState {
        db,
        tokens: TokenIssuer::new(config.jwt_secret.clone(), config.token_lifetime_secs),
    };

    // Permissive CORS: the dashboard serves its own page, but the desktop
    // webview may also query the JSON endpoints directly.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Page + health
        .route("/", get(handlers::page::index))
        .route("/health", get(health))
        // Open reads; creation is administrator-gated inside the handler
        .route(
            "/api/products",
            get(handlers::products::list).post(handlers::products::create),
        )
        .route(
            "/api/products/:id",
            axum::routing::put(handlers::products::update).delete(handlers::products::delete),
        )
        .route("/api/summary", get(handlers::summary::summary))
        .route("/api/filters", get(handlers::summary::filters))
        .route(
            "/api/movements",
            get(handlers::movements::list).post(handlers::movements::record),
        )
        .route("/api/export.csv", get(handlers::export::csv))
        // Login + user management
        .route("/api/login", post(handlers::users::login))
        .route(
            "/api/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route("/api/users/:id", axum::routing::delete(handlers::users::delete))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!(%addr, "Dashboard listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// `GET /health`
async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> axum::Json<serde_json::Value> {
    let healthy = state.db.health_check().await;
    axum::Json(serde_json::json!({ "status": if healthy { "ok" } else { "degraded" } }))
}

/// Resolves when Ctrl-C is received.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
