//! # Stockroom Desktop Library
//!
//! Core library for the Stockroom desktop client.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! stockroom_desktop_lib/
//! ├── lib.rs           ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs       ◄─── State type exports
//! │   ├── db.rs        ◄─── Database state wrapper
//! │   └── session.rs   ◄─── Current-user session state
//! ├── commands/
//! │   ├── mod.rs       ◄─── Command exports
//! │   ├── auth.rs      ◄─── Login/logout commands
//! │   ├── product.rs   ◄─── Catalog commands
//! │   ├── movement.rs  ◄─── Ledger commands
//! │   ├── user.rs      ◄─── User management commands
//! │   └── dashboard.rs ◄─── Companion-process launch
//! └── error.rs         ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Determine Database Path ──────────────────────────────────────────► │
//! │     • STOCKROOM_DB_PATH override, else the platform data directory      │
//! │                                                                         │
//! │  3. Connect to Database ──────────────────────────────────────────────► │
//! │     • SQLite with WAL mode                                              │
//! │     • Run pending migrations, seed default administrator if needed      │
//! │                                                                         │
//! │  4. Initialize State Objects ─────────────────────────────────────────► │
//! │     • DbState: Wraps Database connection                                │
//! │     • SessionState: Logged-out session with Mutex for thread safety     │
//! │                                                                         │
//! │  5. Build & Run Tauri App ────────────────────────────────────────────► │
//! │     • Register all commands, manage state, launch window                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{DbState, SessionState};
use stockroom_db::{Database, DbConfig};

/// Port the companion dashboard listens on unless overridden.
pub const DEFAULT_DASHBOARD_PORT: u16 = 8701;

/// Runs the Tauri application.
pub fn run() {
    init_tracing();

    info!("Starting Stockroom desktop client");

    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            let db_path = database_path()?;
            info!(?db_path, "Database path determined");

            // Initialize database (blocking in setup, async in runtime)
            let db = tauri::async_runtime::block_on(async {
                Database::new(DbConfig::new(db_path)).await
            })?;

            info!("Database connected, migrations applied, bootstrap checked");

            use tauri::Manager;
            app.manage(DbState::new(db));
            app.manage(SessionState::new());

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Auth commands
            commands::auth::login,
            commands::auth::logout,
            commands::auth::current_user,
            // Product commands
            commands::product::list_products,
            commands::product::get_product,
            commands::product::create_product,
            commands::product::update_product,
            commands::product::delete_product,
            // Movement commands
            commands::movement::record_entry,
            commands::movement::record_exit,
            commands::movement::list_movements,
            // User commands
            commands::user::list_users,
            commands::user::create_user,
            commands::user::delete_user,
            // Dashboard launch
            commands::dashboard::open_dashboard,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom=trace` - Show trace for stockroom crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path.
///
/// ## Resolution Order
/// 1. `STOCKROOM_DB_PATH` environment variable (also what the desktop
///    client hands to the dashboard process, so both open the same file)
/// 2. The platform data directory:
///    - **macOS**: `~/Library/Application Support/com.stockroom.desktop/stockroom.db`
///    - **Windows**: `%APPDATA%\stockroom\desktop\stockroom.db`
///    - **Linux**: `~/.local/share/stockroom-desktop/stockroom.db`
pub fn database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("STOCKROOM_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("com", "stockroom", "desktop")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("stockroom.db"))
}
