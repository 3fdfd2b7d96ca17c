//! # Dashboard Command
//!
//! Launches the companion web dashboard as an independent process pointed
//! at the same database file.
//!
//! ## Launch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    "Open Dashboard" Button                              │
//! │                                                                         │
//! │  invoke('open_dashboard')                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Locate the dashboard binary                                           │
//! │   1. $STOCKROOM_DASHBOARD_BIN (explicit override)                      │
//! │   2. stockroom-dashboard next to the current executable                │
//! │       │                                                                 │
//! │       ├── not found ──► DASHBOARD_LAUNCH error (dialog, non-fatal)     │
//! │       ▼                                                                 │
//! │  spawn(binary, STOCKROOM_DB_PATH=<same store>)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Detached child process; the desktop client keeps running either way   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::env;
use std::path::PathBuf;
use std::process::Command;

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{info, warn};

use crate::error::{ApiError, ErrorCode};
use crate::state::SessionState;

#[cfg(windows)]
const DASHBOARD_BIN: &str = "stockroom-dashboard.exe";
#[cfg(not(windows))]
const DASHBOARD_BIN: &str = "stockroom-dashboard";

/// Launch confirmation for the frontend notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardLaunchDto {
    pub binary: String,
    pub url: String,
}

/// Resolves the dashboard binary location.
fn dashboard_binary() -> Result<PathBuf, ApiError> {
    if let Ok(path) = env::var("STOCKROOM_DASHBOARD_BIN") {
        return Ok(PathBuf::from(path));
    }

    let sibling = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DASHBOARD_BIN)));

    match sibling {
        Some(path) if path.exists() => Ok(path),
        _ => Err(ApiError::new(
            ErrorCode::DashboardLaunch,
            format!(
                "dashboard binary '{DASHBOARD_BIN}' not found; \
                 set STOCKROOM_DASHBOARD_BIN or install it next to the client"
            ),
        )),
    }
}

/// Starts the dashboard process over the same store.
///
/// A failure to locate or spawn the binary is reported to the user and is
/// NOT fatal to the desktop client.
#[tauri::command]
pub async fn open_dashboard(
    session: State<'_, SessionState>,
) -> Result<DashboardLaunchDto, ApiError> {
    session.require_user()?;

    let binary = dashboard_binary()?;
    let db_path = crate::database_path().map_err(|err| {
        ApiError::new(ErrorCode::DashboardLaunch, format!("cannot resolve store path: {err}"))
    })?;

    info!(binary = %binary.display(), "Launching dashboard process");

    Command::new(&binary)
        .env("STOCKROOM_DB_PATH", &db_path)
        .spawn()
        .map_err(|err| {
            warn!(%err, "Dashboard spawn failed");
            ApiError::new(
                ErrorCode::DashboardLaunch,
                format!("could not start dashboard: {err}"),
            )
        })?;

    Ok(DashboardLaunchDto {
        binary: binary.display().to_string(),
        url: format!("http://localhost:{}", crate::DEFAULT_DASHBOARD_PORT),
    })
}
