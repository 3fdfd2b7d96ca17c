//! # Auth Commands
//!
//! Login, logout and session inspection.
//!
//! The login form is the first window the user sees; every other tab is
//! enabled only after `login` succeeds. The commands hold no logic beyond
//! calling [`stockroom_db::UserRepository::authenticate`] and updating the
//! session state.

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{DbState, SessionState};
use stockroom_core::User;

/// Session user DTO for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub is_admin: bool,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            id: user.id,
            name: user.name,
            is_admin: user.role.is_admin(),
            role: user.role.as_str().to_string(),
        }
    }
}

/// Authenticates a (name, password) pair and opens the session.
///
/// ## Returns
/// The authenticated user, or `AUTHENTICATION_FAILED` for any mismatch -
/// the frontend shows the same dialog for unknown names and wrong
/// passwords.
#[tauri::command]
pub async fn login(
    db: State<'_, DbState>,
    session: State<'_, SessionState>,
    name: String,
    password: String,
) -> Result<UserDto, ApiError> {
    debug!(name = %name.trim(), "login command");

    let user = db.inner().users().authenticate(&name, &password).await?;
    session.set(user.clone());

    info!(name = %user.name, role = user.role.as_str(), "User logged in");
    Ok(UserDto::from(user))
}

/// Closes the session.
#[tauri::command]
pub fn logout(session: State<'_, SessionState>) {
    if let Some(user) = session.current() {
        info!(name = %user.name, "User logged out");
    }
    session.clear();
}

/// Returns the current session user, if any.
///
/// The frontend calls this on startup to decide between the login form
/// and the main window.
#[tauri::command]
pub fn current_user(session: State<'_, SessionState>) -> Option<UserDto> {
    session.current().map(UserDto::from)
}
