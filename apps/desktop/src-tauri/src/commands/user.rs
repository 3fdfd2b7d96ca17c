//! # User Commands
//!
//! Tauri commands for the Users tab (administrator only).
//!
//! Role enforcement lives HERE, at the presentation boundary: every
//! command first asks the session for an administrator. The repositories
//! do not re-check roles - by design, not as a security guarantee.

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::commands::auth::UserDto;
use crate::error::ApiError;
use crate::state::{DbState, SessionState};
use stockroom_core::Role;

/// "New User" form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInputDto {
    pub name: String,
    pub password: String,
    /// "administrator" or "staff" (the form's radio buttons).
    pub role: String,
}

/// Lists all users for the Users tab.
#[tauri::command]
pub async fn list_users(
    db: State<'_, DbState>,
    session: State<'_, SessionState>,
) -> Result<Vec<UserDto>, ApiError> {
    session.require_admin()?;
    debug!("list_users command");

    let users = db.inner().users().list().await?;
    Ok(users.into_iter().map(UserDto::from).collect())
}

/// Creates a user from the "New User" form.
#[tauri::command]
pub async fn create_user(
    db: State<'_, DbState>,
    session: State<'_, SessionState>,
    input: UserInputDto,
) -> Result<UserDto, ApiError> {
    let admin = session.require_admin()?;

    let role = Role::from_name(&input.role).ok_or_else(|| {
        ApiError::validation(format!(
            "role must be 'administrator' or 'staff', got '{}'",
            input.role
        ))
    })?;

    debug!(name = %input.name, role = role.as_str(), by = %admin.name, "create_user command");

    let created = db
        .inner()
        .users()
        .create(&input.name, &input.password, role)
        .await?;

    info!(id = created.id, name = %created.name, "User created");
    Ok(UserDto::from(created))
}

/// Deletes a user after the confirmation dialog.
///
/// Two accounts are protected: the seeded default administrator (refused
/// by the repository) and the currently-authenticated user (refused here,
/// where the session is known).
#[tauri::command]
pub async fn delete_user(
    db: State<'_, DbState>,
    session: State<'_, SessionState>,
    id: i64,
) -> Result<bool, ApiError> {
    let admin = session.require_admin()?;

    if admin.id == id {
        return Err(ApiError::validation(
            "you cannot delete the account you are logged in with",
        ));
    }

    debug!(id, by = %admin.name, "delete_user command");

    let removed = db.inner().users().delete(id).await?;
    if removed {
        info!(id, "User deleted");
    }
    Ok(removed)
}
