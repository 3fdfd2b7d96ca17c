//! Login and user management.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auth::AdminUser;
use crate::error::DashboardError;
use crate::AppState;
use stockroom_core::{Role, User};

/// Body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// Response from a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Body for `POST /api/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub password: String,
    /// "administrator" or "staff".
    pub role: String,
}

/// Response body for deletions.
#[derive(Debug, Serialize)]
pub struct RemovedResponse {
    pub removed: bool,
}

/// `POST /api/login` - authenticate and issue a token.
///
/// Unknown names and wrong passwords are indistinguishable: both come
/// back as 401.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, DashboardError> {
    debug!(name = %request.name.trim(), "login");

    let user = state
        .db
        .users()
        .authenticate(&request.name, &request.password)
        .await?;
    let token = state.tokens.issue(&user)?;

    info!(name = %user.name, role = user.role.as_str(), "Dashboard login");
    Ok(Json(LoginResponse { token, user }))
}

/// `GET /api/users` (administrator). Digests are never included.
pub async fn list(
    AdminUser(_claims): AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, DashboardError> {
    let users = state.db.users().list().await?;
    Ok(Json(users))
}

/// `POST /api/users` (administrator).
pub async fn create(
    AdminUser(claims): AdminUser,
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), DashboardError> {
    let role = Role::from_name(&request.role).ok_or_else(|| {
        DashboardError::bad_request(format!(
            "role must be 'administrator' or 'staff', got '{}'",
            request.role
        ))
    })?;

    debug!(name = %request.name, role = role.as_str(), by = %claims.name, "create user");

    let created = state
        .db
        .users()
        .create(&request.name, &request.password, role)
        .await?;

    info!(id = created.id, name = %created.name, "User created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `DELETE /api/users/{id}` (administrator).
///
/// Refuses the caller's own account here (the session is the token) and
/// the seeded default administrator in the repository.
pub async fn delete(
    AdminUser(claims): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RemovedResponse>, DashboardError> {
    if claims.sub == id {
        return Err(DashboardError::bad_request(
            "you cannot delete the account you are logged in with",
        ));
    }

    debug!(id, by = %claims.name, "delete user");

    let removed = state.db.users().delete(id).await?;
    if removed {
        info!(id, "User deleted");
    }
    Ok(Json(RemovedResponse { removed }))
}
