//! Movement history and registration.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auth::AuthUser;
use crate::error::DashboardError;
use crate::AppState;
use stockroom_core::{MovementKind, MovementRecord};

/// Query parameters for `GET /api/movements`.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<u32>,
}

/// Body for `POST /api/movements`.
#[derive(Debug, Deserialize)]
pub struct RecordMovementRequest {
    pub product_id: i64,
    pub quantity: i64,
    /// "entry" or "exit".
    pub kind: String,
    pub note: Option<String>,
}

/// Response for a recorded movement.
#[derive(Debug, Serialize)]
pub struct RecordMovementResponse {
    pub product_id: i64,
    pub new_quantity: i64,
}

/// `GET /api/movements` - recent history, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<MovementRecord>>, DashboardError> {
    let limit = query.limit.unwrap_or(500).min(1000);
    debug!(limit, "list movements");

    let records = state.db.movements().list(limit).await?;
    Ok(Json(records))
}

/// `POST /api/movements` - register an entry or exit.
///
/// Any logged-in user may record movements, exactly as in the desktop
/// client; the acting user written to the ledger row is the token's
/// subject.
pub async fn record(
    AuthUser(claims): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<RecordMovementRequest>,
) -> Result<(StatusCode, Json<RecordMovementResponse>), DashboardError> {
    let kind = MovementKind::from_name(&request.kind).ok_or_else(|| {
        DashboardError::bad_request(format!(
            "kind must be 'entry' or 'exit', got '{}'",
            request.kind
        ))
    })?;

    debug!(
        product_id = request.product_id,
        quantity = request.quantity,
        kind = kind.as_str(),
        by = %claims.name,
        "record movement"
    );

    let new_quantity = state
        .db
        .movements()
        .apply(
            request.product_id,
            request.quantity,
            kind,
            Some(&claims.name),
            request.note.as_deref(),
        )
        .await?;

    info!(
        product_id = request.product_id,
        new_quantity,
        kind = kind.as_str(),
        "Movement recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(RecordMovementResponse {
            product_id: request.product_id,
            new_quantity,
        }),
    ))
}
