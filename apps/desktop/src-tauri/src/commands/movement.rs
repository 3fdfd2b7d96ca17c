//! # Movement Commands
//!
//! Tauri commands for the entry/exit prompts and the Movements tab.
//!
//! The quantity prompt in the UI produces a plain positive integer; the
//! ledger does the rest (validation, sufficiency check, atomic
//! quantity-update + history-append) in one place for both buttons.

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{DbState, SessionState};
use stockroom_core::{MovementKind, MovementRecord};

/// Outcome of an entry/exit registration, for the confirmation dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementOutcomeDto {
    pub product_id: i64,
    pub new_quantity: i64,
}

/// History row DTO for the Movements tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementRecordDto {
    pub id: i64,
    pub product_id: Option<i64>,
    /// `None` when the product was deleted after the movement.
    pub product_name: Option<String>,
    pub quantity: i64,
    pub kind: String,
    pub acting_user: Option<String>,
    pub occurred_at: String,
    pub note: Option<String>,
}

impl From<MovementRecord> for MovementRecordDto {
    fn from(record: MovementRecord) -> Self {
        MovementRecordDto {
            id: record.id,
            product_id: record.product_id,
            product_name: record.product_name,
            quantity: record.quantity,
            kind: record.kind.as_str().to_string(),
            acting_user: record.acting_user,
            occurred_at: record.occurred_at.to_rfc3339(),
            note: record.note,
        }
    }
}

async fn record(
    db: &DbState,
    session: &SessionState,
    product_id: i64,
    quantity: i64,
    kind: MovementKind,
    note: Option<String>,
) -> Result<MovementOutcomeDto, ApiError> {
    let user = session.require_user()?;
    debug!(product_id, quantity, kind = kind.as_str(), by = %user.name, "record movement");

    let new_quantity = db
        .inner()
        .movements()
        .apply(product_id, quantity, kind, Some(&user.name), note.as_deref())
        .await?;

    info!(product_id, new_quantity, kind = kind.as_str(), "Movement recorded");
    Ok(MovementOutcomeDto {
        product_id,
        new_quantity,
    })
}

/// Registers a stock entry ("Register Entry" button).
#[tauri::command]
pub async fn record_entry(
    db: State<'_, DbState>,
    session: State<'_, SessionState>,
    product_id: i64,
    quantity: i64,
    note: Option<String>,
) -> Result<MovementOutcomeDto, ApiError> {
    record(&db, &session, product_id, quantity, MovementKind::Entry, note).await
}

/// Registers a stock exit ("Register Exit" button).
///
/// Fails with `INSUFFICIENT_STOCK` when the prompt asks for more units
/// than are on hand; nothing is written in that case.
#[tauri::command]
pub async fn record_exit(
    db: State<'_, DbState>,
    session: State<'_, SessionState>,
    product_id: i64,
    quantity: i64,
    note: Option<String>,
) -> Result<MovementOutcomeDto, ApiError> {
    record(&db, &session, product_id, quantity, MovementKind::Exit, note).await
}

/// Lists recent movements for the Movements tab, newest first.
#[tauri::command]
pub async fn list_movements(
    db: State<'_, DbState>,
    limit: Option<u32>,
) -> Result<Vec<MovementRecordDto>, ApiError> {
    let limit = limit.unwrap_or(500).min(1000);
    debug!(limit, "list_movements command");

    let records = db.inner().movements().list(limit).await?;
    Ok(records.into_iter().map(MovementRecordDto::from).collect())
}
