//! Aggregated metrics and filter dropdown values.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::DashboardError;
use crate::AppState;
use stockroom_core::StockSummary;

/// Distinct values for the filter sidebar's dropdowns.
#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub suppliers: Vec<String>,
}

/// `GET /api/summary` - header metrics plus the per-category quantities
/// that feed the bar and pie charts.
pub async fn summary(State(state): State<AppState>) -> Result<Json<StockSummary>, DashboardError> {
    let summary = state.db.products().summary().await?;
    Ok(Json(summary))
}

/// `GET /api/filters` - dropdown contents for the filter sidebar.
pub async fn filters(State(state): State<AppState>) -> Result<Json<FilterOptions>, DashboardError> {
    let categories = state.db.products().categories().await?;
    let suppliers = state.db.products().suppliers().await?;
    Ok(Json(FilterOptions {
        categories,
        suppliers,
    }))
}
