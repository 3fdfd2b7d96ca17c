//! Product listing and administrator CRUD.
//!
//! The listing and its filters are open (the original table view required
//! no login); creating, editing and deleting are administrator-gated.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auth::AdminUser;
use crate::error::DashboardError;
use crate::AppState;
use stockroom_core::{NewProduct, Product, ProductFilter, SortKey, SortOrder};

/// Query parameters for `GET /api/products` and `GET /api/export.csv`.
///
/// Sort and order arrive as the strings the filter sidebar uses;
/// unrecognized values leave the listing unsorted rather than failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub supplier: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub quantity_min: Option<i64>,
    pub quantity_max: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl From<ListQuery> for ProductFilter {
    fn from(query: ListQuery) -> Self {
        let sort = match query.sort.as_deref() {
            Some("name") => Some(SortKey::Name),
            Some("price") => Some(SortKey::Price),
            Some("quantity") => Some(SortKey::Quantity),
            _ => None,
        };
        let order = match query.order.as_deref() {
            Some("desc") | Some("descending") => SortOrder::Descending,
            _ => SortOrder::Ascending,
        };
        ProductFilter {
            category: query.category,
            supplier: query.supplier,
            price_min: query.price_min,
            price_max: query.price_max,
            quantity_min: query.quantity_min,
            quantity_max: query.quantity_max,
            search: query.search,
            sort,
            order,
        }
    }
}

/// Response body for deletions.
#[derive(Debug, Serialize)]
pub struct RemovedResponse {
    pub removed: bool,
}

/// `GET /api/products` - the filtered table.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>, DashboardError> {
    let filter = ProductFilter::from(query);
    debug!(?filter, "list products");

    let products = state.db.products().list(&filter).await?;
    Ok(Json(products))
}

/// `POST /api/products` - the "register product" form (administrator).
pub async fn create(
    AdminUser(claims): AdminUser,
    State(state): State<AppState>,
    Json(input): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>), DashboardError> {
    debug!(name = %input.name, by = %claims.name, "create product");

    let created = state.db.products().create(&input).await?;
    info!(id = created.id, name = %created.name, "Product created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/products/{id}` - the edit form (administrator).
pub async fn update(
    AdminUser(claims): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<NewProduct>,
) -> Result<Json<Product>, DashboardError> {
    debug!(id, by = %claims.name, "update product");

    let updated = state.db.products().update(id, &input).await?;
    Ok(Json(updated))
}

/// `DELETE /api/products/{id}` (administrator).
///
/// Idempotent: an unknown id reports `removed: false` with status 200.
pub async fn delete(
    AdminUser(claims): AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RemovedResponse>, DashboardError> {
    debug!(id, by = %claims.name, "delete product");

    let removed = state.db.products().delete(id).await?;
    if removed {
        info!(id, "Product deleted");
    }
    Ok(Json(RemovedResponse { removed }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_parses_sort() {
        let filter = ProductFilter::from(ListQuery {
            sort: Some("quantity".to_string()),
            order: Some("desc".to_string()),
            ..ListQuery::default()
        });
        assert_eq!(filter.sort, Some(SortKey::Quantity));
        assert_eq!(filter.order, SortOrder::Descending);
    }

    #[test]
    fn test_unknown_sort_leaves_listing_unsorted() {
        let filter = ProductFilter::from(ListQuery {
            sort: Some("color".to_string()),
            ..ListQuery::default()
        });
        assert_eq!(filter.sort, None);
    }
}
