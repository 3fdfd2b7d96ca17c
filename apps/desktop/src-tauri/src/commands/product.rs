//! # Product Commands
//!
//! Tauri commands for the Products tab: filtered listing, create/edit
//! forms and deletion.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Listing Flow                                 │
//! │                                                                         │
//! │  User types "rice" in the search box / picks a category                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('list_products', { filter: { search: 'rice', … } })            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductFilterDto → ProductFilter (sort/order strings parsed here)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.products().list(&filter)  ← pure projection, no side effects       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProductDto> rendered in the list view                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{DbState, SessionState};
use stockroom_core::{NewProduct, Product, ProductFilter, SortKey, SortOrder};

/// Product DTO (Data Transfer Object) for the frontend.
///
/// ## Why DTO?
/// - Decouples internal domain model from API contract
/// - Handles serde rename to camelCase for JS consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub supplier: Option<String>,
    pub low_stock: bool,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            low_stock: p.is_low_stock(),
            id: p.id,
            name: p.name,
            category: p.category,
            quantity: p.quantity,
            unit_price: p.unit_price,
            supplier: p.supplier,
        }
    }
}

/// Create/edit form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInputDto {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub supplier: Option<String>,
}

impl From<ProductInputDto> for NewProduct {
    fn from(input: ProductInputDto) -> Self {
        NewProduct {
            name: input.name,
            category: input.category,
            quantity: input.quantity,
            unit_price: input.unit_price,
            supplier: input.supplier,
        }
    }
}

/// Filter payload from the search/filter bar.
///
/// Sort selections arrive as plain strings from the UI controls and are
/// parsed into the whitelisted keys here; anything unrecognized simply
/// leaves the listing unsorted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilterDto {
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

impl From<ProductFilterDto> for ProductFilter {
    fn from(dto: ProductFilterDto) -> Self {
        let sort = match dto.sort.as_deref() {
            Some("name") => Some(SortKey::Name),
            Some("price") => Some(SortKey::Price),
            Some("quantity") => Some(SortKey::Quantity),
            _ => None,
        };
        let order = match dto.order.as_deref() {
            Some("desc") | Some("descending") => SortOrder::Descending,
            _ => SortOrder::Ascending,
        };
        ProductFilter {
            category: dto.category,
            supplier: dto.supplier,
            price_min: dto.price_min,
            price_max: dto.price_max,
            quantity_min: dto.quantity_min,
            quantity_max: dto.quantity_max,
            search: dto.search,
            sort,
            order,
        }
    }
}

/// Lists products matching the current filter bar.
///
/// Available without login: the read-only product table is the public
/// face of the application, mirroring the dashboard's open listing.
#[tauri::command]
pub async fn list_products(
    db: State<'_, DbState>,
    filter: Option<ProductFilterDto>,
) -> Result<Vec<ProductDto>, ApiError> {
    let filter = ProductFilter::from(filter.unwrap_or_default());
    debug!(?filter, "list_products command");

    let products = db.inner().products().list(&filter).await?;
    Ok(products.into_iter().map(ProductDto::from).collect())
}

/// Gets a single product for the edit form.
#[tauri::command]
pub async fn get_product(db: State<'_, DbState>, id: i64) -> Result<ProductDto, ApiError> {
    debug!(id, "get_product command");
    let product = db
        .inner()
        .products()
        .get(id)
        .await?
        .ok_or_else(|| ApiError::from(stockroom_db::StoreError::not_found("product", id)))?;
    Ok(ProductDto::from(product))
}

/// Creates a product from the "New Product" form.
#[tauri::command]
pub async fn create_product(
    db: State<'_, DbState>,
    session: State<'_, SessionState>,
    input: ProductInputDto,
) -> Result<ProductDto, ApiError> {
    let user = session.require_user()?;
    debug!(name = %input.name, by = %user.name, "create_product command");

    let created = db.inner().products().create(&input.into()).await?;
    info!(id = created.id, name = %created.name, "Product created");
    Ok(ProductDto::from(created))
}

/// Updates a product from the "Edit Product" form.
///
/// Direct quantity edits pass through the same validation as creation;
/// they cannot make the quantity negative.
#[tauri::command]
pub async fn update_product(
    db: State<'_, DbState>,
    session: State<'_, SessionState>,
    id: i64,
    input: ProductInputDto,
) -> Result<ProductDto, ApiError> {
    let user = session.require_user()?;
    debug!(id, by = %user.name, "update_product command");

    let updated = db.inner().products().update(id, &input.into()).await?;
    info!(id, "Product updated");
    Ok(ProductDto::from(updated))
}

/// Deletes a product after the confirmation dialog.
///
/// Idempotent: returns `false` when the id was already gone, with no
/// error. Movement history survives the deletion.
#[tauri::command]
pub async fn delete_product(
    db: State<'_, DbState>,
    session: State<'_, SessionState>,
    id: i64,
) -> Result<bool, ApiError> {
    let user = session.require_user()?;
    debug!(id, by = %user.name, "delete_product command");

    let removed = db.inner().products().delete(id).await?;
    if removed {
        info!(id, "Product deleted");
    }
    Ok(removed)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_dto_parses_sort_strings() {
        let filter = ProductFilter::from(ProductFilterDto {
            sort: Some("price".to_string()),
            order: Some("desc".to_string()),
            ..ProductFilterDto::default()
        });
        assert_eq!(filter.sort, Some(SortKey::Price));
        assert_eq!(filter.order, SortOrder::Descending);

        let unsorted = ProductFilter::from(ProductFilterDto {
            sort: Some("bogus".to_string()),
            ..ProductFilterDto::default()
        });
        assert_eq!(unsorted.sort, None);
        assert_eq!(unsorted.order, SortOrder::Ascending);
    }
}
