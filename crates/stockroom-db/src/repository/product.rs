//! # Product Repository
//!
//! Catalog operations for products.
//!
//! ## Key Operations
//! - CRUD with validation and normalization on every write path
//! - Filtered, ordered listing (pure projection over the catalog)
//! - Aggregated stock summary for the dashboard
//!
//! ## Filtered Listing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   How a Filtered Listing Works                          │
//! │                                                                         │
//! │  ProductFilter { category: Some("Food"), search: Some("rice"),         │
//! │                  sort: Some(Price), order: Descending, .. }            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT … FROM products                                                │
//! │   WHERE category = ?      ← each predicate is appended only if set     │
//! │     AND LOWER(name) LIKE ?                                             │
//! │   ORDER BY unit_price DESC ← column from a whitelist, never from input │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product>  (no side effects; the catalog is never mutated)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use stockroom_core::validation;
use stockroom_core::{
    CategoryCount, NewProduct, Product, ProductFilter, SortKey, SortOrder, StockSummary,
    LOW_STOCK_THRESHOLD,
};

const PRODUCT_COLUMNS: &str =
    "id, name, category, quantity, unit_price, supplier, created_at, updated_at";

/// Maps a sort key to its column. The whitelist keeps user-supplied sort
/// selections out of the SQL text.
const fn sort_column(key: SortKey) -> &'static str {
    match key {
        SortKey::Name => "name",
        SortKey::Price => "unit_price",
        SortKey::Quantity => "quantity",
    }
}

/// Repository for catalog operations on products.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
/// let created = repo.create(&new_product).await?;
/// let listing = repo.list(&ProductFilter::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// Validates the form (name/category present, quantity ≥ 0, price ≥ 0)
    /// before touching the store, then normalizes name and supplier
    /// (trim + title-case).
    ///
    /// ## Returns
    /// * `Ok(Product)` - The stored row, including its assigned id
    /// * `Err(StoreError::Validation)` - Bad input, nothing written
    /// * `Err(StoreError::Duplicate)` - (name, category) already exists
    pub async fn create(&self, input: &NewProduct) -> StoreResult<Product> {
        validation::validate_product(input)?;

        let name = validation::normalize_name(&input.name);
        let category = input.category.trim().to_string();
        let supplier = validation::normalize_optional_name(input.supplier.as_deref());
        let now = Utc::now();

        debug!(name = %name, category = %category, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, category, quantity, unit_price, supplier, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&name)
        .bind(&category)
        .bind(input.quantity)
        .bind(input.unit_price)
        .bind(&supplier)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            let err = StoreError::from(err);
            if err.is_duplicate() {
                StoreError::duplicate("product", format!("{name} ({category})"))
            } else {
                err
            }
        })?;

        Ok(Product {
            id: result.last_insert_rowid(),
            name,
            category,
            quantity: input.quantity,
            unit_price: input.unit_price,
            supplier,
            created_at: now,
            updated_at: now,
        })
    }

    /// Updates an existing product (full replacement of the editable fields).
    ///
    /// The same validation as [`create`](Self::create) runs first - in
    /// particular a direct quantity edit through the product form cannot
    /// make the quantity negative.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The updated row
    /// * `Err(StoreError::NotFound)` - Unknown id
    /// * `Err(StoreError::Duplicate)` - Rename collides with another
    ///   (name, category) pair
    pub async fn update(&self, id: i64, input: &NewProduct) -> StoreResult<Product> {
        validation::validate_product(input)?;

        let name = validation::normalize_name(&input.name);
        let category = input.category.trim().to_string();
        let supplier = validation::normalize_optional_name(input.supplier.as_deref());
        let now = Utc::now();

        debug!(id, name = %name, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = ?1,
                category = ?2,
                quantity = ?3,
                unit_price = ?4,
                supplier = ?5,
                updated_at = ?6
            WHERE id = ?7
            "#,
        )
        .bind(&name)
        .bind(&category)
        .bind(input.quantity)
        .bind(input.unit_price)
        .bind(&supplier)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|err| {
            let err = StoreError::from(err);
            if err.is_duplicate() {
                StoreError::duplicate("product", format!("{name} ({category})"))
            } else {
                err
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("product", id));
        }

        self.get(id)
            .await?
            .ok_or_else(|| StoreError::not_found("product", id))
    }

    /// Deletes a product.
    ///
    /// Idempotent: deleting an unknown id is a no-op. Movement history is
    /// NOT removed - the store detaches it (`ON DELETE SET NULL`) so the
    /// ledger stays complete.
    ///
    /// ## Returns
    /// Whether a row was actually removed.
    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Gets a product by its id.
    pub async fn get(&self, id: i64) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists products matching a filter.
    ///
    /// Every predicate is optional and independent; a default filter
    /// returns the whole catalog. Ordering falls back to insertion order
    /// (id) when no sort key is selected.
    pub async fn list(&self, filter: &ProductFilter) -> StoreResult<Vec<Product>> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE 1 = 1"));

        if let Some(category) = &filter.category {
            query.push(" AND category = ").push_bind(category);
        }
        if let Some(supplier) = &filter.supplier {
            query.push(" AND supplier = ").push_bind(supplier);
        }
        if let Some(price_min) = filter.price_min {
            query.push(" AND unit_price >= ").push_bind(price_min);
        }
        if let Some(price_max) = filter.price_max {
            query.push(" AND unit_price <= ").push_bind(price_max);
        }
        if let Some(quantity_min) = filter.quantity_min {
            query.push(" AND quantity >= ").push_bind(quantity_min);
        }
        if let Some(quantity_max) = filter.quantity_max {
            query.push(" AND quantity <= ").push_bind(quantity_max);
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search.trim().to_lowercase());
            query.push(" AND LOWER(name) LIKE ").push_bind(pattern);
        }

        match filter.sort {
            Some(key) => {
                query.push(" ORDER BY ");
                query.push(sort_column(key));
                query.push(match filter.order {
                    SortOrder::Ascending => " ASC",
                    SortOrder::Descending => " DESC",
                });
            }
            None => {
                query.push(" ORDER BY id");
            }
        }

        let products = query
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Distinct categories, for filter dropdowns.
    pub async fn categories(&self) -> StoreResult<Vec<String>> {
        let categories =
            sqlx::query_scalar("SELECT DISTINCT category FROM products ORDER BY category")
                .fetch_all(&self.pool)
                .await?;
        Ok(categories)
    }

    /// Distinct suppliers (where set), for filter dropdowns.
    pub async fn suppliers(&self) -> StoreResult<Vec<String>> {
        let suppliers = sqlx::query_scalar(
            "SELECT DISTINCT supplier FROM products WHERE supplier IS NOT NULL ORDER BY supplier",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(suppliers)
    }

    /// Counts catalog rows.
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Aggregated catalog metrics: the dashboard header numbers plus the
    /// per-category quantities that feed its charts.
    pub async fn summary(&self) -> StoreResult<StockSummary> {
        let (total_units, total_value, distinct_products): (i64, f64, i64) = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(quantity), 0),
                COALESCE(SUM(quantity * unit_price), 0.0),
                COUNT(*)
            FROM products
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let low_stock: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE quantity <= ?1")
                .bind(LOW_STOCK_THRESHOLD)
                .fetch_one(&self.pool)
                .await?;

        let by_category = sqlx::query_as::<_, CategoryCount>(
            r#"
            SELECT category, COALESCE(SUM(quantity), 0) AS quantity
            FROM products
            GROUP BY category
            ORDER BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(StockSummary {
            total_units,
            total_value,
            distinct_products,
            low_stock,
            by_category,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn input(name: &str, category: &str, quantity: i64, price: f64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            unit_price: price,
            supplier: None,
        }
    }

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_create_normalizes_name_and_supplier() {
        let db = db().await;
        let created = db
            .products()
            .create(&NewProduct {
                name: "  mineral water ".to_string(),
                category: "Food".to_string(),
                quantity: 3,
                unit_price: 1.5,
                supplier: Some("  acme supplies ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(created.name, "Mineral Water");
        assert_eq!(created.supplier.as_deref(), Some("Acme Supplies"));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_without_writing() {
        let db = db().await;
        let err = db.products().create(&input("", "Food", 1, 1.0)).await;
        assert!(matches!(err, Err(StoreError::Validation(_))));
        assert_eq!(db.products().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let db = db().await;
        let err = db.products().update(999, &input("Rice", "Food", 1, 1.0)).await;
        assert!(matches!(err, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_cannot_make_quantity_negative() {
        let db = db().await;
        let created = db.products().create(&input("Rice", "Food", 5, 2.0)).await.unwrap();
        let err = db
            .products()
            .update(created.id, &input("Rice", "Food", -1, 2.0))
            .await;
        assert!(matches!(err, Err(StoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_filters_compose() {
        let db = db().await;
        let repo = db.products();
        repo.create(&input("Rice 1kg", "Food", 10, 4.0)).await.unwrap();
        repo.create(&input("Rice 5kg", "Food", 2, 18.0)).await.unwrap();
        repo.create(&input("Soap", "Cleaning", 50, 1.2)).await.unwrap();

        // Category equality
        let food = repo
            .list(&ProductFilter {
                category: Some("Food".to_string()),
                ..ProductFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(food.len(), 2);

        // Case-insensitive substring search
        let rice = repo
            .list(&ProductFilter {
                search: Some("RICE".to_string()),
                ..ProductFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(rice.len(), 2);

        // Price range + quantity range
        let cheap_and_stocked = repo
            .list(&ProductFilter {
                price_max: Some(5.0),
                quantity_min: Some(10),
                ..ProductFilter::default()
            })
            .await
            .unwrap();
        let names: Vec<_> = cheap_and_stocked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Rice 1kg", "Soap"]);
    }

    #[tokio::test]
    async fn test_sorting_is_whitelisted_and_ordered() {
        let db = db().await;
        let repo = db.products();
        repo.create(&input("B", "Food", 1, 3.0)).await.unwrap();
        repo.create(&input("A", "Food", 2, 1.0)).await.unwrap();
        repo.create(&input("C", "Food", 3, 2.0)).await.unwrap();

        let by_price_desc = repo
            .list(&ProductFilter {
                sort: Some(SortKey::Price),
                order: SortOrder::Descending,
                ..ProductFilter::default()
            })
            .await
            .unwrap();
        let names: Vec<_> = by_price_desc.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);

        let by_name = repo
            .list(&ProductFilter {
                sort: Some(SortKey::Name),
                ..ProductFilter::default()
            })
            .await
            .unwrap();
        let names: Vec<_> = by_name.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_summary_aggregates() {
        let db = db().await;
        let repo = db.products();
        repo.create(&input("Rice", "Food", 10, 2.0)).await.unwrap();
        repo.create(&input("Soap", "Cleaning", 3, 1.5)).await.unwrap();

        let summary = repo.summary().await.unwrap();
        assert_eq!(summary.total_units, 13);
        assert_eq!(summary.distinct_products, 2);
        assert_eq!(summary.low_stock, 1); // Soap at 3 ≤ threshold
        assert!((summary.total_value - 24.5).abs() < 1e-9);
        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_category[0].category, "Cleaning");
        assert_eq!(summary.by_category[0].quantity, 3);
    }

    #[tokio::test]
    async fn test_distinct_categories_and_suppliers() {
        let db = db().await;
        let repo = db.products();
        repo.create(&NewProduct {
            supplier: Some("Acme".to_string()),
            ..input("Rice", "Food", 1, 1.0)
        })
        .await
        .unwrap();
        repo.create(&input("Soap", "Cleaning", 1, 1.0)).await.unwrap();

        assert_eq!(repo.categories().await.unwrap(), vec!["Cleaning", "Food"]);
        assert_eq!(repo.suppliers().await.unwrap(), vec!["Acme"]);
    }
}
