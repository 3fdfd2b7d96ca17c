//! # Movement Repository
//!
//! The stock-movement ledger: keeps a product's quantity and its movement
//! history mutually consistent under signed adjustments.
//!
//! ## Reconciliation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 apply(product, 3, Exit, …)                              │
//! │                                                                         │
//! │  BEGIN TRANSACTION                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UPDATE products SET quantity = quantity - 3                           │
//! │   WHERE id = ? AND quantity >= 3        ← guarded delta                │
//! │       │                                                                 │
//! │       ├── 0 rows ──► product missing?  → NotFound                      │
//! │       │              product short?    → InsufficientStock             │
//! │       │              (transaction rolls back, nothing changed)         │
//! │       ▼                                                                 │
//! │  INSERT INTO movements (product_id, quantity, kind, …)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT quantity  ← post-state, read inside the same transaction       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  COMMIT   → both effects, or neither                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The guard rides on the UPDATE itself, so two concurrent exits can never
//! both pass a sufficiency check against a stale quantity: whichever
//! write transaction lands second re-evaluates `quantity >= ?` against the
//! committed state and fails cleanly.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use stockroom_core::validation;
use stockroom_core::{MovementKind, MovementRecord};

/// Repository for the append-only movement ledger.
///
/// Movements are created exactly once per reconciliation and never
/// updated or deleted; there are deliberately no such methods here.
#[derive(Debug, Clone)]
pub struct MovementRepository {
    pool: SqlitePool,
}

impl MovementRepository {
    /// Creates a new MovementRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MovementRepository { pool }
    }

    /// Applies a movement to a product and appends the matching ledger row,
    /// as one transaction.
    ///
    /// ## Contract
    /// * `quantity` must be strictly positive (`Validation` otherwise)
    /// * `product_id` must reference an existing product (`NotFound`)
    /// * An `Exit` larger than the units on hand fails with
    ///   `InsufficientStock`; an `Entry` has no upper bound
    /// * Either both the quantity change and the movement row take effect,
    ///   or neither does
    ///
    /// ## Returns
    /// The product's new quantity, for the caller to display.
    pub async fn apply(
        &self,
        product_id: i64,
        quantity: i64,
        kind: MovementKind,
        acting_user: Option<&str>,
        note: Option<&str>,
    ) -> StoreResult<i64> {
        validation::validate_movement_quantity(quantity)?;

        debug!(product_id, quantity, kind = kind.as_str(), "Applying movement");

        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        // Guarded delta update. For exits the sufficiency check is part of
        // the WHERE clause, so it is evaluated against the row state this
        // transaction actually sees - not against a value read earlier.
        let updated = match kind {
            MovementKind::Entry => {
                sqlx::query(
                    "UPDATE products SET quantity = quantity + ?1, updated_at = ?2 WHERE id = ?3",
                )
                .bind(quantity)
                .bind(now)
                .bind(product_id)
                .execute(&mut *tx)
                .await?
            }
            MovementKind::Exit => {
                sqlx::query(
                    r#"
                    UPDATE products SET quantity = quantity - ?1, updated_at = ?2
                    WHERE id = ?3 AND quantity >= ?1
                    "#,
                )
                .bind(quantity)
                .bind(now)
                .bind(product_id)
                .execute(&mut *tx)
                .await?
            }
        };

        if updated.rows_affected() == 0 {
            // Nothing changed: either the product is unknown, or the exit
            // was short. Look once to tell the two apart, then bail - the
            // dropped transaction rolls back.
            let current: Option<(String, i64)> =
                sqlx::query_as("SELECT name, quantity FROM products WHERE id = ?1")
                    .bind(product_id)
                    .fetch_optional(&mut *tx)
                    .await?;

            return match current {
                None => Err(StoreError::not_found("product", product_id)),
                Some((name, available)) => Err(StoreError::InsufficientStock {
                    name,
                    available,
                    requested: quantity,
                }),
            };
        }

        sqlx::query(
            r#"
            INSERT INTO movements (product_id, quantity, kind, acting_user, occurred_at, note)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(product_id)
        .bind(quantity)
        .bind(kind)
        .bind(acting_user)
        .bind(now)
        .bind(note)
        .execute(&mut *tx)
        .await?;

        let new_quantity: i64 = sqlx::query_scalar("SELECT quantity FROM products WHERE id = ?1")
            .bind(product_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(product_id, new_quantity, "Movement applied");
        Ok(new_quantity)
    }

    /// Lists recent movements joined with their product names, newest
    /// first. `product_name` is `None` for movements whose product was
    /// later deleted.
    pub async fn list(&self, limit: u32) -> StoreResult<Vec<MovementRecord>> {
        let records = sqlx::query_as::<_, MovementRecord>(
            r#"
            SELECT
                m.id,
                m.product_id,
                p.name AS product_name,
                m.quantity,
                m.kind,
                m.acting_user,
                m.occurred_at,
                m.note
            FROM movements m
            LEFT JOIN products p ON p.id = m.product_id
            ORDER BY m.occurred_at DESC, m.id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Lists the full history of one product, newest first.
    pub async fn list_for_product(&self, product_id: i64) -> StoreResult<Vec<MovementRecord>> {
        let records = sqlx::query_as::<_, MovementRecord>(
            r#"
            SELECT
                m.id,
                m.product_id,
                p.name AS product_name,
                m.quantity,
                m.kind,
                m.acting_user,
                m.occurred_at,
                m.note
            FROM movements m
            LEFT JOIN products p ON p.id = m.product_id
            WHERE m.product_id = ?1
            ORDER BY m.occurred_at DESC, m.id DESC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Counts ledger rows.
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movements")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use stockroom_core::NewProduct;

    async fn db_with_product(quantity: i64) -> (Database, i64) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let product = db
            .products()
            .create(&NewProduct {
                name: "Rice".to_string(),
                category: "Food".to_string(),
                quantity,
                unit_price: 4.0,
                supplier: None,
            })
            .await
            .unwrap();
        (db, product.id)
    }

    #[tokio::test]
    async fn test_invalid_quantity_short_circuits() {
        let (db, id) = db_with_product(10).await;

        for bad in [0, -3] {
            let err = db
                .movements()
                .apply(id, bad, MovementKind::Entry, None, None)
                .await;
            assert!(matches!(err, Err(StoreError::Validation(_))));
        }
        assert_eq!(db.movements().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let (db, _) = db_with_product(10).await;
        let err = db
            .movements()
            .apply(999, 1, MovementKind::Entry, None, None)
            .await;
        assert!(matches!(err, Err(StoreError::NotFound { .. })));
        assert_eq!(db.movements().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_entry_has_no_upper_bound() {
        let (db, id) = db_with_product(0).await;
        let new_quantity = db
            .movements()
            .apply(id, 1_000_000, MovementKind::Entry, Some("ana"), None)
            .await
            .unwrap();
        assert_eq!(new_quantity, 1_000_000);
    }

    #[tokio::test]
    async fn test_history_records_actor_and_note() {
        let (db, id) = db_with_product(10).await;
        db.movements()
            .apply(id, 2, MovementKind::Exit, Some("ana"), Some("damaged"))
            .await
            .unwrap();

        let records = db.movements().list(10).await.unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.product_name.as_deref(), Some("Rice"));
        assert_eq!(record.acting_user.as_deref(), Some("ana"));
        assert_eq!(record.note.as_deref(), Some("damaged"));
        assert_eq!(record.kind, MovementKind::Exit);
    }

    #[tokio::test]
    async fn test_list_for_product_filters_history() {
        let (db, id) = db_with_product(10).await;
        let other = db
            .products()
            .create(&NewProduct {
                name: "Soap".to_string(),
                category: "Cleaning".to_string(),
                quantity: 5,
                unit_price: 1.0,
                supplier: None,
            })
            .await
            .unwrap();

        db.movements()
            .apply(id, 1, MovementKind::Entry, None, None)
            .await
            .unwrap();
        db.movements()
            .apply(other.id, 1, MovementKind::Entry, None, None)
            .await
            .unwrap();

        let history = db.movements().list_for_product(id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].product_id, Some(id));
    }
}
