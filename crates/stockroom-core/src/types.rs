//! # Domain Types
//!
//! Core domain types used throughout Stockroom.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Movement     │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  id (i64)       │       │
//! │  │  name/category  │   │  product_id     │   │  name           │       │
//! │  │  quantity       │   │  quantity       │   │  role           │       │
//! │  │  unit_price     │   │  kind           │   └─────────────────┘       │
//! │  │  supplier       │   │  occurred_at    │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ProductFilter  │   │  MovementKind   │   │      Role       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  predicates +   │   │  Entry          │   │  Administrator  │       │
//! │  │  ordering       │   │  Exit           │   │  Staff          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identifiers are the store's `INTEGER PRIMARY KEY` values: immutable,
//! system-assigned, never reused by the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Role
// =============================================================================

/// The two access levels of the system.
///
/// Administrators manage users and may use every form; staff may log in and
/// operate the catalog and the ledger. Role checks happen at the
/// presentation boundary - the services themselves trust their caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access, including user management.
    Administrator,
    /// Catalog and ledger access only.
    Staff,
}

impl Role {
    /// Stable textual form, matching the `role` CHECK constraint.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Staff => "staff",
        }
    }

    /// Parses the textual form back. Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<Role> {
        match name {
            "administrator" => Some(Role::Administrator),
            "staff" => Some(Role::Staff),
            _ => None,
        }
    }

    /// Whether this role may perform administrator-only actions.
    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Administrator)
    }
}

// =============================================================================
// User
// =============================================================================

/// A user account, as read back from the store.
///
/// The credential digest is deliberately absent: list and session views
/// never carry it, so it cannot leak through a DTO by accident.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: Role,
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// `quantity` is only ever changed through the ledger or through the
/// product-edit form, both of which re-validate non-negativity; the store
/// enforces it again with a CHECK constraint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    pub id: i64,

    /// Display name. Unique together with `category`.
    pub name: String,

    pub category: String,

    /// Units on hand. Never negative.
    pub quantity: i64,

    /// Price per unit. Never negative.
    pub unit_price: f64,

    /// Optional supplier name.
    pub supplier: Option<String>,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether this product counts as low stock in the dashboard summary.
    #[inline]
    pub const fn is_low_stock(&self) -> bool {
        self.quantity <= crate::LOW_STOCK_THRESHOLD
    }

    /// Value of the units on hand.
    #[inline]
    pub fn stock_value(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Input for creating or fully updating a product.
///
/// Validation and normalization (trim + title-case) happen in the catalog
/// before anything is written; this struct carries the raw form values.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub supplier: Option<String>,
}

// =============================================================================
// Movement Kind
// =============================================================================

/// Direction of a stock movement.
///
/// The direction is carried here, not by the sign of the quantity: movement
/// quantities are always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// Stock received; quantity is added.
    Entry,
    /// Stock dispatched; quantity is subtracted, never below zero.
    Exit,
}

impl MovementKind {
    /// Stable textual form, matching the `kind` CHECK constraint.
    pub const fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Entry => "entry",
            MovementKind::Exit => "exit",
        }
    }

    /// Parses the textual form back. Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<MovementKind> {
        match name {
            "entry" => Some(MovementKind::Entry),
            "exit" => Some(MovementKind::Exit),
            _ => None,
        }
    }

    /// The signed delta this movement applies to a product's quantity.
    #[inline]
    pub const fn signed(&self, quantity: i64) -> i64 {
        match self {
            MovementKind::Entry => quantity,
            MovementKind::Exit => -quantity,
        }
    }
}

// =============================================================================
// Movement
// =============================================================================

/// One append-only ledger row.
///
/// Rows are created exactly once per reconciliation and never updated or
/// deleted by the application. `product_id` becomes `None` if the product
/// is later removed from the catalog - the history outlives the product.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Movement {
    pub id: i64,
    pub product_id: Option<i64>,

    /// Units moved. Strictly positive; direction lives in `kind`.
    pub quantity: i64,

    pub kind: MovementKind,

    /// Name of the user who recorded the movement, if any.
    pub acting_user: Option<String>,

    #[ts(as = "String")]
    pub occurred_at: DateTime<Utc>,

    pub note: Option<String>,
}

/// A movement joined with its product's current name, for history views.
///
/// `product_name` is `None` once the product has been deleted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct MovementRecord {
    pub id: i64,
    pub product_id: Option<i64>,
    pub product_name: Option<String>,
    pub quantity: i64,
    pub kind: MovementKind,
    pub acting_user: Option<String>,
    #[ts(as = "String")]
    pub occurred_at: DateTime<Utc>,
    pub note: Option<String>,
}

// =============================================================================
// Product Filter
// =============================================================================

/// Column a product listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Price,
    Quantity,
}

/// Listing order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Ascending
    }
}

/// Optional predicates and ordering for a product listing.
///
/// Every field is independent; an all-`None` filter lists the whole
/// catalog. Filtering is a pure projection - it never mutates anything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductFilter {
    /// Exact category match.
    pub category: Option<String>,

    /// Exact supplier match.
    pub supplier: Option<String>,

    /// Inclusive unit-price range.
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,

    /// Inclusive quantity range.
    pub quantity_min: Option<i64>,
    pub quantity_max: Option<i64>,

    /// Case-insensitive substring match on the product name.
    pub search: Option<String>,

    /// Ordering; `None` leaves store order (by id).
    pub sort: Option<SortKey>,

    #[serde(default)]
    pub order: SortOrder,
}

// =============================================================================
// Stock Summary
// =============================================================================

/// Units on hand per category. Feeds the dashboard's bar and pie charts.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct CategoryCount {
    pub category: String,
    pub quantity: i64,
}

/// Aggregated catalog metrics for the dashboard header.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StockSummary {
    /// Sum of all quantities.
    pub total_units: i64,

    /// Sum of quantity × unit price over the catalog.
    pub total_value: f64,

    /// Number of catalog rows.
    pub distinct_products: i64,

    /// Rows at or below [`crate::LOW_STOCK_THRESHOLD`].
    pub low_stock: i64,

    pub by_category: Vec<CategoryCount>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Administrator, Role::Staff] {
            assert_eq!(Role::from_name(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_name("root"), None);
    }

    #[test]
    fn test_movement_kind_signed() {
        assert_eq!(MovementKind::Entry.signed(7), 7);
        assert_eq!(MovementKind::Exit.signed(7), -7);
    }

    #[test]
    fn test_low_stock_threshold() {
        let product = Product {
            id: 1,
            name: "Beans".to_string(),
            category: "Food".to_string(),
            quantity: crate::LOW_STOCK_THRESHOLD,
            unit_price: 2.5,
            supplier: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(product.is_low_stock());
        assert!((product.stock_value() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_filter_is_unconstrained() {
        let filter = ProductFilter::default();
        assert!(filter.category.is_none());
        assert!(filter.search.is_none());
        assert_eq!(filter.order, SortOrder::Ascending);
    }
}
