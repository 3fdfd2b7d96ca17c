//! # Validation Module
//!
//! Input validation rules for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form (desktop window / dashboard page)                       │
//! │  ├── Basic format checks, immediate feedback                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE, called by the repositories                      │
//! │  ├── Runs before any write; a failure short-circuits the operation     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK / UNIQUE / foreign key constraints               │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every validator either returns `Ok` or an error the caller must
//! propagate - there is no "warn and continue" path.

use crate::error::{ValidationError, ValidationResult};
use crate::types::NewProduct;

const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field: non-empty after trimming, bounded length.
pub fn validate_required_text(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a user name.
pub fn validate_user_name(name: &str) -> ValidationResult<()> {
    validate_required_text("name", name)
}

/// Validates a password (the raw secret, before digesting).
///
/// Only presence is required; strength rules are out of scope.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock quantity as stored on a product: zero or greater.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates a movement quantity: strictly positive.
///
/// The direction of a movement is carried by its kind, so the quantity
/// itself is never signed and never zero.
pub fn validate_movement_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::NotPositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates a unit price: finite and zero or greater.
pub fn validate_unit_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "unit price".to_string(),
        });
    }
    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "unit price".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Product Validation & Normalization
// =============================================================================

/// Validates a complete product form.
///
/// Checks every field and fails on the first violation: name and category
/// present, quantity ≥ 0, price ≥ 0 and finite.
pub fn validate_product(input: &NewProduct) -> ValidationResult<()> {
    validate_required_text("name", &input.name)?;
    validate_required_text("category", &input.category)?;
    validate_quantity(input.quantity)?;
    validate_unit_price(input.unit_price)?;
    Ok(())
}

/// Trims and title-cases a display name ("  mineral water " → "Mineral Water").
///
/// A presentation nicety applied on write so both front ends list the same
/// spelling regardless of how the form was typed.
pub fn normalize_name(value: &str) -> String {
    value
        .trim()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes an optional field, mapping blank input to `None`.
pub fn normalize_optional_name(value: Option<&str>) -> Option<String> {
    value
        .map(normalize_name)
        .filter(|normalized| !normalized.is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, category: &str, quantity: i64, price: f64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            unit_price: price,
            supplier: None,
        }
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("name", "Beans").is_ok());
        assert!(validate_required_text("name", "   ").is_err());
        assert!(validate_required_text("name", &"x".repeat(201)).is_err());
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(-1).is_err());

        assert!(validate_movement_quantity(1).is_ok());
        assert!(validate_movement_quantity(0).is_err());
        assert!(validate_movement_quantity(-3).is_err());
    }

    #[test]
    fn test_unit_price_bounds() {
        assert!(validate_unit_price(0.0).is_ok());
        assert!(validate_unit_price(12.5).is_ok());
        assert!(validate_unit_price(-0.01).is_err());
        assert!(validate_unit_price(f64::NAN).is_err());
        assert!(validate_unit_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_product_fails_fast() {
        assert!(validate_product(&product("Rice", "Food", 10, 4.2)).is_ok());
        assert!(validate_product(&product("", "Food", 10, 4.2)).is_err());
        assert!(validate_product(&product("Rice", "", 10, 4.2)).is_err());
        assert!(validate_product(&product("Rice", "Food", -1, 4.2)).is_err());
        assert!(validate_product(&product("Rice", "Food", 10, -4.2)).is_err());
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  mineral   water "), "Mineral Water");
        assert_eq!(normalize_name("RICE"), "Rice");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(
            normalize_optional_name(Some("acme supplies")),
            Some("Acme Supplies".to_string())
        );
        assert_eq!(normalize_optional_name(Some("   ")), None);
        assert_eq!(normalize_optional_name(None), None);
    }
}
