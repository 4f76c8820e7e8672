//! # Validation Module
//!
//! Caller-side validation helpers.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Checkout frontend                                            │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (optional, caller's choice)                      │
//! │  ├── Quantity / price range checks                                     │
//! │  └── Catalog record consistency checks                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Hosted backend (source of truth)                             │
//! │  ├── Stock availability                                                │
//! │  ├── Price re-validation                                               │
//! │  └── Promotion usage accounting                                        │
//! │                                                                         │
//! │  The cart engine sits between layers 2 and 3 and stays permissive:    │
//! │  it no-ops on bad input instead of erroring. These helpers let a      │
//! │  caller fail loudly BEFORE invoking the engine.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::Promotion;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed [`MAX_LINE_QUANTITY`]
///
/// ## Example
/// ```rust
/// use onticket_core::validation::validate_quantity;
///
/// assert!(validate_quantity(5).is_ok());
/// assert!(validate_quantity(0).is_err());
/// assert!(validate_quantity(-1).is_err());
/// assert!(validate_quantity(1000).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (open-bar items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level.
///
/// Stock is informational to the cart, but a negative figure coming off
/// the wire indicates a corrupt catalog record.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates cart size (number of lines) before an add.
///
/// ## Rules
/// - Must not exceed [`MAX_CART_LINES`]
pub fn validate_cart_size(current_lines: usize) -> ValidationResult<()> {
    if current_lines >= MAX_CART_LINES {
        return Err(ValidationError::OutOfRange {
            field: "cart lines".to_string(),
            min: 0,
            max: MAX_CART_LINES as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates the internal consistency of a promotion record.
///
/// The backend owns these invariants; this check catches corrupt records
/// before their numbers feed into pricing.
///
/// ## Rules
/// - `min_quantity >= 1`
/// - `max_quantity`, when set, must be >= `min_quantity`
/// - `usage_count` must not exceed `usage_limit` when a limit is set
pub fn validate_promotion(promotion: &Promotion) -> ValidationResult<()> {
    if promotion.min_quantity < 1 {
        return Err(ValidationError::OutOfRange {
            field: "min_quantity".to_string(),
            min: 1,
            max: i64::MAX,
        });
    }

    if let Some(max) = promotion.max_quantity {
        if max < promotion.min_quantity {
            return Err(ValidationError::Inconsistent {
                field: "max_quantity".to_string(),
                reason: format!("{} is below min_quantity {}", max, promotion.min_quantity),
            });
        }
    }

    if let Some(limit) = promotion.usage_limit {
        if promotion.usage_count > limit {
            return Err(ValidationError::Inconsistent {
                field: "usage_count".to_string(),
                reason: format!("{} exceeds usage_limit {}", promotion.usage_count, limit),
            });
        }
    }

    Ok(())
}

/// Validates an employee selection before checkout.
///
/// The engine's `is_valid` already gates on this; the helper gives callers
/// a typed error to surface instead of a bare boolean.
pub fn validate_employee(employee_id: Option<&str>) -> ValidationResult<()> {
    match employee_id {
        Some(id) if !id.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::Required {
            field: "employee".to_string(),
        }),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyPrices;
    use crate::types::Product;

    fn test_promotion() -> Promotion {
        Promotion {
            id: "promo1".to_string(),
            name: "Promo".to_string(),
            product: Product {
                id: "p1".to_string(),
                name: "Beer".to_string(),
                category: "Drinks".to_string(),
                buy: CurrencyPrices::zero(),
                sell: CurrencyPrices::zero(),
                stock: 0,
            },
            real_total: CurrencyPrices::from_cents(2000, 400, 1000),
            promo_total: CurrencyPrices::from_cents(1500, 300, 750),
            min_quantity: 2,
            max_quantity: None,
            usage_limit: None,
            usage_count: 0,
            per_sale_limit: None,
            active: true,
        }
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(48).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(MAX_CART_LINES - 1).is_ok());
        assert!(validate_cart_size(MAX_CART_LINES).is_err());
    }

    #[test]
    fn test_validate_promotion_consistency() {
        assert!(validate_promotion(&test_promotion()).is_ok());

        let bad_min = Promotion {
            min_quantity: 0,
            ..test_promotion()
        };
        assert!(validate_promotion(&bad_min).is_err());

        let bad_max = Promotion {
            min_quantity: 4,
            max_quantity: Some(2),
            ..test_promotion()
        };
        assert!(validate_promotion(&bad_max).is_err());

        let bad_usage = Promotion {
            usage_limit: Some(5),
            usage_count: 6,
            ..test_promotion()
        };
        assert!(validate_promotion(&bad_usage).is_err());

        let at_limit = Promotion {
            usage_limit: Some(5),
            usage_count: 5,
            ..test_promotion()
        };
        // Exhausted is consistent (just no longer applicable)
        assert!(validate_promotion(&at_limit).is_ok());
    }

    #[test]
    fn test_validate_employee() {
        assert!(validate_employee(Some("emp-7")).is_ok());
        assert!(validate_employee(Some("")).is_err());
        assert!(validate_employee(Some("   ")).is_err());
        assert!(validate_employee(None).is_err());
    }
}
