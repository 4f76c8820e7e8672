//! # Promotion & Combo Evaluator
//!
//! Decides whether a promotion applies to a requested quantity and computes
//! the discounted line economics for promotions and combos.
//!
//! ## Unit-Price Derivation (critical, easily miscoded)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Promotion prices are TOTALS for min_quantity units, not unit prices.  │
//! │                                                                         │
//! │  min_quantity = 2, real_total = 2000, promo_total = 1500               │
//! │                                                                         │
//! │  unit_real  = 2000 / 2 = 1000                                          │
//! │  unit_promo = 1500 / 2 =  750                                          │
//! │                                                                         │
//! │  Buying q = 4:                                                         │
//! │    subtotal = 1000 × 4 = 4000      (we compute 2000 × 4 / 2 to        │
//! │    total    =  750 × 4 = 3000       keep precision: multiply first)   │
//! │    discount = 4000 − 3000 = 1000                                       │
//! │                                                                         │
//! │  The discount RATE is constant at any applicable quantity. The        │
//! │  alternative ("discount the first min_quantity units, full price      │
//! │  for the rest") is a different product, not a bug fix.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The evaluator is pure: it never increments usage counters. That
//! bookkeeping belongs to the backend at sale-confirmation time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::Currency;
use crate::money::Money;
use crate::pricing;
use crate::types::{Combo, Promotion};

// =============================================================================
// Line Quote
// =============================================================================

/// The computed economics of one prospective cart line.
///
/// Invariant: `total == subtotal - discount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineQuote {
    /// Undiscounted per-unit reference price.
    pub unit_price: Money,
    /// `unit_price × quantity`, before discount.
    pub subtotal: Money,
    /// Amount taken off the subtotal.
    pub discount: Money,
    /// `subtotal − discount`.
    pub total: Money,
}

// =============================================================================
// Eligibility
// =============================================================================

/// Whether a promotion applies to the requested quantity.
///
/// Returns `false` when any of the following holds:
/// - the promotion is inactive;
/// - `quantity` is below the minimum qualifying quantity;
/// - a maximum quantity is set and `quantity` exceeds it;
/// - a lifetime usage limit is set and already reached.
///
/// Pure boolean, no side effects: the usage counter is only read.
///
/// ## Example
/// ```rust
/// use onticket_core::currency::CurrencyPrices;
/// use onticket_core::promotion::is_applicable;
/// use onticket_core::types::{Product, Promotion};
///
/// # let product = Product {
/// #     id: "p1".into(), name: "Beer".into(), category: "Drinks".into(),
/// #     buy: CurrencyPrices::zero(), sell: CurrencyPrices::zero(), stock: 0,
/// # };
/// let promo = Promotion {
///     id: "promo1".into(),
///     name: "3x2".into(),
///     product,
///     real_total: CurrencyPrices::from_cents(3000, 600, 1500),
///     promo_total: CurrencyPrices::from_cents(2000, 400, 1000),
///     min_quantity: 3,
///     max_quantity: None,
///     usage_limit: None,
///     usage_count: 0,
///     per_sale_limit: None,
///     active: true,
/// };
///
/// assert!(!is_applicable(&promo, 2));
/// assert!(is_applicable(&promo, 3));
/// ```
pub fn is_applicable(promotion: &Promotion, quantity: i64) -> bool {
    if !promotion.active {
        return false;
    }
    if quantity < promotion.min_quantity {
        return false;
    }
    if let Some(max) = promotion.max_quantity {
        if quantity > max {
            return false;
        }
    }
    if let Some(limit) = promotion.usage_limit {
        if promotion.usage_count >= limit {
            return false;
        }
    }
    true
}

// =============================================================================
// Quotes
// =============================================================================

/// Computes the line economics for an applicable promotion at `quantity`.
///
/// Callers are expected to have checked [`is_applicable`] first; this
/// function only does the arithmetic. Totals are scaled multiplying before
/// dividing (`total × quantity / min_quantity`) so no precision is lost on
/// quantities the minimum does not divide.
pub fn promotion_quote(promotion: &Promotion, currency: Currency, quantity: i64) -> LineQuote {
    let prices = pricing::promotion_prices(promotion, currency);
    let min = promotion.min_quantity.max(1);

    let subtotal = prices.real.scale(quantity, min);
    let total = prices.promo.scale(quantity, min);

    LineQuote {
        unit_price: prices.real.scale(1, min),
        subtotal,
        discount: subtotal - total,
        total,
    }
}

/// Computes the line economics for a combo at `quantity`.
///
/// Combos have NO eligibility gate: any positive quantity is addable. The
/// asymmetry with promotions is intentional — a combo is a fixed bundle
/// offer, not a graduated discount tier.
pub fn combo_quote(combo: &Combo, currency: Currency, quantity: i64) -> LineQuote {
    let prices = pricing::combo_prices(combo, currency);

    let subtotal = prices.real * quantity;
    let total = prices.bundle * quantity;

    LineQuote {
        unit_price: prices.real,
        subtotal,
        discount: subtotal - total,
        total,
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

    fn test_product() -> Product {
        Product {
            id: "p1".to_string(),
            name: "Beer".to_string(),
            category: "Drinks".to_string(),
            buy: CurrencyPrices::from_cents(600, 100, 300),
            sell: CurrencyPrices::from_cents(1000, 200, 500),
            stock: 100,
        }
    }

    fn test_promotion() -> Promotion {
        Promotion {
            id: "promo1".to_string(),
            name: "2x Beer".to_string(),
            product: test_product(),
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
    fn test_inactive_never_applies() {
        let promo = Promotion {
            active: false,
            ..test_promotion()
        };
        assert!(!is_applicable(&promo, 2));
        assert!(!is_applicable(&promo, 100));
    }

    #[test]
    fn test_minimum_quantity_boundary() {
        let promo = Promotion {
            min_quantity: 3,
            ..test_promotion()
        };
        assert!(!is_applicable(&promo, 2));
        assert!(is_applicable(&promo, 3));
        assert!(is_applicable(&promo, 4));
    }

    #[test]
    fn test_maximum_quantity_boundary() {
        let promo = Promotion {
            max_quantity: Some(5),
            ..test_promotion()
        };
        assert!(is_applicable(&promo, 5));
        assert!(!is_applicable(&promo, 6));
    }

    #[test]
    fn test_usage_limit_exhausted() {
        let promo = Promotion {
            usage_limit: Some(10),
            usage_count: 10,
            ..test_promotion()
        };
        assert!(!is_applicable(&promo, 2));
        assert!(!is_applicable(&promo, 5));

        let promo = Promotion {
            usage_limit: Some(10),
            usage_count: 9,
            ..test_promotion()
        };
        assert!(is_applicable(&promo, 2));
    }

    /// The spec's canonical scaling example: totals for a minimum of 2 are
    /// real 2000 / promo 1500, buying 4 units.
    #[test]
    fn test_promotion_quote_scales_proportionally() {
        let promo = test_promotion();
        let quote = promotion_quote(&promo, Currency::Ars, 4);

        assert_eq!(quote.unit_price.cents(), 1000); // 2000 / 2
        assert_eq!(quote.subtotal.cents(), 4000); // 1000 × 4
        assert_eq!(quote.total.cents(), 3000); // 750 × 4
        assert_eq!(quote.discount.cents(), 1000);
        assert_eq!(quote.total, quote.subtotal - quote.discount);
    }

    #[test]
    fn test_promotion_quote_at_minimum() {
        let promo = test_promotion();
        let quote = promotion_quote(&promo, Currency::Ars, 2);

        // At exactly min_quantity the stored totals apply unchanged.
        assert_eq!(quote.subtotal.cents(), 2000);
        assert_eq!(quote.total.cents(), 1500);
        assert_eq!(quote.discount.cents(), 500);
    }

    #[test]
    fn test_promotion_quote_other_currency() {
        let promo = test_promotion();
        let quote = promotion_quote(&promo, Currency::Usd, 4);

        assert_eq!(quote.subtotal.cents(), 800); // 400 × 4 / 2
        assert_eq!(quote.total.cents(), 600); // 300 × 4 / 2
        assert_eq!(quote.discount.cents(), 200);
    }

    #[test]
    fn test_combo_quote_no_gate() {
        let combo = Combo {
            id: "combo1".to_string(),
            name: "Previa".to_string(),
            products: vec![test_product()],
            real: CurrencyPrices::from_cents(5000, 1000, 2500),
            bundle: CurrencyPrices::from_cents(4000, 800, 2000),
        };

        // Any positive quantity works, including 1
        let quote = combo_quote(&combo, Currency::Ars, 1);
        assert_eq!(quote.subtotal.cents(), 5000);
        assert_eq!(quote.total.cents(), 4000);
        assert_eq!(quote.discount.cents(), 1000);

        let quote = combo_quote(&combo, Currency::Ars, 3);
        assert_eq!(quote.subtotal.cents(), 15000);
        assert_eq!(quote.total.cents(), 12000);
        assert_eq!(quote.discount.cents(), 3000);
        assert_eq!(quote.total, quote.subtotal - quote.discount);
    }
}
