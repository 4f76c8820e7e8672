//! # Price Resolver
//!
//! Selects the applicable per-currency price fields from catalog entities.
//!
//! The original web client did this with stringly-typed field access
//! (`producto[`precio_compra_${code}`]`); here every lookup is an
//! exhaustive match through [`CurrencyPrices::get`], so there is no
//! missing-field path. Unknown currency codes are normalized to the
//! primary currency before they ever reach this module (see
//! [`Currency::from_code`](crate::currency::Currency::from_code)).
//!
//! All functions are total: no error path exists.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::{Currency, CurrencyPrices};
use crate::money::Money;
use crate::types::{Combo, Product, Promotion, Role};

/// The real/promotional price pair of a promotion in one currency.
///
/// Both figures are totals for the promotion's minimum qualifying
/// quantity, not unit prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PromotionPrices {
    /// Undiscounted total for `min_quantity` units.
    pub real: Money,
    /// Promotional total for `min_quantity` units.
    pub promo: Money,
}

/// The real/bundle price pair of a combo in one currency, per combo unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComboPrices {
    /// Undiscounted price for one combo unit.
    pub real: Money,
    /// Bundle price for one combo unit.
    pub bundle: Money,
}

/// Resolves a product's unit price in the given currency.
///
/// `Admin` contexts see the buy-side (cost) price; every other role sees
/// the customer-facing sell price.
///
/// ## Example
/// ```rust
/// use onticket_core::currency::{Currency, CurrencyPrices};
/// use onticket_core::pricing::product_price;
/// use onticket_core::types::{Product, Role};
///
/// let beer = Product {
///     id: "p1".into(),
///     name: "Beer".into(),
///     category: "Drinks".into(),
///     buy: CurrencyPrices::from_cents(600, 100, 300),
///     sell: CurrencyPrices::from_cents(1000, 200, 500),
///     stock: 48,
/// };
///
/// assert_eq!(product_price(&beer, Currency::Ars, Role::Bartender).cents(), 1000);
/// assert_eq!(product_price(&beer, Currency::Ars, Role::Admin).cents(), 600);
/// ```
#[inline]
pub fn product_price(product: &Product, currency: Currency, role: Role) -> Money {
    let prices: &CurrencyPrices = if role.sees_cost_prices() {
        &product.buy
    } else {
        &product.sell
    };
    prices.get(currency)
}

/// Resolves a promotion's real/promotional totals in the given currency.
#[inline]
pub fn promotion_prices(promotion: &Promotion, currency: Currency) -> PromotionPrices {
    PromotionPrices {
        real: promotion.real_total.get(currency),
        promo: promotion.promo_total.get(currency),
    }
}

/// Resolves a combo's real/bundle prices in the given currency.
#[inline]
pub fn combo_prices(combo: &Combo, currency: Currency) -> ComboPrices {
    ComboPrices {
        real: combo.real.get(currency),
        bundle: combo.bundle.get(currency),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
