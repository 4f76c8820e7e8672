//! # Domain Types
//!
//! Catalog and staff types consumed by the cart engine.
//!
//! ## Ownership Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Who Owns What                                      │
//! │                                                                         │
//! │  Hosted backend (external)          onticket-core (this crate)          │
//! │  ─────────────────────────          ──────────────────────────          │
//! │  Product / Promotion / Combo  ───►  read-only inputs to pricing         │
//! │  Promotion usage counters     ───►  read for eligibility, NEVER         │
//! │                                     incremented here                    │
//! │  Employee / role              ───►  role picks buy vs sell price        │
//! │                                                                         │
//! │  The cart computes what a sale WOULD cost; persisting the sale and     │
//! │  mutating stock/usage counters is the backend's job.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog entity ids are opaque strings minted by the backend; the cart
//! never parses or generates them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::currency::CurrencyPrices;

// =============================================================================
// Role
// =============================================================================

/// Staff role attached to the authenticated employee record.
///
/// The cart only cares whether the role is privileged: `Admin` sees
/// buy-side (cost) prices, everyone else sees sell-side prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Bartender,
    Seguridad,
    Rrpp,
}

impl Role {
    /// Whether this role resolves buy-side (cost) prices.
    #[inline]
    pub const fn sees_cost_prices(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays for the whole cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Card payment on external terminal.
    Card,
    /// Bank transfer.
    Transfer,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product available for sale.
///
/// Read-only to the cart: stock and prices are owned and mutated by the
/// backend catalog store. The cart freezes prices into line items at the
/// moment of adding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend-assigned identifier (opaque).
    pub id: String,

    /// Display name shown to bartenders and on exports.
    pub name: String,

    /// Product category (display/grouping only).
    pub category: String,

    /// Per-currency buy (cost) prices.
    pub buy: CurrencyPrices,

    /// Per-currency sell prices.
    pub sell: CurrencyPrices,

    /// Available stock, >= 0. Informational here: the cart does not
    /// reserve or enforce stock, the backend re-validates at sale time.
    pub stock: i64,
}

// =============================================================================
// Promotion
// =============================================================================

/// A graduated-discount offer tied to one product.
///
/// ## Price Semantics (critical)
/// `real_total` and `promo_total` are TOTAL prices for exactly
/// `min_quantity` units, not unit prices. The evaluator in
/// [`crate::promotion`] derives unit economics from them and scales
/// linearly, so the discount rate is constant at any applicable quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    /// Backend-assigned identifier (opaque).
    pub id: String,

    /// Display name of the offer.
    pub name: String,

    /// The product this promotion applies to.
    pub product: Product,

    /// Per-currency undiscounted total for `min_quantity` units.
    pub real_total: CurrencyPrices,

    /// Per-currency promotional total for `min_quantity` units.
    pub promo_total: CurrencyPrices,

    /// Minimum quantity to qualify, >= 1.
    pub min_quantity: i64,

    /// Optional upper bound on the quantity a single application covers.
    pub max_quantity: Option<i64>,

    /// Optional lifetime cap on applications, tracked by `usage_count`.
    pub usage_limit: Option<i64>,

    /// Lifetime applications so far. Incremented by the backend at
    /// sale-confirmation time, only read here.
    pub usage_count: i64,

    /// Optional cap on applications within a single sale. Carried for the
    /// sale-submission path; eligibility here does not consult it.
    pub per_sale_limit: Option<i64>,

    /// Whether the promotion is currently offered.
    pub active: bool,
}

// =============================================================================
// Combo
// =============================================================================

/// A fixed bundle of products sold at one bundle price.
///
/// Unlike promotions there is NO quantity gating: a combo is addable at any
/// positive quantity. Prices are totals for one combo unit, so scaling is a
/// plain multiplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Combo {
    /// Backend-assigned identifier (opaque).
    pub id: String,

    /// Display name of the bundle.
    pub name: String,

    /// Constituent products (display/export only; the bundle price is not
    /// derived from them).
    pub products: Vec<Product>,

    /// Per-currency undiscounted price for one combo unit.
    pub real: CurrencyPrices,

    /// Per-currency bundle price for one combo unit.
    pub bundle: CurrencyPrices,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_price_side() {
        assert!(Role::Admin.sees_cost_prices());
        assert!(!Role::Bartender.sees_cost_prices());
        assert!(!Role::Seguridad.sees_cost_prices());
        assert!(!Role::Rrpp.sees_cost_prices());
    }

    #[test]
    fn test_payment_method_default() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Cash);
    }

    #[test]
    fn test_role_serde_codes() {
        let json = serde_json::to_string(&Role::Bartender).unwrap();
        assert_eq!(json, "\"bartender\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}
