//! # Cart Engine
//!
//! The in-memory shopping cart: line-item lifecycle, currency / payment /
//! employee selection, and derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Checkout UI Action        Engine Operation        State Change         │
//! │  ──────────────────        ────────────────        ────────────         │
//! │                                                                         │
//! │  Click product ──────────► add_product() ────────► lines.push(line)    │
//! │                            (promotion applied                           │
//! │                             when eligible)                              │
//! │                                                                         │
//! │  Click combo ────────────► add_combo() ──────────► lines.push(line)    │
//! │                                                                         │
//! │  Change quantity ────────► update_quantity() ────► recompute line      │
//! │                            (qty 0 = delete)                             │
//! │                                                                         │
//! │  Click remove ───────────► remove_line() ────────► lines.remove(i)     │
//! │                                                                         │
//! │  Click clear ────────────► clear() ──────────────► lines.clear()       │
//! │                                                                         │
//! │  Read totals ────────────► CartTotals::from() ───► (read only, summed  │
//! │                                                     on every read)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Permissive Contract
//! All operations are total functions: malformed input (non-positive add
//! quantity, unknown line id) is a silent no-op, never a panic or error.
//! The hosted backend re-validates everything at sale time; this engine is
//! a client-side pricing calculator, not the source of truth. Callers that
//! want hard errors can pre-check with [`crate::validation`].
//!
//! ## Pinned Simplifications
//! Two behaviors are deliberate product policy carried over unchanged:
//! - `update_quantity` holds the per-unit discount rate constant and does
//!   NOT re-check promotion min/max gating against the new quantity.
//! - `set_currency` changes the flag only; lines already in the cart keep
//!   their prices computed in the old currency.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::currency::Currency;
use crate::money::Money;
use crate::pricing;
use crate::promotion::{self, LineQuote};
use crate::types::{Combo, PaymentMethod, Product, Promotion, Role};

// =============================================================================
// Line Item Kind
// =============================================================================

/// What a cart line sells.
///
/// A closed sum type: every consumption site (totals, display, the caller's
/// submission mapping) matches exhaustively, so a new kind is a compile
/// error until handled everywhere. Each variant carries a snapshot of its
/// source catalog entity for display and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LineItemKind {
    /// A plain product at its list price; never discounted.
    Product { product: Product },
    /// A product sold under a promotion's graduated discount.
    Promotion { promotion: Promotion },
    /// A fixed bundle at its bundle price.
    Combo { combo: Combo },
}

impl LineItemKind {
    /// Display name of the underlying catalog entity.
    pub fn display_name(&self) -> &str {
        match self {
            LineItemKind::Product { product } => &product.name,
            LineItemKind::Promotion { promotion } => &promotion.name,
            LineItemKind::Combo { combo } => &combo.name,
        }
    }

    /// Backend id of the underlying catalog entity.
    pub fn source_id(&self) -> &str {
        match self {
            LineItemKind::Product { product } => &product.id,
            LineItemKind::Promotion { promotion } => &promotion.id,
            LineItemKind::Combo { combo } => &combo.id,
        }
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// One line in the cart.
///
/// ## Invariants
/// - `total == subtotal - discount` after every mutation
/// - `discount` is zero for `Product` lines
/// - `quantity > 0` (quantity zero means the line was removed)
///
/// Prices are frozen in the cart's currency at the moment of adding; they
/// do not follow later catalog or currency changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Synthetic line identifier, unique within the cart.
    #[ts(as = "String")]
    pub id: Uuid,

    /// What this line sells.
    pub kind: LineItemKind,

    /// Units on this line, > 0.
    pub quantity: i64,

    /// Undiscounted per-unit reference price in the cart's currency at
    /// add time.
    pub unit_price: Money,

    /// `unit_price × quantity`.
    pub subtotal: Money,

    /// Amount taken off the subtotal (zero for plain products).
    pub discount: Money,

    /// `subtotal − discount`.
    pub total: Money,

    /// When this line was added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(kind: LineItemKind, quantity: i64, quote: LineQuote) -> Self {
        CartLine {
            id: Uuid::new_v4(),
            kind,
            quantity,
            unit_price: quote.unit_price,
            subtotal: quote.subtotal,
            discount: quote.discount,
            total: quote.total,
            added_at: Utc::now(),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Lives in memory for one checkout session and is discarded after the
/// sale is submitted (or the user navigates away). Line order is insertion
/// order, which is also display order.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,

    /// Currency new lines are priced in. Changing it does not reprice
    /// existing lines.
    pub currency: Currency,

    /// How the whole cart will be paid.
    pub payment_method: PaymentMethod,

    /// The employee ringing up the sale. Required for checkout.
    pub employee_id: Option<String>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart in the primary currency.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            currency: Currency::default(),
            payment_method: PaymentMethod::default(),
            employee_id: None,
            created_at: Utc::now(),
        }
    }

    /// Creates a new empty cart in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Cart {
            currency,
            ..Cart::new()
        }
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds a product line, applying `promotion` when one is supplied and
    /// eligible at this quantity.
    ///
    /// ## Behavior
    /// - `promotion` supplied and applicable: a `Promotion` line with the
    ///   graduated-discount economics from [`crate::promotion`].
    /// - Otherwise: a plain `Product` line with zero discount at the price
    ///   side `role` resolves (admin = cost, others = sell).
    /// - `quantity <= 0`: silent no-op, returns `None`.
    ///
    /// Stock is NOT checked here: the cart is a pricing calculator, the
    /// backend catalog enforces availability at sale time.
    ///
    /// ## Returns
    /// The new line's id, or `None` when nothing was added.
    pub fn add_product(
        &mut self,
        product: &Product,
        quantity: i64,
        role: Role,
        promotion: Option<&Promotion>,
    ) -> Option<Uuid> {
        if quantity <= 0 {
            debug!(product_id = %product.id, quantity, "ignoring non-positive add quantity");
            return None;
        }

        let line = match promotion {
            Some(promo) if promotion::is_applicable(promo, quantity) => {
                let quote = promotion::promotion_quote(promo, self.currency, quantity);
                debug!(
                    promotion_id = %promo.id,
                    quantity,
                    discount = quote.discount.cents(),
                    "adding promotion line"
                );
                CartLine::new(
                    LineItemKind::Promotion {
                        promotion: promo.clone(),
                    },
                    quantity,
                    quote,
                )
            }
            _ => {
                let unit_price = pricing::product_price(product, self.currency, role);
                let subtotal = unit_price * quantity;
                debug!(product_id = %product.id, quantity, "adding product line");
                CartLine::new(
                    LineItemKind::Product {
                        product: product.clone(),
                    },
                    quantity,
                    LineQuote {
                        unit_price,
                        subtotal,
                        discount: Money::zero(),
                        total: subtotal,
                    },
                )
            }
        };

        let id = line.id;
        self.lines.push(line);
        Some(id)
    }

    /// Adds a combo line.
    ///
    /// Combos carry no eligibility gate: any positive quantity is added.
    /// `quantity <= 0` is the same silent no-op as [`Cart::add_product`].
    pub fn add_combo(&mut self, combo: &Combo, quantity: i64) -> Option<Uuid> {
        if quantity <= 0 {
            debug!(combo_id = %combo.id, quantity, "ignoring non-positive add quantity");
            return None;
        }

        let quote = promotion::combo_quote(combo, self.currency, quantity);
        debug!(combo_id = %combo.id, quantity, "adding combo line");
        let line = CartLine::new(
            LineItemKind::Combo {
                combo: combo.clone(),
            },
            quantity,
            quote,
        );

        let id = line.id;
        self.lines.push(line);
        Some(id)
    }

    /// Changes the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity == 0`: removes the line (zero quantity IS deletion,
    ///   not a zero-quantity line).
    /// - `quantity < 0` or unknown id: no-op, returns `false`.
    /// - Otherwise: recomputes the line holding the per-unit discount rate
    ///   constant — `new_discount = old_discount × new_qty / old_qty`,
    ///   `new_subtotal = unit_price × new_qty`. Promotion min/max gating is
    ///   NOT re-evaluated against the new quantity; the economics captured
    ///   at add time scale linearly.
    pub fn update_quantity(&mut self, line_id: Uuid, quantity: i64) -> bool {
        if quantity == 0 {
            return self.remove_line(line_id);
        }
        if quantity < 0 {
            debug!(%line_id, quantity, "ignoring negative quantity update");
            return false;
        }

        let Some(line) = self.lines.iter_mut().find(|l| l.id == line_id) else {
            debug!(%line_id, "quantity update for unknown line");
            return false;
        };

        line.discount = line.discount.scale(quantity, line.quantity);
        line.quantity = quantity;
        line.subtotal = line.unit_price * quantity;
        line.total = line.subtotal - line.discount;
        debug!(%line_id, quantity, "updated line quantity");
        true
    }

    /// Removes a line by id. Returns `false` when the id is unknown.
    pub fn remove_line(&mut self, line_id: Uuid) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != line_id);
        let removed = self.lines.len() < before;
        if removed {
            debug!(%line_id, "removed line");
        }
        removed
    }

    /// Clears all lines. Currency, payment method, and employee selection
    /// are kept.
    pub fn clear(&mut self) {
        debug!(line_count = self.lines.len(), "clearing cart");
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Selects the currency new lines are priced in.
    ///
    /// Existing lines keep their already-computed prices in the OLD
    /// currency; nothing is repriced. This is pinned product policy, not
    /// an oversight.
    pub fn set_currency(&mut self, currency: Currency) {
        debug!(%currency, "currency selected");
        self.currency = currency;
    }

    /// Selects the payment method for the whole cart.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Selects (or clears) the employee ringing up the sale.
    pub fn set_employee(&mut self, employee_id: Option<String>) {
        self.employee_id = employee_id;
    }

    // -------------------------------------------------------------------------
    // Derived State
    // -------------------------------------------------------------------------

    /// Number of lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of undiscounted line subtotals.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|l| l.subtotal).fold(Money::zero(), |a, b| a + b)
    }

    /// Sum of line discounts.
    pub fn discount_total(&self) -> Money {
        self.lines.iter().map(|l| l.discount).fold(Money::zero(), |a, b| a + b)
    }

    /// Sum of line totals (what the customer pays).
    pub fn total(&self) -> Money {
        self.lines.iter().map(|l| l.total).fold(Money::zero(), |a, b| a + b)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the cart can be submitted: non-empty AND an employee is
    /// selected. This is the sole checkout gate.
    pub fn is_valid(&self) -> bool {
        !self.lines.is_empty() && self.employee_id.is_some()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for the rendering layer.
///
/// Recomputed by summation on every conversion; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
            discount: cart.discount_total(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
