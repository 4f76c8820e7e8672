//! # onticket-core: Cart Pricing Engine for OnTicket
//!
//! This crate is the **heart** of OnTicket's checkout flow. It contains the
//! shopping-cart pricing and promotion-eligibility logic as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       OnTicket Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Checkout Frontend (web)                        │   │
//! │  │    Catalog UI ──► Cart UI ──► Payment UI ──► Sale submission    │   │
//! │  └───────────┬─────────────────────────────────────────┬───────────┘   │
//! │              │                                         │               │
//! │  ┌───────────▼─────────────────────────┐   ┌───────────▼───────────┐   │
//! │  │    ★ onticket-core (THIS CRATE) ★   │   │    Hosted backend     │   │
//! │  │                                     │   │                       │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌───────┐  │   │  Catalog store        │   │
//! │  │  │currency │ │ pricing │ │ cart  │  │   │  Identity / roles     │   │
//! │  │  │ money   │ │promotion│ │totals │  │   │  Sale persistence     │   │
//! │  │  └─────────┘ └─────────┘ └───────┘  │   │  Usage counters       │   │
//! │  │                                     │   │                       │   │
//! │  │  NO I/O • NO NETWORK • PURE FNS     │   │  (source of truth)    │   │
//! │  └─────────────────────────────────────┘   └───────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`currency`] - Closed currency set and per-currency price records
//! - [`types`] - Catalog domain types (Product, Promotion, Combo, roles)
//! - [`pricing`] - Price resolution by currency and role
//! - [`promotion`] - Promotion eligibility and discount computation
//! - [`cart`] - The cart engine: line lifecycle and derived totals
//! - [`validation`] - Optional caller-side input validation
//! - [`error`] - Typed validation errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input =
//!    same output, no hidden state beyond the cart the caller owns
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Permissive Engine**: Malformed input no-ops instead of panicking;
//!    the hosted backend re-validates at sale time
//!
//! ## Example Usage
//!
//! ```rust
//! use onticket_core::cart::Cart;
//! use onticket_core::currency::{Currency, CurrencyPrices};
//! use onticket_core::types::{Product, Role};
//!
//! let beer = Product {
//!     id: "p1".into(),
//!     name: "Beer".into(),
//!     category: "Drinks".into(),
//!     buy: CurrencyPrices::from_cents(600, 100, 300),
//!     sell: CurrencyPrices::from_cents(1000, 200, 500),
//!     stock: 48,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_product(&beer, 3, Role::Bartender, None);
//! cart.set_employee(Some("emp-7".into()));
//!
//! assert_eq!(cart.total().cents(), 3000);
//! assert!(cart.is_valid());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod currency;
pub mod error;
pub mod money;
pub mod pricing;
pub mod promotion;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use onticket_core::Cart` instead of
// `use onticket_core::cart::Cart`

pub use cart::{Cart, CartLine, CartTotals, LineItemKind};
pub use currency::{Currency, CurrencyPrices};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use promotion::LineQuote;
pub use types::{Combo, PaymentMethod, Product, Promotion, Role};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes. Only
/// enforced by [`validation::validate_cart_size`]; the engine itself stays
/// permissive.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single cart line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
/// Only enforced by [`validation::validate_quantity`].
pub const MAX_LINE_QUANTITY: i64 = 999;
