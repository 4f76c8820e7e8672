//! # Currency Module
//!
//! The closed set of currencies a club can price its catalog in, and the
//! per-currency price record every priced entity carries.
//!
//! ## Design Note
//! The hosted backend stores one independent price per currency per price
//! kind (there is NO exchange-rate conversion anywhere in the system). The
//! original web client read these with dynamic field names like
//! `precio_compra_${code}`; here that becomes an exhaustive match over a
//! closed enum, so adding a currency is a compile error until every lookup
//! handles it.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Currency
// =============================================================================

/// A currency the cart can operate in.
///
/// `Ars` is the primary currency: unknown currency codes coming in over the
/// wire fall back to it (documented fallback, not a failure — see
/// [`Currency::from_code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Argentine peso (primary).
    Ars,
    /// US dollar.
    Usd,
    /// Brazilian real.
    Brl,
}

impl Currency {
    /// Parses a currency code, case-insensitively.
    ///
    /// Unrecognized codes fall back to the primary currency (`Ars`). This
    /// mirrors the permissive contract of the original client: an unknown
    /// code is not an error path, the primary price applies.
    ///
    /// ## Example
    /// ```rust
    /// use onticket_core::currency::Currency;
    ///
    /// assert_eq!(Currency::from_code("usd"), Currency::Usd);
    /// assert_eq!(Currency::from_code("BRL"), Currency::Brl);
    /// assert_eq!(Currency::from_code("xyz"), Currency::Ars); // fallback
    /// ```
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "usd" => Currency::Usd,
            "brl" => Currency::Brl,
            _ => Currency::Ars,
        }
    }

    /// Returns the lowercase currency code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Ars => "ars",
            Currency::Usd => "usd",
            Currency::Brl => "brl",
        }
    }
}

/// The cart opens in the primary currency.
impl Default for Currency {
    fn default() -> Self {
        Currency::Ars
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =============================================================================
// CurrencyPrices
// =============================================================================

/// One monetary amount per supported currency.
///
/// Every priced catalog entity carries one of these per price kind: products
/// have a buy-side and a sell-side record, promotions a real and a
/// promotional record, combos a real and a bundle record.
///
/// The three amounts are independent list prices, not conversions of each
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPrices {
    /// Price in Argentine pesos (cents).
    pub ars: Money,
    /// Price in US dollars (cents).
    pub usd: Money,
    /// Price in Brazilian reais (cents).
    pub brl: Money,
}

impl CurrencyPrices {
    /// Creates a price record from the three per-currency cent amounts.
    pub const fn from_cents(ars: i64, usd: i64, brl: i64) -> Self {
        CurrencyPrices {
            ars: Money::from_cents(ars),
            usd: Money::from_cents(usd),
            brl: Money::from_cents(brl),
        }
    }

    /// Returns the price for the given currency.
    ///
    /// Exhaustive over the closed currency set: there is no fallback arm
    /// here because an unknown code is already normalized by
    /// [`Currency::from_code`].
    #[inline]
    pub const fn get(&self, currency: Currency) -> Money {
        match currency {
            Currency::Ars => self.ars,
            Currency::Usd => self.usd,
            Currency::Brl => self.brl,
        }
    }

    /// All-zero price record.
    pub const fn zero() -> Self {
        CurrencyPrices::from_cents(0, 0, 0)
    }
}

impl Default for CurrencyPrices {
    fn default() -> Self {
        CurrencyPrices::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
