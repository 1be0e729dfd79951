//! # Money Types
//!
//! Currency and price types for the checkout engine.
//!
//! Every amount handed to the payment sheet or to the payment processor is an
//! integer in minor currency units (cents, rappen). The conversion from a
//! decimal catalog price happens in exactly one place, `Currency::to_minor_units`.

use serde::{Deserialize, Serialize};

/// Supported currencies (ISO 4217)
///
/// A checkout runs in a single configured currency; this enum only carries
/// the wire code and the minor-unit conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    CHF,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "usd",
            Currency::EUR => "eur",
            Currency::GBP => "gbp",
            Currency::CHF => "chf",
        }
    }

    /// Convert a decimal price to minor units. All supported currencies have
    /// two decimal places, so this is `round(price * 100)`.
    pub fn to_minor_units(&self, price: f64) -> i64 {
        (price * 100.0).round() as i64
    }

    /// Convert from minor units back to a decimal price
    pub fn from_minor_units(&self, amount: i64) -> f64 {
        amount as f64 / 100.0
    }

    /// Parse an ISO 4217 code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "usd" => Some(Currency::USD),
            "eur" => Some(Currency::EUR),
            "gbp" => Some(Currency::GBP),
            "chf" => Some(Currency::CHF),
            _ => None,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::CHF
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Price with amount in minor currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in minor units (rappen for CHF)
    pub amount: i64,
    /// Currency
    pub currency: Currency,
}

impl Price {
    /// Create a new price from a decimal amount
    pub fn new(price: f64, currency: Currency) -> Self {
        Self {
            amount: currency.to_minor_units(price),
            currency,
        }
    }

    /// Create a price directly from minor units
    pub fn from_minor_units(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// A zero price (free shipping, empty cart)
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Get the decimal amount
    pub fn as_decimal(&self) -> f64 {
        self.currency.from_minor_units(self.amount)
    }

    /// Format for display (e.g. "CHF 1179.00")
    pub fn display(&self) -> String {
        let symbol = match self.currency {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::CHF => "CHF ",
        };
        format!("{}{:.2}", symbol, self.as_decimal())
    }
}
