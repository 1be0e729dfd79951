//! # Shipping Types
//!
//! Shipping options and the partial address the payment sheet reports.

use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A shipping option offered for an address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingOption {
    /// Unique, stable identifier (e.g. "free-shipping")
    pub id: String,

    /// Display label
    pub label: String,

    /// Descriptive detail (delivery window)
    pub detail: String,

    /// Price
    pub price: Price,
}

/// Postal address as reported by the payment sheet.
///
/// Every field is optional: browsers redact precision for privacy until the
/// user commits the payment, so code consuming this must tolerate full
/// absence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ShippingAddress {
    /// One-line rendering of the fields that are present, for order logs
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(lines) = &self.address_line {
            if !lines.is_empty() {
                parts.push(lines.join(", "));
            }
        }
        if let Some(postal_code) = &self.postal_code {
            parts.push(postal_code.clone());
        }
        if let Some(city) = &self.city {
            parts.push(city.clone());
        }
        if let Some(country) = &self.country {
            parts.push(country.clone());
        }
        parts.join(", ")
    }
}
