//! # Store Catalog
//!
//! Mocked catalog/shipping service: cart contents, shipping option table and
//! the store profile, loadable from `config/catalog.toml`. In a real
//! deployment this sits in front of inventory and a rating service; here it
//! answers from static data so the checkout flow can be exercised end to end.

use crate::cart::{Cart, CartItem};
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::{Currency, Price};
use crate::shipping::{ShippingAddress, ShippingOption};
use serde::Deserialize;
use tracing::debug;

/// Store identity surfaced on the payment sheet
#[derive(Debug, Clone)]
pub struct StoreProfile {
    /// Label shown next to the total on the sheet
    pub label: String,
    /// ISO 3166 country code of the merchant
    pub country: String,
    /// Checkout currency
    pub currency: Currency,
}

impl Default for StoreProfile {
    fn default() -> Self {
        Self {
            label: "Demo Shop".to_string(),
            country: "CH".to_string(),
            currency: Currency::CHF,
        }
    }
}

/// Catalog/shipping service with a static table of items and options.
///
/// Constructed once by the composition root and shared behind an `Arc`; no
/// module-level state.
#[derive(Debug, Clone)]
pub struct StoreCatalog {
    profile: StoreProfile,
    items: Vec<CartItem>,
    shipping_options: Vec<ShippingOption>,
}

impl StoreCatalog {
    pub fn new(
        profile: StoreProfile,
        items: Vec<CartItem>,
        shipping_options: Vec<ShippingOption>,
    ) -> Self {
        Self {
            profile,
            items,
            shipping_options,
        }
    }

    /// Built-in demo catalog: two items, two shipping options, CHF
    pub fn demo() -> Self {
        let currency = Currency::CHF;
        Self {
            profile: StoreProfile::default(),
            items: vec![
                CartItem::new(1, "iPhone 14 Pro", Price::new(1179.0, currency)),
                CartItem::new(
                    2,
                    "AirPods Pro (2. Generation)",
                    Price::new(259.0, currency),
                ),
            ],
            shipping_options: vec![
                ShippingOption {
                    id: "free-shipping".to_string(),
                    label: "Free shipping".to_string(),
                    detail: "Arrives in 5 to 7 days".to_string(),
                    price: Price::zero(currency),
                },
                ShippingOption {
                    id: "express-shipping".to_string(),
                    label: "Express shipping".to_string(),
                    detail: "Arrives in 1 to 3 days".to_string(),
                    price: Price::new(10.0, currency),
                },
            ],
        }
    }

    /// Load a catalog from a TOML document
    pub fn from_toml(toml_str: &str) -> CheckoutResult<Self> {
        let file: CatalogFile = toml::from_str(toml_str)
            .map_err(|e| CheckoutError::Configuration(format!("invalid catalog: {}", e)))?;
        Ok(file.into_catalog())
    }

    pub fn profile(&self) -> &StoreProfile {
        &self.profile
    }

    /// Resolve a shipping option id against the table
    pub fn shipping_option(&self, id: &str) -> CheckoutResult<ShippingOption> {
        debug!(id, "resolving shipping option");
        self.shipping_options
            .iter()
            .find(|option| option.id == id)
            .cloned()
            .ok_or_else(|| CheckoutError::InvalidShippingOption { id: id.to_string() })
    }

    /// The cart, optionally with a chosen shipping option appended as a
    /// zero-id line item. The total is summed after the line is appended.
    pub fn cart(&self, shipping_option_id: Option<&str>) -> CheckoutResult<Cart> {
        let mut cart = Cart::with_items(self.items.clone(), self.profile.currency);

        if let Some(id) = shipping_option_id {
            debug!(id, "building cart with shipping line");
            let option = self.shipping_option(id)?;
            cart.push(CartItem::shipping_line(&option));
        } else {
            debug!("building base cart");
        }

        Ok(cart)
    }

    /// Shipping options available for an address. The mock ignores the
    /// address and returns the full table; real deployments would filter by
    /// region and weight. Never empty.
    pub fn available_shipping_options(&self, address: &ShippingAddress) -> Vec<ShippingOption> {
        debug!(address = %address.summary(), "listing shipping options");
        self.shipping_options.clone()
    }
}

impl Default for StoreCatalog {
    fn default() -> Self {
        Self::demo()
    }
}

// =============================================================================
// TOML catalog file
// =============================================================================

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    store: StoreSection,
    items: Vec<ItemRow>,
    shipping_options: Vec<ShippingRow>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct StoreSection {
    label: String,
    country: String,
    currency: Currency,
}

impl Default for StoreSection {
    fn default() -> Self {
        let profile = StoreProfile::default();
        Self {
            label: profile.label,
            country: profile.country,
            currency: profile.currency,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ItemRow {
    id: u32,
    name: String,
    price: f64,
}

#[derive(Debug, Deserialize)]
struct ShippingRow {
    id: String,
    label: String,
    detail: String,
    price: f64,
}

impl CatalogFile {
    fn into_catalog(self) -> StoreCatalog {
        let currency = self.store.currency;
        StoreCatalog {
            profile: StoreProfile {
                label: self.store.label,
                country: self.store.country,
                currency,
            },
            items: self
                .items
                .into_iter()
                .map(|row| CartItem::new(row.id, row.name, Price::new(row.price, currency)))
                .collect(),
            shipping_options: self
                .shipping_options
                .into_iter()
                .map(|row| ShippingOption {
                    id: row.id,
                    label: row.label,
                    detail: row.detail,
                    price: Price::new(row.price, currency),
                })
                .collect(),
        }
    }
}
