//! # Cart Types
//!
//! Cart and cart line types. A cart is a stateless derivation from the
//! catalog: totals are recomputed on every read, never cached.

use crate::money::{Currency, Price};
use crate::shipping::ShippingOption;
use serde::{Deserialize, Serialize};

/// Item id reserved for the synthetic shipping line appended to a cart
pub const SHIPPING_LINE_ID: u32 = 0;

/// A line in the cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Item identifier (0 is reserved for the shipping line)
    pub id: u32,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Price,
}

impl CartItem {
    pub fn new(id: u32, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Synthetic line representing a chosen shipping option
    pub fn shipping_line(option: &ShippingOption) -> Self {
        Self {
            id: SHIPPING_LINE_ID,
            name: option.label.clone(),
            price: option.price,
        }
    }

    /// Whether this line is the synthetic shipping line
    pub fn is_shipping_line(&self) -> bool {
        self.id == SHIPPING_LINE_ID
    }
}

/// An ordered cart in a single currency
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Line items, in display order
    pub items: Vec<CartItem>,

    /// Currency (same for all items)
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Create a cart from items
    pub fn with_items(items: Vec<CartItem>, currency: Currency) -> Self {
        Self { items, currency }
    }

    /// Append a line
    pub fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Cart total, recomputed from the lines on every call
    pub fn total(&self) -> Price {
        let amount: i64 = self.items.iter().map(|item| item.price.amount).sum();
        Price::from_minor_units(amount, self.currency)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
