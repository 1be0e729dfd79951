//! # Payment Sheet Types
//!
//! Payloads exchanged with the native payment sheet, and the traits the UI
//! layer implements so the checkout flow can acknowledge sheet events and
//! navigate after completion.
//!
//! Field names serialize in camelCase — these structures cross into the
//! browser's Payment Request surface unchanged.

use crate::cart::Cart;
use crate::money::Currency;
use crate::shipping::{ShippingAddress, ShippingOption};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One display line on the sheet, amount in minor units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub label: String,
    pub amount: i64,
}

/// The sheet's total line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetTotal {
    /// Store label shown next to the amount
    pub label: String,
    /// Amount in minor units
    pub amount: i64,
}

/// A shipping option in the sheet's representation (amount in minor units)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetShippingOption {
    pub id: String,
    pub label: String,
    pub detail: String,
    pub amount: i64,
}

impl From<&ShippingOption> for SheetShippingOption {
    fn from(option: &ShippingOption) -> Self {
        Self {
            id: option.id.clone(),
            label: option.label.clone(),
            detail: option.detail.clone(),
            amount: option.price.amount,
        }
    }
}

/// Status reported back to the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetStatus {
    Success,
    Fail,
}

/// Acknowledgment payload for the sheet's update call after an address or
/// shipping-option event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetUpdate {
    pub status: SheetStatus,

    /// New option list; only present on address changes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_options: Option<Vec<SheetShippingOption>>,

    pub total: SheetTotal,

    pub display_items: Vec<DisplayItem>,
}

/// Initial configuration of the payment sheet, built from the cart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestDetails {
    pub country: String,
    pub currency: Currency,
    pub total: SheetTotal,
    pub display_items: Vec<DisplayItem>,
    pub request_payer_name: bool,
    pub request_payer_email: bool,
    pub request_payer_phone: bool,
    pub request_shipping: bool,
    /// Empty at construction; populated reactively on the first address change
    pub shipping_options: Vec<SheetShippingOption>,
}

impl PaymentRequestDetails {
    /// The sheet request for a cart: total under the store label, one
    /// display line per item, payer details and shipping collection on, and
    /// no shipping options yet.
    pub fn for_cart(cart: &Cart, label: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            currency: cart.currency,
            total: SheetTotal {
                label: label.into(),
                amount: cart.total().amount,
            },
            display_items: cart
                .items
                .iter()
                .map(|item| DisplayItem {
                    label: item.name.clone(),
                    amount: item.price.amount,
                })
                .collect(),
            request_payer_name: true,
            request_payer_email: true,
            request_payer_phone: true,
            request_shipping: true,
            shipping_options: Vec::new(),
        }
    }
}

/// A mountable payment button, handed to the UI after the capability probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentButton {
    /// Provider backing the button
    pub provider: String,
}

/// The sheet event fired when the user submits a payment method
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodEvent {
    /// Provider payment method id (e.g. "pm_...")
    pub payment_method_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,

    /// The selected shipping option; submission without one is rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_option: Option<SheetShippingOption>,
}

/// The platform payment sheet, as seen by the checkout flow.
///
/// The browser suspends the sheet until each event is acknowledged; the UI
/// layer forwards `SheetUpdate`s from the controller and the terminal status
/// from the orchestrator.
#[async_trait]
pub trait PaymentSheet: Send {
    /// Acknowledge an address or shipping-option event
    async fn update_with(&mut self, update: SheetUpdate);

    /// Dismiss the sheet with a terminal status
    async fn complete(&mut self, status: SheetStatus);
}

/// Navigation boundary: where to go once payment is confirmed
pub trait Navigator: Send {
    /// Show the order-confirmation ("thank you") view
    fn to_order_confirmation(&mut self);
}
