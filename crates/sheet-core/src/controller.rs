//! # Payment-Sheet Controller
//!
//! Builds the sheet request from a cart and answers the sheet's reactive
//! events. Each platform event maps to one method returning the
//! acknowledgment payload the UI applies via the sheet's update call; the
//! browser keeps the sheet suspended until that acknowledgment lands.

use crate::cart::Cart;
use crate::catalog::StoreCatalog;
use crate::error::{CheckoutError, CheckoutResult};
use crate::provider::BoxedPaymentProvider;
use crate::sheet::{
    DisplayItem, PaymentButton, PaymentRequestDetails, SheetShippingOption, SheetStatus,
    SheetTotal, SheetUpdate,
};
use crate::shipping::ShippingAddress;
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct PaymentSheetController {
    catalog: Arc<StoreCatalog>,
    provider: BoxedPaymentProvider,
}

impl PaymentSheetController {
    pub fn new(catalog: Arc<StoreCatalog>, provider: BoxedPaymentProvider) -> Self {
        Self { catalog, provider }
    }

    /// Build the initial sheet request for a cart.
    ///
    /// Payer name/email/phone collection is on, shipping collection is on,
    /// and the option list starts empty — it is populated reactively once
    /// the sheet reports an address.
    pub fn payment_request(&self, cart: &Cart) -> PaymentRequestDetails {
        let profile = self.catalog.profile();
        PaymentRequestDetails::for_cart(cart, profile.label.clone(), profile.country.clone())
    }

    /// Answer a shipping-address change: offer the options for that address
    /// with the first one pre-selected, and the total reflecting it.
    #[instrument(skip(self, address), fields(address = %address.summary()))]
    pub fn handle_address_change(&self, address: &ShippingAddress) -> CheckoutResult<SheetUpdate> {
        let options = self.catalog.available_shipping_options(address);
        let default = options
            .first()
            .ok_or_else(|| CheckoutError::Internal("shipping catalog returned no options".into()))?
            .clone();

        let cart = self.catalog.cart(None)?;
        let mut display_items = display_lines(&cart);
        display_items.push(DisplayItem {
            label: default.label.clone(),
            amount: default.price.amount,
        });

        debug!(default_option = %default.id, "answering address change");

        Ok(SheetUpdate {
            status: SheetStatus::Success,
            shipping_options: Some(options.iter().map(SheetShippingOption::from).collect()),
            total: SheetTotal {
                label: self.catalog.profile().label.clone(),
                amount: cart.total().amount + default.price.amount,
            },
            display_items,
        })
    }

    /// Answer a shipping-option change: recompute the total for the chosen
    /// option. The option catalog was already fetched for this address and
    /// is not fetched again; the amount comes from the sheet's own option
    /// record.
    #[instrument(skip(self, option), fields(option = %option.id))]
    pub fn handle_shipping_option_change(
        &self,
        option: &SheetShippingOption,
    ) -> CheckoutResult<SheetUpdate> {
        let cart = self.catalog.cart(None)?;
        let mut display_items = display_lines(&cart);
        display_items.push(DisplayItem {
            label: option.label.clone(),
            amount: option.amount,
        });

        Ok(SheetUpdate {
            status: SheetStatus::Success,
            shipping_options: None,
            total: SheetTotal {
                label: self.catalog.profile().label.clone(),
                amount: cart.total().amount + option.amount,
            },
            display_items,
        })
    }

    /// Probe the platform's payment capability and hand back a mountable
    /// button, or fail so the caller can hide the button entirely.
    pub async fn setup_payment_button(&self) -> CheckoutResult<PaymentButton> {
        if !self.provider.can_make_payment().await? {
            return Err(CheckoutError::PaymentUnavailable {
                provider: self.provider.provider_name().to_string(),
            });
        }

        Ok(PaymentButton {
            provider: self.provider.provider_name().to_string(),
        })
    }
}

fn display_lines(cart: &Cart) -> Vec<DisplayItem> {
    cart.items
        .iter()
        .map(|item| DisplayItem {
            label: item.name.clone(),
            amount: item.price.amount,
        })
        .collect()
}
