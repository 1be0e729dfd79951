//! # Payment-Intent Gateway
//!
//! Server-side intent creation for a submitted payment-method event. The
//! payable amount is recomputed here from the catalog — base cart total plus
//! the resolved shipping option — so a tampered client cannot alter the
//! charged amount, whatever the sheet displayed.

use crate::catalog::StoreCatalog;
use crate::error::{CheckoutError, CheckoutResult};
use crate::provider::{BoxedPaymentProvider, PaymentIntent};
use crate::sheet::PaymentMethodEvent;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Gateway from a submitted sheet event to a provider payment intent
pub struct PaymentIntentGateway {
    catalog: Arc<StoreCatalog>,
    provider: BoxedPaymentProvider,
}

impl PaymentIntentGateway {
    pub fn new(catalog: Arc<StoreCatalog>, provider: BoxedPaymentProvider) -> Self {
        Self { catalog, provider }
    }

    /// Create a payment intent for the submitted event.
    ///
    /// Fails with `NoShippingOption` before any provider call when the event
    /// carries no shipping selection. Issues exactly one remote call; any
    /// failure propagates, no retry.
    #[instrument(skip(self, event), fields(payment_method = %event.payment_method_id))]
    pub async fn create_payment_intent(
        &self,
        event: &PaymentMethodEvent,
    ) -> CheckoutResult<PaymentIntent> {
        let option_id = event
            .shipping_option
            .as_ref()
            .map(|option| option.id.as_str())
            .ok_or(CheckoutError::NoShippingOption)?;

        info!(
            payer_name = event.payer_name.as_deref().unwrap_or(""),
            payer_email = event.payer_email.as_deref().unwrap_or(""),
            payer_phone = event.payer_phone.as_deref().unwrap_or(""),
            "creating order"
        );
        if let Some(address) = &event.shipping_address {
            info!(address = %address.summary(), "order ships to");
        }

        let cart = self.catalog.cart(None)?;
        let option = self.catalog.shipping_option(option_id)?;
        let amount = cart.total().amount + option.price.amount;
        let currency = self.catalog.profile().currency;

        debug!(amount, currency = %currency, "requesting payment intent");

        let intent = self.provider.create_intent(amount, currency).await?;

        info!(intent_id = %intent.id, status = ?intent.status, "payment intent created");
        Ok(intent)
    }
}
