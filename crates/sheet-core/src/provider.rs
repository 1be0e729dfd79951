//! # Payment Provider Trait
//!
//! Seam between the checkout flow and the payment processor. The checkout
//! components only see this trait; the Stripe implementation lives in
//! `sheet-stripe`, and tests script their own.

use crate::error::CheckoutResult;
use crate::money::Currency;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Status of a payment intent, as reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
    /// Provider statuses this flow does not interpret
    #[serde(other)]
    Unknown,
}

/// A payment intent created by the provider.
///
/// The record is owned by the provider; the checkout flow only reads
/// `client_secret` and `status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Provider intent id (e.g. "pi_...")
    pub id: String,

    /// Client secret used to complete confirmation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Current status
    pub status: IntentStatus,

    /// Amount in minor units
    #[serde(default)]
    pub amount: i64,

    /// Currency code as the provider reports it
    #[serde(default)]
    pub currency: String,
}

/// Core trait for payment provider implementations.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a payment intent for an amount in minor units.
    ///
    /// A single remote call with fire-once semantics; transport or
    /// non-success responses propagate as errors, no retry.
    async fn create_intent(&self, amount: i64, currency: Currency) -> CheckoutResult<PaymentIntent>;

    /// Confirm a card payment against an intent's client secret.
    ///
    /// `payment_method` carries the sheet's payment method id on the first
    /// confirmation and is absent on a follow-up confirmation that finishes
    /// an additional-authentication flow.
    async fn confirm_card_payment(
        &self,
        client_secret: &str,
        payment_method: Option<&str>,
    ) -> CheckoutResult<PaymentIntent>;

    /// Capability probe: can this platform surface the payment sheet?
    async fn can_make_payment(&self) -> CheckoutResult<bool>;

    /// Provider name (for logging and error attribution)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared payment provider (dynamic dispatch)
pub type BoxedPaymentProvider = Arc<dyn PaymentProvider>;
