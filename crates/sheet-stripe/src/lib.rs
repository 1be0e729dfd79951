//! # sheet-stripe
//!
//! Stripe payment provider for paysheet-rs.
//!
//! Implements `sheet_core::PaymentProvider` over the Stripe Payment Intents
//! REST API:
//!
//! - **create_intent** — `POST /v1/payment_intents` with a form-encoded
//!   amount in minor units and the checkout currency
//! - **confirm_card_payment** — `POST /v1/payment_intents/{id}/confirm`,
//!   with the sheet's payment method on the first confirmation and without
//!   one on the follow-up that finishes an authentication flow
//! - **can_make_payment** — capability probe backed by the publishable key
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sheet_stripe::StripeIntentProvider;
//!
//! // Reads STRIPE_SECRET_KEY and STRIPE_PUBLISHABLE_KEY
//! let provider = StripeIntentProvider::from_env()?;
//!
//! let intent = provider.create_intent(143800, Currency::CHF).await?;
//! let confirmed = provider
//!     .confirm_card_payment(&intent.client_secret.unwrap(), Some("pm_..."))
//!     .await?;
//! ```

pub mod config;
pub mod intents;

// Re-exports
pub use config::StripeConfig;
pub use intents::StripeIntentProvider;
