//! # Stripe Payment Intents
//!
//! `PaymentProvider` implementation on top of the Stripe Payment Intents
//! REST API: one authenticated form-encoded POST to create an intent, one to
//! confirm it. Card declines surface as `PaymentDeclined`; every other
//! non-success response becomes `ProviderError`.

use crate::config::StripeConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use sheet_core::{CheckoutError, CheckoutResult, Currency, PaymentIntent, PaymentProvider};
use tracing::{debug, error, info, instrument};

/// Stripe payment provider
pub struct StripeIntentProvider {
    config: StripeConfig,
    client: Client,
}

impl StripeIntentProvider {
    /// Create a new Stripe provider
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        let config = StripeConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// POST a form to the Stripe API and decode the intent, mapping error
    /// bodies onto the checkout error taxonomy
    async fn post_intent_form(
        &self,
        path: &str,
        form_params: &[(&str, &str)],
    ) -> CheckoutResult<PaymentIntent> {
        let url = format!("{}{}", self.config.api_base_url, path);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(form_params)
            .send()
            .await
            .map_err(|e| CheckoutError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(error_response) = serde_json::from_str::<StripeErrorResponse>(&body) {
                if error_response.error.error_type.as_deref() == Some("card_error") {
                    return Err(CheckoutError::PaymentDeclined {
                        reason: error_response
                            .error
                            .code
                            .unwrap_or(error_response.error.message),
                    });
                }
                return Err(CheckoutError::ProviderError {
                    provider: "stripe".to_string(),
                    message: error_response.error.message,
                });
            }

            return Err(CheckoutError::ProviderError {
                provider: "stripe".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            CheckoutError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })
    }
}

#[async_trait]
impl PaymentProvider for StripeIntentProvider {
    #[instrument(skip(self))]
    async fn create_intent(
        &self,
        amount: i64,
        currency: Currency,
    ) -> CheckoutResult<PaymentIntent> {
        debug!(amount, "creating Stripe payment intent");

        let amount_str = amount.to_string();
        let intent = self
            .post_intent_form(
                "/v1/payment_intents",
                &[("amount", amount_str.as_str()), ("currency", currency.as_str())],
            )
            .await?;

        info!(intent_id = %intent.id, status = ?intent.status, "created Stripe payment intent");
        Ok(intent)
    }

    #[instrument(skip_all)]
    async fn confirm_card_payment(
        &self,
        client_secret: &str,
        payment_method: Option<&str>,
    ) -> CheckoutResult<PaymentIntent> {
        let intent_id = intent_id_from_client_secret(client_secret)?;
        let path = format!("/v1/payment_intents/{}/confirm", intent_id);

        let mut form_params: Vec<(&str, &str)> = vec![("client_secret", client_secret)];
        if let Some(payment_method) = payment_method {
            form_params.push(("payment_method", payment_method));
        }

        let intent = self.post_intent_form(&path, &form_params).await?;

        info!(intent_id = %intent.id, status = ?intent.status, "confirmed Stripe payment intent");
        Ok(intent)
    }

    async fn can_make_payment(&self) -> CheckoutResult<bool> {
        // The browser asks the platform; server-side the probe reduces to a
        // usable client key
        Ok(self.config.publishable_key_valid())
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

/// Client secrets have the form `pi_<id>_secret_<nonce>`; the confirm
/// endpoint is addressed by the intent id
fn intent_id_from_client_secret(client_secret: &str) -> CheckoutResult<&str> {
    client_secret
        .split_once("_secret")
        .map(|(id, _)| id)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            CheckoutError::InvalidRequest("malformed payment intent client secret".to_string())
        })
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
    #[serde(default)]
    code: Option<String>,
}
