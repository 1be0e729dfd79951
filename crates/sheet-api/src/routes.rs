//! # Routes
//!
//! Axum router configuration for the checkout API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - GET  /api/v1/cart - Cart, optionally `?shipping_option=<id>`
/// - POST /api/v1/shipping-options - Options for a (partial) address
/// - GET  /api/v1/payment-request - Initial payment-sheet request
/// - POST /api/v1/payment-intents - Create a payment intent
pub fn create_router(state: AppState) -> Router {
    // The storefront is served from a different origin during development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/cart", get(handlers::get_cart))
        .route("/shipping-options", post(handlers::list_shipping_options))
        .route("/payment-request", get(handlers::get_payment_request))
        .route("/payment-intents", post(handlers::create_payment_intent));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .nest("/api/v1", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;
    use async_trait::async_trait;
    use axum_test::TestServer;
    use sheet_core::{
        BoxedPaymentProvider, CheckoutResult, Currency, IntentStatus, PaymentIntent,
        PaymentProvider, StoreCatalog,
    };
    use std::sync::Arc;

    /// Provider that answers without touching the network
    struct OfflineProvider;

    #[async_trait]
    impl PaymentProvider for OfflineProvider {
        async fn create_intent(
            &self,
            amount: i64,
            currency: Currency,
        ) -> CheckoutResult<PaymentIntent> {
            Ok(PaymentIntent {
                id: "pi_offline".into(),
                client_secret: Some("pi_offline_secret_1".into()),
                status: IntentStatus::RequiresConfirmation,
                amount,
                currency: currency.as_str().into(),
            })
        }

        async fn confirm_card_payment(
            &self,
            _client_secret: &str,
            _payment_method: Option<&str>,
        ) -> CheckoutResult<PaymentIntent> {
            unreachable!("the API surface never confirms");
        }

        async fn can_make_payment(&self) -> CheckoutResult<bool> {
            Ok(true)
        }

        fn provider_name(&self) -> &'static str {
            "offline"
        }
    }

    fn test_server() -> TestServer {
        let config = AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            environment: "test".into(),
        };
        let provider: BoxedPaymentProvider = Arc::new(OfflineProvider);
        let state = AppState::with_services(config, Arc::new(StoreCatalog::demo()), provider);
        TestServer::new(create_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let server = test_server();
        let response = server.get("/health").await;

        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_get_cart_base() {
        let server = test_server();
        let response = server.get("/api/v1/cart").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
        assert_eq!(body["total"]["amount"], 143800);
    }

    #[tokio::test]
    async fn test_get_cart_with_shipping_option() {
        let server = test_server();
        let response = server
            .get("/api/v1/cart")
            .add_query_param("shipping_option", "express-shipping")
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["items"].as_array().unwrap().len(), 3);
        assert_eq!(body["total"]["amount"], 144800);
    }

    #[tokio::test]
    async fn test_get_cart_with_unknown_option_is_rejected() {
        let server = test_server();
        let response = server
            .get("/api/v1/cart")
            .add_query_param("shipping_option", "overnight-shipping")
            .await;

        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_shipping_options_for_redacted_address() {
        let server = test_server();
        let response = server
            .post("/api/v1/shipping-options")
            .json(&serde_json::json!({}))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["count"], 2);
        assert_eq!(body["shipping_options"][0]["id"], "free-shipping");
    }

    #[tokio::test]
    async fn test_payment_request_shape() {
        let server = test_server();
        let response = server.get("/api/v1/payment-request").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["country"], "CH");
        assert_eq!(body["currency"], "chf");
        assert_eq!(body["total"]["amount"], 143800);
        assert_eq!(body["requestShipping"], true);
        assert_eq!(body["shippingOptions"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_create_payment_intent() {
        let server = test_server();
        let response = server
            .post("/api/v1/payment-intents")
            .json(&serde_json::json!({
                "paymentMethodId": "pm_1",
                "shippingOption": {
                    "id": "free-shipping",
                    "label": "Free shipping",
                    "detail": "Arrives in 5 to 7 days",
                    "amount": 0
                }
            }))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["id"], "pi_offline");
        assert_eq!(body["amount"], 143800);
    }

    #[tokio::test]
    async fn test_create_payment_intent_without_option_is_rejected() {
        let server = test_server();
        let response = server
            .post("/api/v1/payment-intents")
            .json(&serde_json::json!({ "paymentMethodId": "pm_1" }))
            .await;

        response.assert_status_bad_request();
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "No shipping option selected");
    }
}
