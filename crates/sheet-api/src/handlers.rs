//! # Request Handlers
//!
//! Axum request handlers for the store API boundary a payment-sheet
//! storefront consumes: cart, shipping options, sheet request, and
//! payment-intent creation.

use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use sheet_core::{
    Cart, CartItem, CheckoutError, PaymentIntent, PaymentMethodEvent, PaymentRequestDetails,
    Price, ShippingAddress, ShippingOption,
};
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Query parameters for the cart endpoint
#[derive(Debug, Deserialize)]
pub struct CartQuery {
    /// Optional shipping option to include as a cart line
    #[serde(default)]
    pub shipping_option: Option<String>,
}

/// Cart response
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub total: Price,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let total = cart.total();
        Self {
            items: cart.items,
            total,
        }
    }
}

/// Shipping options response
#[derive(Debug, Serialize)]
pub struct ShippingOptionsResponse {
    pub shipping_options: Vec<ShippingOption>,
    pub count: usize,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

fn checkout_error_to_response(err: CheckoutError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "paysheet",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Get the cart, optionally with a shipping option line
#[instrument(skip(state), fields(shipping_option = ?query.shipping_option))]
pub async fn get_cart(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> Result<Json<CartResponse>, (StatusCode, Json<ErrorResponse>)> {
    let cart = state
        .catalog
        .cart(query.shipping_option.as_deref())
        .map_err(checkout_error_to_response)?;

    Ok(Json(CartResponse::from(cart)))
}

/// List shipping options for an address (possibly fully redacted)
#[instrument(skip(state, address))]
pub async fn list_shipping_options(
    State(state): State<AppState>,
    Json(address): Json<ShippingAddress>,
) -> Json<ShippingOptionsResponse> {
    let shipping_options = state.catalog.available_shipping_options(&address);
    let count = shipping_options.len();

    Json(ShippingOptionsResponse {
        shipping_options,
        count,
    })
}

/// Build the initial payment-sheet request for the current cart
#[instrument(skip(state))]
pub async fn get_payment_request(
    State(state): State<AppState>,
) -> Result<Json<PaymentRequestDetails>, (StatusCode, Json<ErrorResponse>)> {
    let cart = state.catalog.cart(None).map_err(checkout_error_to_response)?;
    Ok(Json(state.controller.payment_request(&cart)))
}

/// Create a payment intent for a submitted payment-method event
#[instrument(skip(state, event), fields(payment_method = %event.payment_method_id))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(event): Json<PaymentMethodEvent>,
) -> Result<Json<PaymentIntent>, (StatusCode, Json<ErrorResponse>)> {
    let intent = state
        .gateway
        .create_payment_intent(&event)
        .await
        .map_err(|e| {
            error!("Failed to create payment intent: {}", e);
            checkout_error_to_response(e)
        })?;

    info!("Created payment intent: {}", intent.id);
    Ok(Json(intent))
}
