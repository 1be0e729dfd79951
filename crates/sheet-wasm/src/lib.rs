//! # sheet-wasm
//!
//! WebAssembly bindings for paysheet-rs.
//!
//! This crate provides WASM-compatible functions for the browser storefront:
//! - Building the payment-sheet request payload from cart items
//! - Minor-unit amount conversion and display formatting
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCartItem, build_payment_request } from 'paysheet-wasm';
//!
//! await init();
//!
//! const request = build_payment_request(
//!   [new WasmCartItem(1, 'iPhone 14 Pro', 117900)],
//!   'Demo Shop', 'CH', 'chf',
//! );
//!
//! // hand `request` to stripe.paymentRequest(...)
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use sheet_core::{Cart, CartItem, Currency, PaymentRequestDetails, Price};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module (called automatically)
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Cart item for the WASM interface, price in minor units
#[derive(Debug, Serialize, Deserialize)]
#[wasm_bindgen]
pub struct WasmCartItem {
    id: u32,
    name: String,
    price_cents: i64,
}

#[wasm_bindgen]
impl WasmCartItem {
    #[wasm_bindgen(constructor)]
    pub fn new(id: u32, name: String, price_cents: i64) -> Self {
        Self {
            id,
            name,
            price_cents,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn price_cents(&self) -> i64 {
        self.price_cents
    }

    /// Format the price for display
    #[wasm_bindgen]
    pub fn format_price(&self) -> String {
        format_amount(self.price_cents)
    }
}

impl WasmCartItem {
    fn to_cart_item(&self, currency: Currency) -> CartItem {
        CartItem::new(
            self.id,
            self.name.clone(),
            Price::from_minor_units(self.price_cents, currency),
        )
    }
}

/// Convert a decimal price to minor units
#[wasm_bindgen]
pub fn price_to_minor_units(price: f64) -> i64 {
    Currency::default().to_minor_units(price)
}

/// Total for a list of cart items, in minor units
#[wasm_bindgen]
pub fn cart_total(items: JsValue) -> Result<i64, JsValue> {
    let items: Vec<WasmCartItem> = serde_wasm_bindgen::from_value(items)
        .map_err(|e| JsValue::from_str(&format!("Invalid cart items: {}", e)))?;

    Ok(items.iter().map(|item| item.price_cents).sum())
}

/// Build the payment-sheet request payload for a cart.
///
/// The returned object matches the browser Payment Request shape and can be
/// handed to the provider's `paymentRequest(...)` unchanged.
#[wasm_bindgen]
pub fn build_payment_request(
    items: JsValue,
    label: &str,
    country: &str,
    currency: &str,
) -> Result<JsValue, JsValue> {
    let currency = Currency::from_code(currency)
        .ok_or_else(|| JsValue::from_str(&format!("Unsupported currency: {}", currency)))?;

    let items: Vec<WasmCartItem> = serde_wasm_bindgen::from_value(items)
        .map_err(|e| JsValue::from_str(&format!("Invalid cart items: {}", e)))?;

    let cart = Cart::with_items(
        items.iter().map(|item| item.to_cart_item(currency)).collect(),
        currency,
    );

    let request = PaymentRequestDetails::for_cart(&cart, label, country);
    serde_wasm_bindgen::to_value(&request)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize request: {}", e)))
}

/// Format an amount in minor units for display
#[wasm_bindgen]
pub fn format_amount(cents: i64) -> String {
    Price::from_minor_units(cents, Currency::default()).display()
}

/// Log to browser console
#[wasm_bindgen]
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
