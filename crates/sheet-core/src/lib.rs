//! # sheet-core
//!
//! Core types and traits for the paysheet checkout engine.
//!
//! This crate provides:
//! - `StoreCatalog` for cart contents and shipping options
//! - `PaymentSheetController` building and answering the native payment sheet
//! - `PaymentIntentGateway` for server-side intent creation
//! - `CheckoutOrchestrator` driving the `CheckoutAttempt` state machine
//! - `PaymentProvider`, `PaymentSheet` and `Navigator` trait seams
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use sheet_core::{CheckoutOrchestrator, PaymentIntentGateway, PaymentSheetController, StoreCatalog};
//!
//! // Composition root wires the services once
//! let catalog = Arc::new(StoreCatalog::demo());
//! let provider: BoxedPaymentProvider = Arc::new(stripe_provider);
//!
//! let controller = PaymentSheetController::new(catalog.clone(), provider.clone());
//! let orchestrator = CheckoutOrchestrator::new(
//!     PaymentIntentGateway::new(catalog.clone(), provider.clone()),
//!     provider,
//! );
//!
//! // Build the sheet, answer its events, submit
//! let request = controller.payment_request(&catalog.cart(None)?);
//! let update = controller.handle_address_change(&address)?;
//! let attempt = orchestrator.submit(event, &mut sheet, &mut navigator).await?;
//! ```

pub mod attempt;
pub mod cart;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod money;
pub mod provider;
pub mod sheet;
pub mod shipping;

// Re-exports for convenience
pub use attempt::{AttemptOutcome, AttemptState, CheckoutAttempt, CheckoutOrchestrator};
pub use cart::{Cart, CartItem, SHIPPING_LINE_ID};
pub use catalog::{StoreCatalog, StoreProfile};
pub use controller::PaymentSheetController;
pub use error::{CheckoutError, CheckoutResult};
pub use gateway::PaymentIntentGateway;
pub use money::{Currency, Price};
pub use provider::{BoxedPaymentProvider, IntentStatus, PaymentIntent, PaymentProvider};
pub use sheet::{
    DisplayItem, Navigator, PaymentButton, PaymentMethodEvent, PaymentRequestDetails,
    PaymentSheet, SheetShippingOption, SheetStatus, SheetTotal, SheetUpdate,
};
pub use shipping::{ShippingAddress, ShippingOption};
