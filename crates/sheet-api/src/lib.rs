//! # sheet-api
//!
//! HTTP API layer for paysheet-rs.
//!
//! This crate provides:
//! - The composition root wiring catalog, provider, gateway and controller
//! - Axum-based HTTP server exposing the store API a storefront consumes
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/v1/cart` | Cart, optionally with a shipping option |
//! | POST | `/api/v1/shipping-options` | Options for a (partial) address |
//! | GET | `/api/v1/payment-request` | Initial payment-sheet request |
//! | POST | `/api/v1/payment-intents` | Create a payment intent |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
