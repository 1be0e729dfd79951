//! # Checkout Error Types
//!
//! Typed error handling for the paysheet checkout engine.
//! All checkout operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The submitted event carries no shipping option
    #[error("No shipping option selected")]
    NoShippingOption,

    /// Shipping option identifier does not resolve against the catalog
    #[error("Invalid shipping option: {id}")]
    InvalidShippingOption { id: String },

    /// The platform cannot surface the payment sheet
    #[error("Payment method not available [{provider}]")]
    PaymentUnavailable { provider: String },

    /// Payment provider API error
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Card confirmation was declined
    #[error("Payment declined: {reason}")]
    PaymentDeclined { reason: String },

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CheckoutError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::Configuration(_) => 500,
            CheckoutError::InvalidRequest(_) => 400,
            CheckoutError::NoShippingOption => 400,
            CheckoutError::InvalidShippingOption { .. } => 400,
            CheckoutError::PaymentUnavailable { .. } => 503,
            CheckoutError::ProviderError { .. } => 502,
            CheckoutError::PaymentDeclined { .. } => 402,
            CheckoutError::NetworkError(_) => 503,
            CheckoutError::Serialization(_) => 500,
            CheckoutError::Internal(_) => 500,
        }
    }

    /// Returns true if this error is a precondition failure the user can fix
    /// by re-initiating the sheet (as opposed to a provider-side fault)
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            CheckoutError::NoShippingOption
                | CheckoutError::InvalidShippingOption { .. }
                | CheckoutError::InvalidRequest(_)
        )
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
