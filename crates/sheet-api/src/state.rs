//! # Application State
//!
//! Composition root for the checkout services. Everything with a lifecycle —
//! catalog, payment provider, gateway, sheet controller — is constructed
//! once here and shared behind `Arc`s; no module-level singletons.

use sheet_core::{
    BoxedPaymentProvider, PaymentIntentGateway, PaymentSheetController, StoreCatalog,
};
use sheet_stripe::StripeIntentProvider;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Catalog/shipping service
    pub catalog: Arc<StoreCatalog>,
    /// Payment provider
    pub provider: BoxedPaymentProvider,
    /// Payment-intent gateway
    pub gateway: Arc<PaymentIntentGateway>,
    /// Payment-sheet controller
    pub controller: Arc<PaymentSheetController>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create an AppState with the Stripe provider from the environment
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let catalog = Arc::new(load_catalog()?);

        let provider: BoxedPaymentProvider = Arc::new(
            StripeIntentProvider::from_env()
                .map_err(|e| anyhow::anyhow!("Failed to initialize Stripe: {}", e))?,
        );

        Ok(Self::with_services(config, catalog, provider))
    }

    /// Wire the checkout services around explicit catalog/provider instances
    /// (tests pass scripted providers through here)
    pub fn with_services(
        config: AppConfig,
        catalog: Arc<StoreCatalog>,
        provider: BoxedPaymentProvider,
    ) -> Self {
        let gateway = Arc::new(PaymentIntentGateway::new(catalog.clone(), provider.clone()));
        let controller = Arc::new(PaymentSheetController::new(
            catalog.clone(),
            provider.clone(),
        ));

        Self {
            catalog,
            provider,
            gateway,
            controller,
            config,
        }
    }
}

/// Load the catalog from config file, falling back to the built-in demo data
fn load_catalog() -> anyhow::Result<StoreCatalog> {
    let config_paths = [
        "config/catalog.toml",
        "../config/catalog.toml",
        "../../config/catalog.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let catalog = StoreCatalog::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded catalog from {}", path);
            return Ok(catalog);
        }
    }

    tracing::warn!("No catalog config found, using demo catalog");
    Ok(StoreCatalog::demo())
}
