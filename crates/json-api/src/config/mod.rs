//! Server configuration module

use clap::Parser;

use crate::config::{
    mail::MailArgs, observability::LoggingConfig, server::ServerRuntimeConfig, store::StoreConfig,
};

pub(crate) mod mail;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod store;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Outgoing mail settings.
    #[command(flatten)]
    pub mail: MailArgs,

    /// Store branding and currency.
    #[command(flatten)]
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
