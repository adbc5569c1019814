//! Store Config

use clap::Args;
use rusty_money::{Findable, iso::Currency};

use storefront::notifications::StoreIdentity;

/// Store branding and pricing currency.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Store name used in customer emails
    #[arg(long, env = "STORE_NAME", default_value = "Storefront")]
    pub store_name: String,

    /// Support address quoted in customer emails (defaults to the owner address)
    #[arg(long, env = "SUPPORT_EMAIL")]
    pub support_email: Option<String>,

    /// ISO 4217 code of the store currency
    #[arg(
        long = "store-currency",
        env = "STORE_CURRENCY",
        default_value = "USD",
        value_parser = parse_currency
    )]
    pub currency: &'static Currency,
}

impl StoreConfig {
    /// Store identity, falling back to `fallback_email` when no support address is set.
    pub fn identity(&self, fallback_email: Option<&str>) -> StoreIdentity {
        StoreIdentity {
            name: self.store_name.clone(),
            support_email: self
                .support_email
                .as_deref()
                .or(fallback_email)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

fn parse_currency(code: &str) -> Result<&'static Currency, String> {
    Currency::find(&code.to_ascii_uppercase()).ok_or_else(|| format!("unknown currency: {code}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_email_falls_back() {
        let config = StoreConfig {
            store_name: "Shop".to_string(),
            support_email: None,
            currency: rusty_money::iso::USD,
        };

        assert_eq!(
            config.identity(Some("owner@shop.test")).support_email,
            "owner@shop.test"
        );
        assert_eq!(config.identity(None).support_email, "");
    }
}
