//! Order Models

use serde::Deserialize;

use storefront::{checkout::BillingDetails, items::CartLineItem};

/// An order as submitted by the checkout page. Either part may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    #[serde(default)]
    pub form_data: Option<BillingDetails>,

    #[serde(default)]
    pub cart: Option<Vec<CartLineItem>>,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidOrder {
    pub billing: BillingDetails,
    pub items: Vec<CartLineItem>,
}

impl OrderSubmission {
    /// Requires billing details with every field filled in and a non-empty cart.
    pub fn validate(self) -> Option<ValidOrder> {
        let billing = self.form_data?;
        let items = self.cart.filter(|items| !items.is_empty())?;

        billing.validate().ok()?;

        Some(ValidOrder { billing, items })
    }
}
