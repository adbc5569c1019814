//! Catalog products
//!
//! The product document served by the CMS, and its conversion into a cart line item.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{
    items::{CartLineItem, VariantKey},
    pricing::UnitPrice,
};

/// A product as published in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Numeric product id.
    #[serde(rename = "Id")]
    pub id: u64,

    /// Document key, used as the cart identity.
    #[serde(rename = "_id")]
    pub key: VariantKey,

    /// Product title.
    pub title: String,

    /// Product description.
    #[serde(default)]
    pub description: String,

    /// Current price.
    pub price: UnitPrice,

    /// Image URL.
    #[serde(rename = "imageUrl", default)]
    pub image: String,
}

impl CatalogProduct {
    /// Line item for adding `quantity` units of this product, priced as of now.
    pub fn to_line_item(&self, quantity: NonZeroU32) -> CartLineItem {
        CartLineItem::new(
            self.key.clone(),
            self.title.clone(),
            self.price,
            self.image.clone(),
            quantity,
        )
        .with_catalog_id(self.id)
    }
}
