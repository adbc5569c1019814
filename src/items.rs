//! Items

use std::{borrow::Borrow, fmt, num::NonZeroU32};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::UnitPrice;

/// Cart identity of a line item.
///
/// This is the only key used for lookup, update and removal. It is independent of the
/// catalog's numeric product id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantKey(String);

impl VariantKey {
    /// Creates a new variant key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariantKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for VariantKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl Borrow<str> for VariantKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One product's presence in the cart.
///
/// The serialized field names match the storefront's persisted cart and order payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Catalog product id, when the add-to-cart action supplied one.
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<u64>,

    /// Cart identity.
    #[serde(rename = "id")]
    pub variant_key: VariantKey,

    /// Product title at insertion time.
    pub title: String,

    /// Unit price captured when the item was added.
    #[serde(rename = "price")]
    pub unit_price: UnitPrice,

    /// Image URI.
    #[serde(rename = "image")]
    pub image_ref: String,

    /// Number of units, never zero.
    pub quantity: NonZeroU32,
}

impl CartLineItem {
    /// Creates a line item without a catalog id.
    pub fn new(
        variant_key: impl Into<VariantKey>,
        title: impl Into<String>,
        unit_price: UnitPrice,
        image_ref: impl Into<String>,
        quantity: NonZeroU32,
    ) -> Self {
        Self {
            catalog_id: None,
            variant_key: variant_key.into(),
            title: title.into(),
            unit_price,
            image_ref: image_ref.into(),
            quantity,
        }
    }

    /// Sets the catalog id.
    #[must_use]
    pub fn with_catalog_id(mut self, catalog_id: u64) -> Self {
        self.catalog_id = Some(catalog_id);
        self
    }

    /// Returns `unit_price * quantity` at full precision, saturating at [`Decimal::MAX`].
    pub fn line_total(&self) -> Decimal {
        self.unit_price.times(self.quantity)
    }

    /// Merges the populated fields of `patch` into this item.
    pub fn apply(&mut self, patch: LineItemPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }

        if let Some(unit_price) = patch.unit_price {
            self.unit_price = unit_price;
        }

        if let Some(image_ref) = patch.image_ref {
            self.image_ref = image_ref;
        }

        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
    }
}

/// Partial update for a line item. Identity fields cannot be patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItemPatch {
    /// Replacement title.
    pub title: Option<String>,

    /// Replacement unit price.
    pub unit_price: Option<UnitPrice>,

    /// Replacement image URI.
    pub image_ref: Option<String>,

    /// Replacement quantity.
    pub quantity: Option<NonZeroU32>,
}

impl LineItemPatch {
    /// Returns `true` if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.unit_price.is_none()
            && self.image_ref.is_none()
            && self.quantity.is_none()
    }
}
