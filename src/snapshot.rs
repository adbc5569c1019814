//! Cart snapshots

use std::{ops::Deref, sync::Arc};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{items::CartLineItem, pricing};

/// Immutable, ordered view of the cart at one point in time.
///
/// Cloning is cheap; a snapshot handed to a reader never changes afterwards. Mutations
/// build a new snapshot instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartSnapshot {
    items: Arc<[CartLineItem]>,
}

impl CartSnapshot {
    /// Snapshot with no items.
    pub fn empty() -> Self {
        Self {
            items: Arc::from([]),
        }
    }

    /// Iterate over line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.iter()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds the line item with the given variant key.
    pub fn get(&self, variant_key: &str) -> Option<&CartLineItem> {
        self.items
            .iter()
            .find(|item| item.variant_key.as_str() == variant_key)
    }

    /// Sum of `unit_price * quantity` at full precision.
    pub fn total(&self) -> Decimal {
        pricing::total(&self.items)
    }

    /// Sum of quantities across all line items.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Copies the items into an owned vector.
    pub fn to_vec(&self) -> Vec<CartLineItem> {
        self.items.to_vec()
    }

    /// Whether both snapshots share the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl Default for CartSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for CartSnapshot {
    type Target = [CartLineItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl From<Vec<CartLineItem>> for CartSnapshot {
    fn from(items: Vec<CartLineItem>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl FromIterator<CartLineItem> for CartSnapshot {
    fn from_iter<I: IntoIterator<Item = CartLineItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CartSnapshot {
    type Item = &'a CartLineItem;
    type IntoIter = std::slice::Iter<'a, CartLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
