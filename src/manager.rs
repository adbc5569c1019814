//! Cart state manager
//!
//! [`CartManager`] owns the canonical [`CartSnapshot`] for one session and mirrors it to a
//! [`CartStore`]. It is constructed explicitly and passed to whatever needs it; there is no
//! process-wide cart.
//!
//! The durable record is read at most once. Every operation hydrates first, so the empty
//! in-memory cart of a fresh manager can never be written over a cart saved by an earlier
//! session. While the store cannot be read at all, mutations stay in memory and nothing is
//! written; the next operation tries the read again.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use tokio::sync::watch;
use tracing::{debug, error, warn};

use crate::{
    items::{CartLineItem, LineItemPatch},
    snapshot::CartSnapshot,
    storage::{CartStore, CartStoreError},
};

/// Outcome of the one-time read of the durable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hydration {
    /// A saved cart was restored.
    Restored {
        /// Number of line items restored.
        items: usize,
    },

    /// Nothing was stored.
    Empty,

    /// A record existed but could not be used; the session starts with an empty cart.
    ///
    /// The record itself is left in place until the first mutation overwrites it.
    Discarded,

    /// The store could not be read.
    ///
    /// This outcome is not remembered: the manager stays unhydrated, writes are held back
    /// and the next operation reads again.
    Unavailable,
}

/// Owner of the session's cart.
#[derive(Debug)]
pub struct CartManager<S> {
    store: S,
    snapshot: CartSnapshot,
    hydration: Option<Hydration>,
    publisher: watch::Sender<CartSnapshot>,
    last_persist_error: Option<CartStoreError>,
}

impl<S: CartStore> CartManager<S> {
    /// Creates a manager that has not read its store yet.
    pub fn new(store: S) -> Self {
        let (publisher, _) = watch::channel(CartSnapshot::empty());

        Self {
            store,
            snapshot: CartSnapshot::empty(),
            hydration: None,
            publisher,
            last_persist_error: None,
        }
    }

    /// Creates a manager and immediately reads its store.
    pub fn hydrated(store: S) -> Self {
        let mut manager = Self::new(store);

        manager.hydrate();

        manager
    }

    /// Reads the durable record if that has not happened yet.
    ///
    /// Once a read succeeds, later calls return its outcome without touching the store.
    /// Rows added while the store was unreadable are merged after the saved ones and the
    /// result is written back.
    pub fn hydrate(&mut self) -> Hydration {
        if let Some(hydration) = self.hydration {
            return hydration;
        }

        let (hydration, stored) = match self.store.load() {
            Ok(Some(stored)) => {
                let stored = merge_duplicates(&stored);
                let items = stored.len();

                debug!(items, "cart restored from storage");

                (Hydration::Restored { items }, stored)
            }
            Ok(None) => (Hydration::Empty, CartSnapshot::empty()),
            Err(CartStoreError::Unavailable(source)) => {
                warn!("cart storage unreadable, holding back writes: {source}");

                return Hydration::Unavailable;
            }
            Err(error @ CartStoreError::Decode(_)) => {
                warn!("discarding stored cart: {error}");

                (Hydration::Discarded, CartSnapshot::empty())
            }
        };

        self.hydration = Some(hydration);

        if self.snapshot.is_empty() {
            if matches!(hydration, Hydration::Restored { .. }) {
                self.publish(stored);
            }
        } else {
            let pending = merge_duplicates(stored.iter().chain(&self.snapshot));

            self.commit(pending.to_vec());
        }

        hydration
    }

    /// Whether the durable record has been read.
    pub fn is_hydrated(&self) -> bool {
        self.hydration.is_some()
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> CartSnapshot {
        self.snapshot.clone()
    }

    /// Receiver that observes every snapshot published from now on.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.publisher.subscribe()
    }

    /// Sum of `unit_price * quantity`, unrounded.
    pub fn total(&self) -> Decimal {
        self.snapshot.total()
    }

    /// The most recent write or erase failure, cleared by the next success.
    pub fn last_persist_error(&self) -> Option<&CartStoreError> {
        self.last_persist_error.as_ref()
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds an item, or increases the quantity of the row with the same variant key.
    ///
    /// An existing row keeps its title, price and image.
    pub fn add_item(&mut self, item: CartLineItem) {
        self.hydrate();

        let mut items = self.snapshot.to_vec();

        match items
            .iter_mut()
            .find(|existing| existing.variant_key == item.variant_key)
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity.get());
            }
            None => items.push(item),
        }

        self.commit(items);
    }

    /// Removes the row with `variant_key`. Unknown keys change nothing.
    pub fn remove_item(&mut self, variant_key: &str) {
        self.hydrate();

        if self.snapshot.get(variant_key).is_none() {
            return;
        }

        let items = self
            .snapshot
            .iter()
            .filter(|item| item.variant_key.as_str() != variant_key)
            .cloned()
            .collect();

        self.commit(items);
    }

    /// Sets the quantity of the row with `variant_key`; zero or less removes the row.
    /// Unknown keys change nothing.
    pub fn update_quantity(&mut self, variant_key: &str, quantity: i64) {
        self.hydrate();

        if self.snapshot.get(variant_key).is_none() {
            return;
        }

        let Some(quantity) = u64::try_from(quantity)
            .ok()
            .and_then(|q| NonZeroU32::new(u32::try_from(q).unwrap_or(u32::MAX)))
        else {
            self.remove_item(variant_key);
            return;
        };

        let items = self
            .snapshot
            .iter()
            .cloned()
            .map(|mut item| {
                if item.variant_key.as_str() == variant_key {
                    item.quantity = quantity;
                }

                item
            })
            .collect();

        self.commit(items);
    }

    /// Merges `patch` into the row with `variant_key`. Unknown keys change nothing.
    pub fn update_fields(&mut self, variant_key: &str, patch: LineItemPatch) {
        self.hydrate();

        if self.snapshot.get(variant_key).is_none() {
            return;
        }

        let mut items = self.snapshot.to_vec();

        if let Some(item) = items
            .iter_mut()
            .find(|item| item.variant_key.as_str() == variant_key)
        {
            item.apply(patch);
        }

        self.commit(items);
    }

    /// Empties the cart and erases the durable record.
    ///
    /// A successful erase also counts as hydration: there is nothing left to read.
    pub fn clear(&mut self) {
        self.hydrate();

        let result = self.store.erase();

        if result.is_ok() && self.hydration.is_none() {
            self.hydration = Some(Hydration::Empty);
        }

        self.record_persist_result(result);
        self.publish(CartSnapshot::empty());
    }

    fn commit(&mut self, items: Vec<CartLineItem>) {
        let snapshot = CartSnapshot::from(items);

        if self.hydration.is_some() {
            let result = self.store.save(&snapshot);

            self.record_persist_result(result);
        } else {
            debug!("cart storage not read yet, write held back");
        }

        self.publish(snapshot);
    }

    fn record_persist_result(&mut self, result: Result<(), CartStoreError>) {
        match result {
            Ok(()) => self.last_persist_error = None,
            Err(persist_error) => {
                error!("failed to persist cart: {persist_error}");

                self.last_persist_error = Some(persist_error);
            }
        }
    }

    fn publish(&mut self, snapshot: CartSnapshot) {
        self.snapshot = snapshot.clone();
        self.publisher.send_replace(snapshot);
    }
}

/// Folds rows sharing a variant key into the first of them.
fn merge_duplicates<'a>(rows: impl IntoIterator<Item = &'a CartLineItem>) -> CartSnapshot {
    let mut items: Vec<CartLineItem> = Vec::new();

    for item in rows {
        match items
            .iter_mut()
            .find(|existing| existing.variant_key == item.variant_key)
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity.get());
            }
            None => items.push(item.clone()),
        }
    }

    CartSnapshot::from(items)
}
