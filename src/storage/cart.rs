//! Cart persistence adapter

use thiserror::Error;

use crate::snapshot::CartSnapshot;

use super::{Slot, SlotError, Storage};

/// Slot the cart snapshot is stored under.
pub const CART_SLOT: Slot<CartSnapshot> = Slot::new("cart");

/// Errors raised by a [`CartStore`].
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// The stored record exists but is not a valid cart.
    #[error("stored cart could not be decoded")]
    Decode(#[source] SlotError),

    /// The store could not be read or written.
    #[error("cart storage unavailable")]
    Unavailable(#[source] SlotError),
}

impl From<SlotError> for CartStoreError {
    fn from(error: SlotError) -> Self {
        match error {
            SlotError::Decode { .. } => Self::Decode(error),
            SlotError::Storage(_) | SlotError::Encode { .. } => Self::Unavailable(error),
        }
    }
}

/// Durable home of the cart snapshot.
pub trait CartStore {
    /// Reads the saved snapshot, `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Decode`] for a corrupt record and
    /// [`CartStoreError::Unavailable`] if the store cannot be read.
    fn load(&self) -> Result<Option<CartSnapshot>, CartStoreError>;

    /// Writes the full snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Unavailable`] if the store cannot be written.
    fn save(&mut self, snapshot: &CartSnapshot) -> Result<(), CartStoreError>;

    /// Removes the record so a later [`load`](CartStore::load) returns `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CartStoreError::Unavailable`] if the store cannot be written.
    fn erase(&mut self) -> Result<(), CartStoreError>;
}

/// [`CartStore`] over the `cart` slot of any [`Storage`].
#[derive(Debug, Clone, Default)]
pub struct StorageCartStore<B> {
    backend: B,
}

impl<B: Storage> StorageCartStore<B> {
    /// Wraps a storage backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Shared access to the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Releases the backend.
    pub fn into_inner(self) -> B {
        self.backend
    }
}

impl<B: Storage> CartStore for StorageCartStore<B> {
    fn load(&self) -> Result<Option<CartSnapshot>, CartStoreError> {
        Ok(CART_SLOT.load(&self.backend)?)
    }

    fn save(&mut self, snapshot: &CartSnapshot) -> Result<(), CartStoreError> {
        Ok(CART_SLOT.save(&mut self.backend, snapshot)?)
    }

    fn erase(&mut self) -> Result<(), CartStoreError> {
        Ok(CART_SLOT.erase(&mut self.backend)?)
    }
}
