//! Durable storage
//!
//! A [`Storage`] is a set of named string slots, the equivalent of a browser's local storage.
//! [`Slot`] layers typed JSON records on top of it and [`CartStore`] is the contract the cart
//! manager persists through.

use std::io;

use thiserror::Error;

mod cart;
mod file;
mod memory;
mod slot;

pub use cart::{CART_SLOT, CartStore, CartStoreError, StorageCartStore};
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use slot::{Slot, SlotError};

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key contains characters the backend cannot address.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// Underlying I/O failure.
    #[error("storage i/o error")]
    Io(#[from] io::Error),
}

/// Named key-value slots holding string values.
pub trait Storage {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
