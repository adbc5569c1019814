//! Typed JSON slots

use std::marker::PhantomData;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use super::{Storage, StorageError};

/// Errors raised while reading or writing a typed slot.
#[derive(Debug, Error)]
pub enum SlotError {
    /// The backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The stored text is not a valid record.
    #[error("failed to decode slot {key:?}")]
    Decode {
        /// Slot name.
        key: &'static str,

        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// The record could not be serialized.
    #[error("failed to encode slot {key:?}")]
    Encode {
        /// Slot name.
        key: &'static str,

        /// Serialization failure.
        #[source]
        source: serde_json::Error,
    },
}

/// A named slot holding one JSON-encoded `T`.
#[derive(Debug)]
pub struct Slot<T> {
    key: &'static str,
    marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<T> {}

impl<T> Slot<T> {
    /// Declares a slot named `key`.
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            marker: PhantomData,
        }
    }

    /// Slot name.
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Removes the record entirely.
    ///
    /// # Errors
    ///
    /// Returns a [`SlotError`] if the backend fails.
    pub fn erase(&self, storage: &mut impl Storage) -> Result<(), SlotError> {
        storage.remove(self.key)?;

        Ok(())
    }
}

impl<T: Serialize + DeserializeOwned> Slot<T> {
    /// Reads the record. A missing, empty or whitespace-only value reads as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Decode`] if the stored text does not parse.
    pub fn load(&self, storage: &impl Storage) -> Result<Option<T>, SlotError> {
        let Some(raw) = storage.get(self.key)? else {
            return Ok(None);
        };

        if raw.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| SlotError::Decode {
                key: self.key,
                source,
            })
    }

    /// Replaces the record.
    ///
    /// # Errors
    ///
    /// Returns a [`SlotError`] if encoding or the backend fails.
    pub fn save(&self, storage: &mut impl Storage, value: &T) -> Result<(), SlotError> {
        let encoded = serde_json::to_string(value).map_err(|source| SlotError::Encode {
            key: self.key,
            source,
        })?;

        storage.set(self.key, &encoded)?;

        Ok(())
    }
}
