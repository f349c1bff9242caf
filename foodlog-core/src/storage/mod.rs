//! Key-value persistence for foodlog records.
//!
//! Records are stored as JSON text under a [`StoreKey`]. Backends only move
//! raw text around; [`KeyValueStore::load`] and [`KeyValueStore::save`] take
//! care of (de)serialization.
//!
//! Reads never fail from the caller's point of view: a missing record, an
//! unreadable file or text that does not deserialize all yield the supplied
//! default. Writes replace the whole record.

mod error;
mod file;
mod key;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use key::StoreKey;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Raw text storage addressed by [`StoreKey`].
pub trait KeyValueStore {
    /// Returns the stored text, or `Ok(None)` if nothing was ever written.
    fn read(&self, key: StoreKey) -> Result<Option<String>, StorageError>;

    /// Replaces the stored text.
    fn write(&self, key: StoreKey, contents: &str) -> Result<(), StorageError>;

    /// Returns `true` if a record exists for `key`.
    fn contains(&self, key: StoreKey) -> bool {
        matches!(self.read(key), Ok(Some(_)))
    }

    /// Loads and deserializes a record, falling back to `default`.
    fn load<T>(&self, key: StoreKey, default: T) -> T
    where
        Self: Sized,
        T: DeserializeOwned,
    {
        self.try_load(key).unwrap_or(default)
    }

    /// Loads and deserializes a record, or `None` if it is absent or unusable.
    fn try_load<T>(&self, key: StoreKey) -> Option<T>
    where
        Self: Sized,
        T: DeserializeOwned,
    {
        match self.load_checked(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read '{}' record: {}", key, e);
                None
            }
        }
    }

    /// Like [`try_load`](KeyValueStore::try_load), but read failures are
    /// returned instead of being treated as an absent record.
    ///
    /// Callers about to overwrite `key` must use this so an unreadable record
    /// is never replaced with one built from nothing.
    fn load_checked<T>(&self, key: StoreKey) -> Result<Option<T>, StorageError>
    where
        Self: Sized,
        T: DeserializeOwned,
    {
        let Some(contents) = self.read(key)? else {
            tracing::debug!("No '{}' record, using default", key);
            return Ok(None);
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!("Ignoring corrupt '{}' record: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Serializes `value` and writes it under `key`.
    fn save<T>(&self, key: StoreKey, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
        T: Serialize + ?Sized,
    {
        let contents =
            serde_json::to_string(value).map_err(|e| StorageError::Serialize(key, e))?;
        self.write(key, &contents)?;
        tracing::debug!("Saved '{}' record ({} bytes)", key, contents.len());
        Ok(())
    }
}
