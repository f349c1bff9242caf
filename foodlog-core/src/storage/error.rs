use std::path::PathBuf;
use thiserror::Error;

use super::StoreKey;

/// Errors that can occur while reading or writing records.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error for {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Failed to serialize record '{0}': {1}")]
    Serialize(StoreKey, #[source] serde_json::Error),
}
