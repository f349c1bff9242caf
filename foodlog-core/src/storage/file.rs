use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use super::{KeyValueStore, StorageError, StoreKey};

/// Stores each record as `<key>.json` inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the full path for a record.
    pub fn path(&self, key: StoreKey) -> PathBuf {
        self.data_dir.join(key.filename())
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StorageError> {
        let path = self.path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(path, e)),
        }
    }

    /// Writes through a temp file and renames it over the record.
    ///
    /// Creates the data directory if it doesn't exist.
    fn write(&self, key: StoreKey, contents: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::Io(self.data_dir.clone(), e))?;

        let path = self.path(key);
        let temp_path = path.with_extension("json.tmp");

        let mut file =
            File::create(&temp_path).map_err(|e| StorageError::Io(temp_path.clone(), e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| StorageError::Io(temp_path.clone(), e))?;
        file.sync_all()
            .map_err(|e| StorageError::Io(temp_path.clone(), e))?;

        fs::rename(&temp_path, &path).map_err(|e| StorageError::Io(path, e))?;

        Ok(())
    }
}
