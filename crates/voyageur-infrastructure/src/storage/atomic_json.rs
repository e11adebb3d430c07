//! Atomic JSON file operations.
//!
//! Provides a thin layer for safe access to the persisted JSON lists.

use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::warn;

use voyageur_core::error::{Result, VoyageurError};

/// A handle to an atomically written JSON file.
///
/// Provides:
/// - **Atomicity**: updates are all-or-nothing via tmp file + atomic rename
/// - **Isolation**: file locking prevents concurrent same-host modifications
/// - **Durability**: explicit fsync before rename
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new atomic JSON file handle.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the JSON file and deserializes it.
    ///
    /// An absent or empty file yields `None`; malformed content is an error
    /// so the caller can decide whether to recover.
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves data to the JSON file atomically.
    ///
    /// Uses a temporary file + atomic rename in the same directory.
    pub fn save(&self, data: &T) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json_string = serde_json::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json_string.as_bytes())?;

        // Ensure data is written to disk before the rename
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Performs a read-modify-write update under an exclusive file lock.
    ///
    /// The update function receives the current data (or `default_value`
    /// when the file is absent or unparseable) and the result is written
    /// back atomically. Unparseable content is discarded rather than
    /// propagated; the write path must never be blocked by a corrupt store.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<()>
    where
        F: FnOnce(&mut T) -> Result<()>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = match self.load() {
            Ok(Some(data)) => data,
            Ok(None) => default_value,
            Err(err) if err.is_serialization() => {
                warn!(path = %self.path.display(), error = %err, "discarding unparseable content");
                default_value
            }
            Err(err) => return Err(err),
        };
        f(&mut data)?;
        self.save(&data)?;

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| VoyageurError::io("Path has no parent directory"))?;

        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| VoyageurError::io("Path has no file name"))?;

        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

/// A file lock guard that releases the lock when dropped.
///
/// The lock file is left in place after release: waiters hold handles to
/// its inode, and unlinking it would let a later acquirer lock a fresh
/// inode concurrently with them.
struct FileLock {
    #[allow(dead_code)]
    file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive().map_err(|e| {
                VoyageurError::data_access(format!("Failed to acquire lock: {}", e))
            })?;
        }

        #[cfg(not(unix))]
        {
            // No file locking off Unix; acceptable for a single-user app.
        }

        Ok(FileLock { file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestRecord {
        name: String,
        price: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("records.json");
        let atomic_file = AtomicJsonFile::<Vec<TestRecord>>::new(file_path);

        let records = vec![TestRecord {
            name: "Taj Palace".to_string(),
            price: 12500,
        }];

        atomic_file.save(&records).unwrap();

        let loaded = atomic_file.load().unwrap().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing.json");
        let atomic_file = AtomicJsonFile::<Vec<TestRecord>>::new(file_path);

        assert!(atomic_file.load().unwrap().is_none());
    }

    #[test]
    fn test_malformed_content_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("records.json");
        fs::write(&file_path, "not json at all {{{").unwrap();

        let atomic_file = AtomicJsonFile::<Vec<TestRecord>>::new(file_path);
        let err = atomic_file.load().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_update_appends_under_lock() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("records.json");
        let atomic_file = AtomicJsonFile::<Vec<TestRecord>>::new(file_path);

        for price in [1, 2] {
            atomic_file
                .update(Vec::new(), |records| {
                    records.push(TestRecord {
                        name: format!("r{}", price),
                        price,
                    });
                    Ok(())
                })
                .unwrap();
        }

        let loaded = atomic_file.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].price, 1);
        assert_eq!(loaded[1].price, 2);
    }

    #[test]
    fn test_update_discards_unparseable_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("records.json");
        fs::write(&file_path, "[1, 2, oops").unwrap();

        let atomic_file = AtomicJsonFile::<Vec<TestRecord>>::new(file_path);
        atomic_file
            .update(Vec::new(), |records| {
                records.push(TestRecord {
                    name: "JW Marriott".to_string(),
                    price: 14500,
                });
                Ok(())
            })
            .unwrap();

        let loaded = atomic_file.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("records.json");
        let atomic_file = AtomicJsonFile::<Vec<TestRecord>>::new(file_path.clone());

        atomic_file.save(&Vec::new()).unwrap();

        assert!(!temp_dir.path().join(".records.json.tmp").exists());
        assert!(file_path.exists());
    }
}
