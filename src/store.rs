//! Transcript storage.
//!
//! [`TranscriptStore`] is the seam between the processor and wherever raw
//! transcripts live. [`FsStore`] maps keys onto a directory tree; keys are
//! always `/`-separated regardless of platform.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

/// Errors from reading or writing stored objects.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Object not found: {key}")]
    NotFound { key: String },

    #[error("Invalid key (must be relative and must not contain '..'): {key}")]
    InvalidKey { key: String },

    #[error("Failed to read {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: io::Error,
    },
}

/// Keyed object storage for raw transcripts and processed output.
pub trait TranscriptStore: Send + Sync {
    /// Read the raw bytes stored under `key`.
    fn read(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Store `contents` under `key`, replacing any previous object.
    fn write(&self, key: &str, contents: &str) -> Result<(), StoreError>;
}

/// A store rooted at a local directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store resolving keys against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a key to a path below the root.
    ///
    /// Rejects keys that would escape the root.
    pub fn resolve(&self, key: &str) -> Result<PathBuf, StoreError> {
        let relative = Path::new(key);
        let escapes = key.is_empty()
            || relative
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.root.join(relative))
    }
}

impl TranscriptStore for FsStore {
    fn read(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(key)?;
        fs::read(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StoreError::Read {
                    key: key.to_string(),
                    source,
                }
            }
        })
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), StoreError> {
        let path = self.resolve(key)?;
        let write_err = |source| StoreError::Write {
            key: key.to_string(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(&path, contents).map_err(write_err)
    }
}

/// An in-memory store, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object directly.
    pub fn insert(&self, key: &str, contents: impl Into<Vec<u8>>) {
        self.lock().insert(key.to_string(), contents.into());
    }

    /// Fetch an object as text, if present.
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock()
            .get(key)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A panic while holding the lock leaves the map itself intact.
        self.objects.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TranscriptStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.lock()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), StoreError> {
        self.insert(key, contents.as_bytes());
        Ok(())
    }
}
