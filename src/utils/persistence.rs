//! Key-value JSON persistence for the player profile and game flags.
//!
//! Each key maps to one `<key>.json` file in the data directory. An in-memory
//! store with the same interface backs tests and throwaway sessions.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::core::constants::{APP_NAME, DATA_DIR_ENV};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid save data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not determine a data directory")]
    NoDataDir,
}

/// Storage of raw JSON strings by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// Reads `key` and deserializes it. Missing keys give `Ok(None)`.
pub fn load_json<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Option<T>, PersistenceError> {
    match store.get(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Serializes `data` as pretty-printed JSON under `key`.
pub fn save_json<T: Serialize>(
    store: &mut impl KeyValueStore,
    key: &str,
    data: &T,
) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(data)?;
    store.set(key, &json)
}

/// Default data directory: `$WORDBATTLE_DATA_DIR`, else `<platform data dir>/wordbattle`.
pub fn default_data_dir() -> Result<PathBuf, PersistenceError> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_dir().ok_or(PersistenceError::NoDataDir)?;
    Ok(base.join(APP_NAME))
}

pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!("Using data directory {}", dir.display());
        Ok(Self { dir })
    }

    pub fn open_default() -> Result<Self, PersistenceError> {
        Self::open(default_data_dir()?)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.entries.remove(key);
        Ok(())
    }
}
