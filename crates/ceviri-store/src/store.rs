use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Key-value store of JSON blobs, persisted as one JSON object file.
///
/// Reads never fail: a missing or unreadable value yields the caller's default.
pub struct JsonStore {
    /// `None` keeps everything in memory
    path: Option<PathBuf>,
    data: Mutex<Map<String, Value>>,
}

impl JsonStore {
    /// Open the store at `path`, creating parent directories as needed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = load_map(&path);
        tracing::debug!("Opened store at {} ({} keys)", path.display(), data.len());

        Ok(Self {
            path: Some(path),
            data: Mutex::new(data),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: Mutex::new(Map::new()),
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let data = self.lock();
        let Some(value) = data.get(key) else {
            return default;
        };

        match serde_json::from_value(value.clone()) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Storage get error for '{}': {}", key, e);
                default
            }
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value)?;
        let mut data = self.lock();
        let mut next = data.clone();
        next.insert(key.to_string(), value);
        self.commit(&mut data, next)
    }

    /// Read-modify-write of one key under a single lock
    pub fn update<T, F>(&self, key: &str, default: T, f: F) -> Result<(), StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        let mut data = self.lock();
        let mut value = match data.get(key) {
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                tracing::error!("Storage get error for '{}': {}", key, e);
                default
            }),
            None => default,
        };
        f(&mut value);

        let mut next = data.clone();
        next.insert(key.to_string(), serde_json::to_value(&value)?);
        self.commit(&mut data, next)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        let mut data = self.lock();
        self.commit(&mut data, Map::new())
    }

    /// Memory only changes once the file write succeeded
    fn commit(
        &self,
        data: &mut MutexGuard<'_, Map<String, Value>>,
        next: Map<String, Value>,
    ) -> Result<(), StoreError> {
        self.persist(&next)?;
        **data = next;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Map<String, Value>> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write to a sibling temp file, then rename over the real one
    fn persist(&self, data: &Map<String, Value>) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(data)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

fn load_map(path: &Path) -> Map<String, Value> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Map::new(),
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            return Map::new();
        }
    };

    match serde_json::from_str::<Value>(&contents) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => {
            tracing::warn!("{} is not a JSON object, starting empty", path.display());
            Map::new()
        }
    }
}
