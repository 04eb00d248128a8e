use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::Lookup;

/// `<platform data dir>/ceviri`, or `./.ceviri` when the platform has none
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("ceviri"))
        .unwrap_or_else(|| PathBuf::from(".ceviri"))
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    pub(crate) fn from_lookup(lookup: &Lookup<'_>) -> Self {
        let data_dir = lookup("CEVIRI_DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        Self { data_dir }
    }

    /// File holding every persisted key
    pub fn storage_file(&self) -> PathBuf {
        self.data_dir.join("storage.json")
    }
}
