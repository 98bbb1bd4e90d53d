//! JSON-file-backed key/value store
//!
//! Implements the viewer's `KeyValueStore` trait on top of a single JSON
//! document: a meta block plus one entry per file path. The document is
//! loaded once at open and rewritten in full on every `set`, matching the
//! adapter's last-call-wins contract. Writes serialize on the document lock,
//! so racing saves can reorder but never interleave in the file.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reaction_viewer::{KeyValueStore, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const STORE_VERSION: u32 = 1;

/// Store file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

impl Default for StoreMeta {
    fn default() -> Self {
        Self {
            last_modified: Utc::now(),
            version: STORE_VERSION,
        }
    }
}

/// The complete store document
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct StoreDocument {
    #[serde(default)]
    meta: StoreMeta,
    /// Stored values, keyed by file path. Opaque to this layer.
    #[serde(default)]
    entries: BTreeMap<String, Value>,
}

/// File-backed key/value store for reaction maps.
pub struct JsonFileStore {
    path: PathBuf,
    document: Mutex<StoreDocument>,
}

impl JsonFileStore {
    /// Open a store at `path`, creating an empty document when the file does
    /// not exist. A malformed file is logged and replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = Self::read_document(&path)?;
        Ok(Self {
            path,
            document: Mutex::new(document),
        })
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.document.lock().unwrap().entries.len()
    }

    /// True if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_document(path: &Path) -> Result<StoreDocument> {
        if !path.exists() {
            log::info!("No reaction store at {:?}, starting empty", path);
            return Ok(StoreDocument::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read reaction store: {:?}", path))?;

        match serde_json::from_str(&content) {
            Ok(document) => Ok(document),
            Err(e) => {
                log::warn!("Reaction store at {:?} is malformed, starting empty: {}", path, e);
                Ok(StoreDocument::default())
            }
        }
    }

    /// Serialize the document and write it out, holding the lock so writes
    /// never interleave.
    fn write_locked(&self, document: &StoreDocument) -> Result<()> {
        let content =
            serde_json::to_string_pretty(document).context("Failed to serialize reaction store")?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write reaction store: {:?}", self.path))?;

        log::debug!("Saved reaction store to {:?}", self.path);
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let document = self.document.lock().unwrap();
        Ok(document.entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut document = self.document.lock().unwrap();
        document.entries.insert(key.to_string(), value);
        document.meta.last_modified = Utc::now();

        self.write_locked(&document)
            .map_err(|e| StoreError::WriteFailed(key.to_string(), e.to_string()))
    }

    fn is_available(&self) -> bool {
        true
    }
}
