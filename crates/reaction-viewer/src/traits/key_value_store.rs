//! Trait for the host's key/value persistence transport.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

/// Errors that can occur in the key/value transport.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading a key failed.
    #[error("Failed to read key {0:?}: {1}")]
    ReadFailed(String, String),

    /// Writing a key failed.
    #[error("Failed to write key {0:?}: {1}")]
    WriteFailed(String, String),

    /// The store is not available.
    #[error("Key/value store unavailable: {0}")]
    Unavailable(String),
}

/// The host's key/value store, keyed by file path.
///
/// Values are host-serialized JSON and opaque to the transport: `set` fully
/// overwrites whatever was stored for the key, and merging (if any) happens
/// in the reaction model before a value reaches the store.
///
/// # Example
///
/// ```ignore
/// struct BlockHostStore {
///     bridge: HostBridge,
/// }
///
/// #[async_trait]
/// impl KeyValueStore for BlockHostStore {
///     async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
///         self.bridge
///             .store_get(key)
///             .await
///             .map_err(|e| StoreError::ReadFailed(key.to_string(), e.to_string()))
///     }
///
///     async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
///         self.bridge
///             .store_set(key, value)
///             .await
///             .map_err(|e| StoreError::WriteFailed(key.to_string(), e.to_string()))
///     }
///
///     fn is_available(&self) -> bool {
///         true
///     }
/// }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the stored value for `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored under the key; that
    /// is a valid state, not an error.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Overwrite the stored value for `key`.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Check if the store is available.
    fn is_available(&self) -> bool;
}

/// A no-op store for read-only embeddings without persistence.
pub struct NoOpKeyValueStore;

#[async_trait]
impl KeyValueStore for NoOpKeyValueStore {
    async fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
        Err(StoreError::Unavailable(
            "Reaction persistence is disabled".to_string(),
        ))
    }

    async fn set(&self, _key: &str, _value: Value) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(
            "Reaction persistence is disabled".to_string(),
        ))
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// In-memory store, used when the host provides no transport and by tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("src/lib.rs").await.unwrap(), None);

        let value = serde_json::json!({"3": {"👍": ["alice"]}});
        store.set("src/lib.rs", value.clone()).await.unwrap();
        assert_eq!(store.get("src/lib.rs").await.unwrap(), Some(value));
    }

    #[tokio::test]
    async fn test_memory_store_set_overwrites() {
        let store = MemoryStore::new();
        store
            .set("a.rs", serde_json::json!({"1": {"👍": ["alice"]}}))
            .await
            .unwrap();
        store.set("a.rs", serde_json::json!({})).await.unwrap();

        assert_eq!(store.get("a.rs").await.unwrap(), Some(serde_json::json!({})));
    }

    #[tokio::test]
    async fn test_noop_store_is_unavailable() {
        let store = NoOpKeyValueStore;
        assert!(!store.is_available());
        assert!(store.get("any").await.is_err());
        assert!(store.set("any", Value::Null).await.is_err());
    }
}
