//! Typed facade over the host's untyped key/value store.

use crate::model::FileReactions;
use crate::traits::KeyValueStore;
use std::sync::Arc;

/// Loads and saves a file's reaction map through the host store.
///
/// The adapter is the only place that knows how reactions are serialized;
/// the rest of the system never touches the host's transport shape. Every
/// `save` overwrites the full stored value for the path; merging happens
/// earlier, in the reaction model.
#[derive(Clone)]
pub struct ReactionStoreAdapter {
    store: Arc<dyn KeyValueStore>,
}

impl ReactionStoreAdapter {
    /// Create an adapter over the host store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Whether the underlying transport can persist anything.
    pub fn is_available(&self) -> bool {
        self.store.is_available()
    }

    /// Load the reaction map stored for `path`.
    ///
    /// A path that was never saved yields an empty map; so do transport
    /// failures and malformed stored values, after a warning. Loading never
    /// fails from the caller's perspective.
    pub async fn load(&self, path: &str) -> FileReactions {
        match self.store.get(path).await {
            Ok(Some(value)) => match serde_json::from_value(value) {
                Ok(reactions) => reactions,
                Err(e) => {
                    log::warn!("Stored reactions for {} are malformed, starting empty: {}", path, e);
                    FileReactions::default()
                }
            },
            Ok(None) => FileReactions::default(),
            Err(e) => {
                log::warn!("Failed to load reactions for {}: {}", path, e);
                FileReactions::default()
            }
        }
    }

    /// Persist the full reaction map for `path`, overwriting the previous
    /// value.
    ///
    /// Fire-and-forget: failures are logged, never surfaced. Two racing
    /// saves for the same path each write the map current at their call
    /// time; the last one to persist wins.
    pub async fn save(&self, path: &str, reactions: &FileReactions) {
        let value = match serde_json::to_value(reactions) {
            Ok(value) => value,
            Err(e) => {
                log::error!("Failed to serialize reactions for {}: {}", path, e);
                return;
            }
        };

        if let Err(e) = self.store.set(path, value).await {
            log::warn!("Failed to persist reactions for {}: {}", path, e);
        }
    }
}
