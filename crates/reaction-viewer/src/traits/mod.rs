//! Extension traits connecting the viewer to its host application.

mod identity_provider;
mod key_value_store;
mod theme_provider;

pub use identity_provider::{IdentityError, IdentityProvider, NoOpIdentityProvider};
pub use key_value_store::{KeyValueStore, MemoryStore, NoOpKeyValueStore, StoreError};
pub use theme_provider::{DefaultTheme, ThemeProvider};
