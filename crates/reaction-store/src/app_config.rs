//! Application configuration
//!
//! Configuration loaded from the .reactions-tui.toml file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .reactions-tui.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Syntect theme name for syntax highlighting
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Username override; wins over environment-based identity
    #[serde(default)]
    pub username: Option<String>,
}

fn default_theme() -> String {
    "base16-ocean.dark".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            username: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }
}
