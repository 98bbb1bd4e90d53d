//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/reactions-tui/`, `~/.local/share/reactions-tui/`
//! - macOS: `~/Library/Application Support/reactions-tui/`
//! - Windows: `%APPDATA%\reactions-tui\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "reactions-tui";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application data directory
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the reaction store file
pub fn reactions_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("reactions.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_exists() {
        let dir = config_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_reactions_path() {
        let path = reactions_path().unwrap();
        assert!(path.ends_with("reactions.json"));
    }
}
