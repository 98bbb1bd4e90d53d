//! Configuration and reaction persistence for reactions-tui
//!
//! This crate provides:
//! - File path utilities for config and data files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - A JSON-file-backed implementation of the viewer's key/value store

pub mod app_config;
pub mod config_file;
pub mod json_store;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use json_store::{JsonFileStore, StoreMeta};
pub use paths::{config_dir, data_dir, reactions_path};
