//! Configuration and file management for logstream-viewer
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Viewer configuration (ViewerConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::ViewerConfig;
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir};
