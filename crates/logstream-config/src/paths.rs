//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/logstream-viewer/`, `~/.cache/logstream-viewer/`
//! - macOS: `~/Library/Application Support/logstream-viewer/`, `~/Library/Caches/logstream-viewer/`
//! - Windows: `%APPDATA%\logstream-viewer\`, `%LOCALAPPDATA%\logstream-viewer\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "logstream-viewer";

/// Get the application config directory
/// Returns ~/.config/logstream-viewer/ on Linux
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application cache directory, creating it if needed
/// Returns ~/.cache/logstream-viewer/ on Linux
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to the config file in the config directory
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
