//! Viewer configuration
//!
//! Configuration loaded from .logstream.toml.

use logstream_core::Level;
use serde::{Deserialize, Serialize};

/// Viewer configuration loaded from .logstream.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Maximum number of records kept in memory
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Start in follow mode (scroll to newest record on every arrival)
    #[serde(default = "default_follow_tail")]
    pub follow_tail: bool,

    /// Estimated height of one rendered row, used to shift the held
    /// position when old records are evicted
    #[serde(default = "default_row_height")]
    pub row_height: f64,

    /// Initial minimum level ("debug", "info", "warning", "error"); unset shows all.
    /// Names the viewer does not know are kept and match only themselves.
    #[serde(default)]
    pub min_level: Option<Level>,

    /// Initial component scope ("all", "own-process", "remote-process")
    #[serde(default = "default_component_scope")]
    pub component_scope: String,

    /// Component name the viewer's own log records are tagged with
    #[serde(default = "default_own_component")]
    pub own_component: String,

    /// Component name of separator records
    #[serde(default = "default_separator_marker")]
    pub separator_marker: String,

    /// How often the log file source polls for new lines
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_capacity() -> usize {
    1000
}

fn default_follow_tail() -> bool {
    true
}

fn default_row_height() -> f64 {
    20.0
}

fn default_component_scope() -> String {
    "all".to_string()
}

fn default_own_component() -> String {
    "viewer".to_string()
}

fn default_separator_marker() -> String {
    "---".to_string()
}

fn default_poll_interval_ms() -> u64 {
    100
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            follow_tail: default_follow_tail(),
            row_height: default_row_height(),
            min_level: None,
            component_scope: default_component_scope(),
            own_component: default_own_component(),
            separator_marker: default_separator_marker(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl ViewerConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded viewer config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default viewer config");
        Self::default()
    }

    /// Parse TOML content, then clamp values the viewer cannot work with
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(content)?;
        Ok(config.sanitized())
    }

    fn sanitized(mut self) -> Self {
        if self.capacity == 0 {
            log::warn!("capacity must be at least 1, using {}", default_capacity());
            self.capacity = default_capacity();
        }
        if !self.row_height.is_finite() || self.row_height <= 0.0 {
            log::warn!("row_height must be positive, using {}", default_row_height());
            self.row_height = default_row_height();
        }
        if self.poll_interval_ms == 0 {
            self.poll_interval_ms = default_poll_interval_ms();
        }
        self
    }
}
