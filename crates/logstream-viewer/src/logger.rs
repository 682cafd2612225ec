//! Diagnostic log of the viewer process
//!
//! simplelog writes `debug-<timestamp>.log` into the working directory for
//! debug builds and into the cache directory for release builds. The line
//! layout is the one `line_parser` reads, so the viewer can tail this file
//! and show itself under the own-process scope.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

const LOG_FILE_PREFIX: &str = "debug";

fn log_dir() -> PathBuf {
    if cfg!(debug_assertions) {
        PathBuf::new()
    } else {
        logstream_config::cache_dir().unwrap_or_default()
    }
}

fn log_file_name(started: DateTime<Local>) -> String {
    format!("{}-{}.log", LOG_FILE_PREFIX, started.format("%Y%m%d-%H%M%S"))
}

/// Level from a `RUST_LOG` value: Debug when unset, Info when unparseable
fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value {
        None => LevelFilter::Debug,
        Some(raw) => raw.trim().parse().unwrap_or(LevelFilter::Info),
    }
}

/// Install the file logger and return the path it writes to
pub fn init() -> Result<PathBuf> {
    let path = log_dir().join(log_file_name(Local::now()));
    let level = level_from_env(std::env::var("RUST_LOG").ok().as_deref());

    let mut builder = ConfigBuilder::new();
    builder.set_time_format_rfc3339();
    // Times stay in UTC when the local offset cannot be determined
    let _ = builder.set_time_offset_to_local();

    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(level, builder.build(), file).context("Failed to install logger")?;

    Ok(path)
}
