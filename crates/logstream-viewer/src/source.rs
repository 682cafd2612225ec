//! File Log Source
//!
//! Tails a log file and feeds parsed records to a [`LogProducer`]:
//! - Initial read delivers the last N lines as a bulk load
//! - A polling thread delivers appended lines at regular intervals
//! - Truncation or rotation restarts from the beginning, marked by a
//!   separator record

use crate::line_parser::parse_line;
use logstream_core::{Level, LogProducer, Record};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use thiserror::Error;

/// Errors reading the log file
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Log file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            SourceError::NotFound(path.to_path_buf())
        } else {
            SourceError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Reads a log file with tailing support
pub struct FileLogSource {
    path: PathBuf,
    last_position: u64,
    max_lines: usize,
    /// Tag every record with this component instead of the parsed target
    component_override: Option<String>,
    separator: String,
}

impl FileLogSource {
    /// Create a new log source
    ///
    /// # Arguments
    /// * `path` - Path to the log file
    /// * `max_lines` - Maximum number of lines delivered by the initial read
    /// * `separator` - Component name of the record marking a restart
    pub fn new(path: PathBuf, max_lines: usize, separator: impl Into<String>) -> Self {
        Self {
            path,
            last_position: 0,
            max_lines,
            component_override: None,
            separator: separator.into(),
        }
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component_override = Some(component.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read initial content (last N lines)
    pub fn read_initial(&mut self) -> Result<Vec<Record>, SourceError> {
        self.last_position = 0;
        let mut records = self.read_from_last_position()?;
        let start = records.len().saturating_sub(self.max_lines);
        Ok(records.split_off(start))
    }

    /// Poll for new lines (non-blocking)
    ///
    /// Returns the records of every complete line appended since the last
    /// read. A file that shrank is read again from the start, preceded by a
    /// separator record.
    pub fn poll(&mut self) -> Result<Vec<Record>, SourceError> {
        let current_size = std::fs::metadata(&self.path)
            .map_err(|e| SourceError::io(&self.path, e))?
            .len();

        if current_size == self.last_position {
            return Ok(Vec::new()); // No new content
        }

        let mut records = Vec::new();
        if current_size < self.last_position {
            log::info!(
                "Log file {} shrank, restarting from the beginning",
                self.path.display()
            );
            self.last_position = 0;
            records.push(Record::new(
                Level::Info,
                self.separator.clone(),
                format!("{} restarted", self.path.display()),
            ));
        }

        records.extend(self.read_from_last_position()?);
        Ok(records)
    }

    /// Parse complete lines after `last_position` and advance past them.
    /// A trailing line without newline is left for the next poll.
    fn read_from_last_position(&mut self) -> Result<Vec<Record>, SourceError> {
        let mut file = File::open(&self.path).map_err(|e| SourceError::io(&self.path, e))?;
        file.seek(SeekFrom::Start(self.last_position))
            .map_err(|e| SourceError::io(&self.path, e))?;
        let mut reader = BufReader::new(file);

        let mut records = Vec::new();
        let mut line = String::new();
        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .map_err(|e| SourceError::io(&self.path, e))?;
            if read == 0 || !line.ends_with('\n') {
                break;
            }
            self.last_position += read as u64;
            if line.trim().is_empty() {
                continue;
            }
            records.push(parse_line(&line, self.component_override.as_deref()));
        }

        Ok(records)
    }
}

/// Start the polling thread
///
/// Performs the initial read, delivers it as a bulk load, then polls every
/// `interval` until `stop` is set or the session closes.
pub fn spawn_tail(
    mut source: FileLogSource,
    producer: LogProducer,
    interval: Duration,
    stop: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        match source.read_initial() {
            Ok(records) => {
                log::debug!(
                    "Read {} initial lines from {}",
                    records.len(),
                    source.path().display()
                );
                producer.load_initial(records);
            }
            Err(e) => log::warn!("Failed to read log file: {}", e),
        }

        while !stop.load(Ordering::Relaxed) {
            match source.poll() {
                Ok(records) => {
                    if !producer.deliver_batch(records) {
                        log::debug!("Session closed, stopping tail of {}", source.path().display());
                        break;
                    }
                }
                Err(e) => log::warn!("Failed to poll log file: {}", e),
            }

            thread::sleep(interval);
        }
    })
}
