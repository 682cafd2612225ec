//! Log severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a log record.
///
/// Level strings that name none of the four known levels are kept verbatim as
/// [`Level::Unknown`] instead of being rejected, so a malformed producer never
/// loses a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    /// Unrecognized level string, as received.
    Unknown(String),
}

impl Level {
    /// The four known levels, lowest severity first.
    pub const KNOWN: [Level; 4] = [Level::Debug, Level::Info, Level::Warning, Level::Error];

    /// Parse a level string, case-insensitively.
    ///
    /// `WARN` is accepted for [`Level::Warning`] and `TRACE` folds into
    /// [`Level::Debug`], matching what the `log` crate emits.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "TRACE" | "DEBUG" => Level::Debug,
            "INFO" => Level::Info,
            "WARN" | "WARNING" => Level::Warning,
            "ERROR" => Level::Error,
            _ => Level::Unknown(raw.to_string()),
        }
    }

    /// Upper-case label used in status lines and rendered rows
    pub fn label(&self) -> &str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Level::Unknown(_))
    }

    /// Cycle a minimum-level filter: none → DEBUG → INFO → WARNING → ERROR → none
    pub fn cycle(current: Option<&Level>) -> Option<Level> {
        match current {
            None => Some(Level::Debug),
            Some(Level::Debug) => Some(Level::Info),
            Some(Level::Info) => Some(Level::Warning),
            Some(Level::Warning) => Some(Level::Error),
            Some(Level::Error) | Some(Level::Unknown(_)) => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for Level {
    fn from(raw: &str) -> Self {
        Level::parse(raw)
    }
}

impl From<String> for Level {
    fn from(raw: String) -> Self {
        Level::parse(&raw)
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.label().to_string()
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warning,
            log::Level::Error => Level::Error,
        }
    }
}
