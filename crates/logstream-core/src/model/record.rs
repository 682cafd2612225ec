//! Log record entity.

use super::Level;
use chrono::{DateTime, Local};

/// A single immutable log entry.
///
/// Records are ordered strictly by arrival. The timestamp is informational and
/// never used for reordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    timestamp: DateTime<Local>,
    level: Level,
    component: String,
    text: String,
}

impl Record {
    /// Create a record stamped with the current local time
    pub fn new(level: Level, component: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_timestamp(Local::now(), level, component, text)
    }

    pub fn with_timestamp(
        timestamp: DateTime<Local>,
        level: Level,
        component: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            level,
            component: component.into(),
            text: text.into(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// One-line summary, e.g. `12:04:33 [INFO] worker: started`
    pub fn summary(&self) -> String {
        let time = self.timestamp.format("%H:%M:%S");
        if self.component.is_empty() {
            format!("{} [{}] {}", time, self.level, self.text)
        } else {
            format!("{} [{}] {}: {}", time, self.level, self.component, self.text)
        }
    }
}
