//! Log line parsing
//!
//! Turns text lines in the simplelog layout into records:
//!
//! ```text
//! 2024-05-01T12:04:33.120+02:00 [INFO] (3) node::sync: peer connected
//! 12:04:33 [ WARN] slow response
//! ```
//!
//! Lines that do not match still become records, with an unknown level and
//! the raw line as text, so the filter engine decides what to show.

use chrono::{DateTime, Local, NaiveTime};
use logstream_core::{Level, Record};
use regex::Regex;
use std::sync::OnceLock;

fn line_regex() -> &'static Regex {
    static LINE_REGEX: OnceLock<Regex> = OnceLock::new();

    LINE_REGEX.get_or_init(|| {
        // timestamp [LEVEL] (thread)? target:? message
        Regex::new(
            r"^(?P<ts>\S+)\s+\[\s*(?P<level>[A-Za-z]+)\s*\]\s+(?:\((?P<thread>[^)]*)\)\s+)?(?:(?P<component>[A-Za-z0-9_:.\-]+):\s)?(?P<text>.*)$",
        )
        .unwrap()
    })
}

/// Parse one line.
///
/// `component_override` replaces whatever component the line names; the
/// original target is kept in front of the text.
pub fn parse_line(line: &str, component_override: Option<&str>) -> Record {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(captures) = line_regex().captures(line) else {
        return Record::new(
            Level::parse(""),
            component_override.unwrap_or_default(),
            line,
        );
    };

    let timestamp = captures
        .name("ts")
        .and_then(|m| parse_timestamp(m.as_str()))
        .unwrap_or_else(Local::now);
    let level = captures
        .name("level")
        .map(|m| Level::parse(m.as_str()))
        .unwrap_or_else(|| Level::parse(""));
    let target = captures.name("component").map(|m| m.as_str()).unwrap_or("");
    let text = captures.name("text").map(|m| m.as_str()).unwrap_or("");

    match component_override {
        Some(component) if !target.is_empty() => Record::with_timestamp(
            timestamp,
            level,
            component,
            format!("{}: {}", target, text),
        ),
        Some(component) => Record::with_timestamp(timestamp, level, component, text),
        None => Record::with_timestamp(timestamp, level, target, text),
    }
}

/// Accepts RFC 3339 timestamps and bare `HH:MM:SS` times (taken as today)
fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Local));
    }

    let time = NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S%.f"))
        .ok()?;
    Local::now()
        .date_naive()
        .and_time(time)
        .and_local_timezone(Local)
        .single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_full_line() {
        let record = parse_line(
            "2024-05-01T12:04:33.120+00:00 [INFO] (3) node::sync: peer connected",
            None,
        );
        assert_eq!(*record.level(), Level::Info);
        assert_eq!(record.component(), "node::sync");
        assert_eq!(record.text(), "peer connected");
        assert_eq!(
            record.timestamp().to_utc().to_rfc3339(),
            "2024-05-01T12:04:33.120+00:00"
        );
    }

    #[test]
    fn test_parse_padded_level_without_target() {
        let record = parse_line("12:04:33 [ WARN] slow response", None);
        assert_eq!(*record.level(), Level::Warning);
        assert_eq!(record.component(), "");
        assert_eq!(record.text(), "slow response");
        assert_eq!(record.timestamp().hour(), 12);
    }

    #[test]
    fn test_parse_unknown_level() {
        let record = parse_line("12:00:00 [NOTICE] api: hello", None);
        assert_eq!(*record.level(), Level::Unknown("NOTICE".to_string()));
        assert_eq!(record.component(), "api");
    }

    #[test]
    fn test_unmatched_line_keeps_raw_text() {
        let record = parse_line("    at frame 3 in main.rs\n", None);
        assert!(!record.level().is_known());
        assert_eq!(record.text(), "    at frame 3 in main.rs");
    }

    #[test]
    fn test_component_override_keeps_target_in_text() {
        let record = parse_line(
            "2024-05-01T12:04:33+00:00 [DEBUG] logstream_core::worker: Action: Clear",
            Some("viewer"),
        );
        assert_eq!(record.component(), "viewer");
        assert_eq!(record.text(), "logstream_core::worker: Action: Clear");
        assert_eq!(*record.level(), Level::Debug);
    }
}
