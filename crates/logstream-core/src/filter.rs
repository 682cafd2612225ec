//! Filter engine
//!
//! Pure predicates over records. The visible set is always recomputed
//! wholesale from the ring log: eviction can remove the very records an
//! incremental diff would anchor on, and `n` never exceeds the capacity.

use crate::model::{Level, Record};
use std::collections::BTreeSet;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Rank of a level string nobody recognizes
pub const UNKNOWN_LEVEL_RANK: i32 = -1;

/// Numeric severity: DEBUG=0, INFO=1, WARNING=2, ERROR=3, unknown −1.
pub fn level_rank(level: &Level) -> i32 {
    match level {
        Level::Debug => 0,
        Level::Info => 1,
        Level::Warning => 2,
        Level::Error => 3,
        Level::Unknown(_) => UNKNOWN_LEVEL_RANK,
    }
}

/// Which components a view admits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ComponentScope {
    /// Every component
    #[default]
    All,
    /// Only this exact component name
    Exact(String),
    /// Every component except these
    ExcludeSet(BTreeSet<String>),
}

impl ComponentScope {
    pub fn admits(&self, component: &str) -> bool {
        match self {
            ComponentScope::All => true,
            ComponentScope::Exact(name) => name == component,
            ComponentScope::ExcludeSet(names) => !names.contains(component),
        }
    }
}

/// Named scopes a user can pick from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum ScopeName {
    #[default]
    #[strum(serialize = "all")]
    All,
    /// Records produced by the viewer's own process
    #[strum(to_string = "own-process", serialize = "own")]
    OwnProcess,
    /// Everything except the own process and separator markers
    #[strum(to_string = "remote-process", serialize = "remote")]
    RemoteProcess,
}

impl ScopeName {
    /// Parse a scope name; unrecognized or empty input means [`ScopeName::All`]
    pub fn parse_or_all(raw: &str) -> Self {
        ScopeName::from_str(raw.trim()).unwrap_or_default()
    }

    /// Next scope in display order, wrapping around
    pub fn next(self) -> Self {
        ScopeName::iter()
            .cycle()
            .skip_while(|s| *s != self)
            .nth(1)
            .unwrap_or_default()
    }
}

/// Reserved component names the named scopes are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedComponents {
    /// Component name the viewer's own process logs under
    pub own_process: String,
    /// Component name of separator records (e.g. inserted on source restart)
    pub separator: String,
}

impl Default for ReservedComponents {
    fn default() -> Self {
        Self {
            own_process: "viewer".to_string(),
            separator: "---".to_string(),
        }
    }
}

impl ReservedComponents {
    pub fn scope(&self, name: ScopeName) -> ComponentScope {
        match name {
            ScopeName::All => ComponentScope::All,
            ScopeName::OwnProcess => ComponentScope::Exact(self.own_process.clone()),
            ScopeName::RemoteProcess => ComponentScope::ExcludeSet(BTreeSet::from([
                self.own_process.clone(),
                self.separator.clone(),
            ])),
        }
    }

    /// Resolve a free-form scope name, falling back to match-all
    pub fn scope_named(&self, raw: &str) -> ComponentScope {
        self.scope(ScopeName::parse_or_all(raw))
    }
}

/// Filter configuration, replaced wholesale on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    pub min_level: Option<Level>,
    pub component_scope: ComponentScope,
}

impl FilterConfig {
    pub fn new(min_level: Option<Level>, component_scope: ComponentScope) -> Self {
        Self {
            min_level,
            component_scope,
        }
    }

    /// Copy of this configuration with another minimum level
    pub fn with_min_level(&self, min_level: Option<Level>) -> Self {
        Self::new(min_level, self.component_scope.clone())
    }

    /// Copy of this configuration with another component scope
    pub fn with_component_scope(&self, component_scope: ComponentScope) -> Self {
        Self::new(self.min_level.clone(), component_scope)
    }

    pub fn is_match_all(&self) -> bool {
        self.min_level.is_none() && self.component_scope == ComponentScope::All
    }
}

/// Whether `record` passes `config`.
pub fn matches(record: &Record, config: &FilterConfig) -> bool {
    if let Some(min_level) = &config.min_level {
        if level_rank(record.level()) < level_rank(min_level) {
            return false;
        }
    }
    config.component_scope.admits(record.component())
}

/// Visible subset of `records`, arrival order preserved.
pub fn recompute<'a, I>(records: I, config: &FilterConfig) -> Vec<Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| matches(record, config))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rec(level: Level, component: &str, text: &str) -> Record {
        Record::new(level, component, text)
    }

    #[test]
    fn test_level_rank_order() {
        let ranks: Vec<i32> = Level::KNOWN.iter().map(level_rank).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        assert_eq!(level_rank(&Level::parse("FATAL")), -1);
    }

    #[test]
    fn test_min_level_error_scenario() {
        let records = vec![
            rec(Level::Info, "a", "a"),
            rec(Level::Error, "b", "b"),
            rec(Level::Warning, "c", "c"),
        ];
        let config = FilterConfig::new(Some(Level::Error), ComponentScope::All);
        let visible = recompute(&records, &config);
        assert_eq!(visible, vec![records[1].clone()]);
    }

    #[test]
    fn test_min_level_warning_is_monotonic() {
        let records: Vec<Record> = Level::KNOWN
            .iter()
            .cycle()
            .take(20)
            .enumerate()
            .map(|(i, level)| rec(level.clone(), "svc", &i.to_string()))
            .collect();
        let config = FilterConfig::new(Some(Level::Warning), ComponentScope::All);
        let visible = recompute(&records, &config);

        assert!(
            visible
                .iter()
                .all(|r| !matches!(r.level(), Level::Debug | Level::Info))
        );
        let errors_in = records.iter().filter(|r| *r.level() == Level::Error).count();
        let errors_out = visible.iter().filter(|r| *r.level() == Level::Error).count();
        assert_eq!(errors_in, errors_out);
    }

    #[test]
    fn test_unknown_level_excluded_by_any_min_level() {
        let record = rec(Level::parse("NOTICE"), "svc", "x");
        assert!(matches(&record, &FilterConfig::default()));
        assert!(!matches(
            &record,
            &FilterConfig::new(Some(Level::Debug), ComponentScope::All)
        ));
    }

    #[test]
    fn test_recompute_is_pure() {
        let records = vec![
            rec(Level::Debug, "viewer", "1"),
            rec(Level::Error, "remote", "2"),
            rec(Level::Info, "---", "3"),
        ];
        let config = FilterConfig::new(Some(Level::Info), ComponentScope::All);
        let first = recompute(&records, &config);
        let second = recompute(&records, &config);
        assert_eq!(first, second);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_named_scopes() {
        let reserved = ReservedComponents::default();
        let own = reserved.scope(ScopeName::OwnProcess);
        let remote = reserved.scope(ScopeName::RemoteProcess);

        assert!(own.admits("viewer"));
        assert!(!own.admits("node-1"));

        assert!(remote.admits("node-1"));
        assert!(!remote.admits("viewer"));
        assert!(!remote.admits("---"));
    }

    #[test]
    fn test_unrecognized_scope_matches_all() {
        let reserved = ReservedComponents::default();
        assert_eq!(reserved.scope_named(""), ComponentScope::All);
        assert_eq!(reserved.scope_named("bogus"), ComponentScope::All);
        assert_eq!(
            reserved.scope_named("OWN-PROCESS"),
            ComponentScope::Exact("viewer".to_string())
        );
        assert_eq!(
            reserved.scope_named("remote"),
            reserved.scope(ScopeName::RemoteProcess)
        );
    }

    #[test]
    fn test_scope_name_cycles() {
        assert_eq!(ScopeName::All.next(), ScopeName::OwnProcess);
        assert_eq!(ScopeName::OwnProcess.next(), ScopeName::RemoteProcess);
        assert_eq!(ScopeName::RemoteProcess.next(), ScopeName::All);
        assert_eq!(ScopeName::RemoteProcess.to_string(), "remote-process");
    }

    #[test]
    fn test_combined_level_and_scope() {
        let reserved = ReservedComponents::default();
        let config = FilterConfig::new(
            Some(Level::Warning),
            reserved.scope(ScopeName::RemoteProcess),
        );
        let records = vec![
            rec(Level::Error, "viewer", "own error"),
            rec(Level::Error, "node", "remote error"),
            rec(Level::Info, "node", "remote info"),
        ];
        let visible = recompute(&records, &config);
        assert_eq!(visible, vec![records[1].clone()]);
    }
}
