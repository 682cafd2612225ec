//! Log stream controller
//!
//! Owns the ring log, the filter configuration and the viewport tracker, and
//! turns every mutation into a [`ViewUpdate`]. Every method here runs on the
//! single consumer that owns the session; see [`crate::session`].

use crate::event::{CLEARED_SUMMARY, EMPTY_SUMMARY, ViewUpdate, status_text};
use crate::filter::{ComponentScope, FilterConfig, recompute};
use crate::model::{Level, Record};
use crate::ring_log::{DEFAULT_CAPACITY, EvictionReport, RingLog};
use crate::viewport::{
    DEFAULT_ROW_HEIGHT, Mutation, ScrollInstruction, ViewportState, ViewportTracker,
};
use std::collections::VecDeque;

/// Mutations kept for translating scroll reports from a lagging presentation
const MAX_TRACKED_SHIFTS: usize = 256;

/// Construction parameters for [`LogStreamController`].
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerOptions {
    pub capacity: usize,
    pub follow_tail: bool,
    pub row_height: f64,
    pub filter: FilterConfig,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            follow_tail: true,
            row_height: DEFAULT_ROW_HEIGHT,
            filter: FilterConfig::default(),
        }
    }
}

/// Orchestrates ring log, filter and viewport for one view session.
#[derive(Debug)]
pub struct LogStreamController {
    ring: RingLog,
    filter: FilterConfig,
    viewport: ViewportTracker,
    visible: Vec<Record>,
    /// Scroll waiting for the presentation's layout pass
    pending_scroll: Option<ScrollInstruction>,
    /// Number of the last emitted update
    generation: u64,
    /// Offset shift of each recent update, oldest first. `None` marks an
    /// update that reset the position.
    shifts: VecDeque<(u64, Option<f64>)>,
}

impl LogStreamController {
    pub fn new(options: ControllerOptions) -> Self {
        log::debug!(
            "Creating log stream controller: capacity={}, follow_tail={}, row_height={}",
            options.capacity,
            options.follow_tail,
            options.row_height
        );
        Self {
            ring: RingLog::new(options.capacity),
            filter: options.filter,
            viewport: ViewportTracker::new(options.follow_tail, options.row_height),
            visible: Vec::new(),
            pending_scroll: None,
            generation: 0,
            shifts: VecDeque::new(),
        }
    }

    /// Apply a batch of new records.
    ///
    /// Returns `None` for an empty batch: nothing changed, nothing to emit.
    pub fn ingest(&mut self, batch: Vec<Record>) -> Option<ViewUpdate> {
        if batch.is_empty() {
            return None;
        }

        self.viewport.capture();
        let report = self.ring.append(batch);
        self.recompute();
        let instruction = self.viewport.reconcile(Mutation::Appended {
            evicted: report.evicted,
        });

        if report.evicted > 0 {
            log::trace!(
                "Ingested {} records, evicted {}",
                report.inserted,
                report.evicted
            );
        }

        let shift = self.viewport.state().pending_adjustment;
        Some(self.emit(report, instruction, Some(shift)))
    }

    /// Replace the buffer with `batch`.
    ///
    /// Only the capacity rule trims the batch. In follow mode the update always
    /// scrolls to the tail.
    pub fn load_initial(&mut self, batch: Vec<Record>) -> ViewUpdate {
        self.viewport.capture();
        self.ring.clear();
        let report = self.ring.append(batch);
        self.recompute();
        let instruction = self.viewport.reconcile(Mutation::Reloaded);

        log::debug!(
            "Loaded {} initial records ({} over capacity)",
            report.inserted,
            report.evicted
        );

        self.emit(report, instruction, None)
    }

    /// Replace the filter configuration wholesale.
    pub fn set_filter(&mut self, config: FilterConfig) -> ViewUpdate {
        self.viewport.capture();
        self.filter = config;
        self.recompute();
        let instruction = self.viewport.reconcile(Mutation::FilterChanged);

        log::debug!(
            "Filter changed: {} of {} records visible",
            self.visible.len(),
            self.ring.len()
        );

        self.emit(EvictionReport::default(), instruction, Some(0.0))
    }

    pub fn set_min_level(&mut self, min_level: Option<Level>) -> ViewUpdate {
        let config = self.filter.with_min_level(min_level);
        self.set_filter(config)
    }

    pub fn set_component_scope(&mut self, scope: ComponentScope) -> ViewUpdate {
        let config = self.filter.with_component_scope(scope);
        self.set_filter(config)
    }

    /// Explicit user toggle of follow mode.
    ///
    /// The returned instruction is not a data mutation and does not wait for
    /// a layout pass; any scroll still pending is superseded.
    pub fn set_follow_mode(&mut self, follow: bool) -> ScrollInstruction {
        let instruction = self.viewport.set_follow(follow);
        if !instruction.is_none() {
            self.pending_scroll = None;
        }
        instruction
    }

    /// Empty everything and reset the saved offset.
    pub fn clear(&mut self) -> ViewUpdate {
        self.ring.clear();
        self.viewport.reset();
        self.recompute();
        let instruction = self.viewport.reconcile(Mutation::Cleared);

        let mut update = self.emit(EvictionReport::default(), instruction, None);
        update.latest_summary = CLEARED_SUMMARY.to_string();
        update
    }

    /// The presentation moved its scroll position, measured against the
    /// records of the latest update.
    pub fn viewport_scrolled(&mut self, offset: f64) {
        self.viewport_scrolled_at(offset, self.generation);
    }

    /// The presentation moved its scroll position, measured against the
    /// records of update `generation`.
    ///
    /// A report against an older update is shifted by the evictions since;
    /// one from before a reload or clear no longer points anywhere and is
    /// dropped. An accepted report is where the reader is, so it also
    /// replaces the target of a pending restore.
    pub fn viewport_scrolled_at(&mut self, offset: f64, generation: u64) {
        let Some(offset) = self.translate_offset(offset, generation) else {
            log::trace!(
                "Dropping scroll report {} from update {} (now at {})",
                offset,
                generation,
                self.generation
            );
            return;
        };

        self.viewport.observe_scroll(offset);
        if let Some(ScrollInstruction::ToOffset(_)) = self.pending_scroll {
            self.pending_scroll = Some(ScrollInstruction::ToOffset(
                self.viewport.current_offset(),
            ));
        }

        // The presentation has seen `generation`; older shifts are done
        while self.shifts.front().is_some_and(|(g, _)| *g <= generation) {
            self.shifts.pop_front();
        }
    }

    /// Second phase: the presentation finished laying out the last update.
    ///
    /// Hands out the pending scroll exactly once.
    pub fn layout_settled(&mut self) -> Option<ScrollInstruction> {
        self.pending_scroll.take()
    }

    pub fn visible(&self) -> &[Record] {
        &self.visible
    }

    pub fn ring(&self) -> &RingLog {
        &self.ring
    }

    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    pub fn viewport_state(&self) -> ViewportState {
        self.viewport.state()
    }

    pub fn is_following(&self) -> bool {
        self.viewport.is_following()
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }

    /// Number of the last emitted update
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn translate_offset(&self, offset: f64, generation: u64) -> Option<f64> {
        if !offset.is_finite() || generation > self.generation {
            return None;
        }
        if generation == self.generation {
            return Some(offset);
        }

        // Every update after `generation` must still be tracked
        let oldest = self.shifts.front().map(|(g, _)| *g)?;
        if oldest > generation + 1 {
            return None;
        }

        self.shifts
            .iter()
            .filter(|(g, _)| *g > generation)
            .try_fold(offset, |acc, (_, shift)| shift.map(|s| (acc - s).max(0.0)))
    }

    fn recompute(&mut self) {
        self.visible = recompute(self.ring.snapshot(), &self.filter);
    }

    fn emit(
        &mut self,
        report: EvictionReport,
        instruction: ScrollInstruction,
        shift: Option<f64>,
    ) -> ViewUpdate {
        self.generation += 1;
        self.shifts.push_back((self.generation, shift));
        if self.shifts.len() > MAX_TRACKED_SHIFTS {
            self.shifts.pop_front();
        }

        self.pending_scroll = if instruction.is_none() {
            None
        } else {
            Some(instruction)
        };

        let total_count = self.ring.len();
        let visible_count = self.visible.len();
        let latest_summary = self
            .ring
            .latest()
            .map(Record::summary)
            .unwrap_or_else(|| EMPTY_SUMMARY.to_string());

        ViewUpdate {
            visible_records: self.visible.clone(),
            total_count,
            visible_count,
            inserted: report.inserted,
            evicted: report.evicted,
            status_text: status_text(total_count, visible_count),
            latest_summary,
            scroll_instruction: instruction,
            generation: self.generation,
        }
    }
}
