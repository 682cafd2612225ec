//! Viewport tracking across buffer mutations.
//!
//! Offsets are distances from the top of the visible list, in the
//! presentation's units. The tracker never measures rendered geometry: after
//! `k` evictions in held mode it moves the target up by `k * row_height`,
//! where `row_height` is a fixed estimate of one rendered row. This is a known
//! approximation; presentations whose rows are taller or shorter than the
//! estimate will see a small drift, never a jump to a different region.

/// Row height estimate used when none is configured
pub const DEFAULT_ROW_HEIGHT: f64 = 20.0;

/// Abstract scroll command for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollInstruction {
    /// Scroll so the last visible record is in view
    ToTail,
    /// Scroll to this distance from the top of the visible list
    ToOffset(f64),
    /// Leave the scroll position alone
    None,
}

impl ScrollInstruction {
    pub fn is_none(&self) -> bool {
        matches!(self, ScrollInstruction::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    /// Every mutation scrolls to the newest record
    Follow,
    /// The reading position is held across mutations
    Held,
}

/// Snapshot of the tracker's bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub follow_tail: bool,
    /// Offset captured right before the last mutation
    pub saved_offset: f64,
    /// Amount subtracted from `saved_offset` by the last reconciliation
    pub pending_adjustment: f64,
}

/// Kind of change the tracker reconciles against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// Records appended, `evicted` dropped from the front
    Appended { evicted: usize },
    /// Filter replaced; no record was removed, only the projection changed
    FilterChanged,
    /// Buffer bulk-replaced
    Reloaded,
    /// Buffer emptied
    Cleared,
}

/// Decides, per mutation, where the viewer's scroll position goes.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    state: ViewportState,
    row_height: f64,
    /// Position the presentation is at, or will be at once the last issued
    /// instruction lands.
    current_offset: f64,
}

impl ViewportTracker {
    pub fn new(follow_tail: bool, row_height: f64) -> Self {
        Self {
            state: ViewportState {
                follow_tail,
                saved_offset: 0.0,
                pending_adjustment: 0.0,
            },
            row_height: row_height.max(0.0),
            current_offset: 0.0,
        }
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn mode(&self) -> ViewportMode {
        if self.state.follow_tail {
            ViewportMode::Follow
        } else {
            ViewportMode::Held
        }
    }

    pub fn is_following(&self) -> bool {
        self.state.follow_tail
    }

    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    /// Record where the presentation is scrolled to
    pub fn observe_scroll(&mut self, offset: f64) {
        if offset.is_finite() {
            self.current_offset = offset.max(0.0);
        }
    }

    /// Capture the pre-mutation position. Follow mode keeps no bookkeeping.
    pub fn capture(&mut self) {
        if !self.state.follow_tail {
            self.state.saved_offset = self.current_offset;
        }
    }

    /// Compute the post-mutation scroll target.
    ///
    /// Must be preceded by [`capture`](Self::capture) for the same mutation.
    pub fn reconcile(&mut self, mutation: Mutation) -> ScrollInstruction {
        if self.state.follow_tail {
            self.state.pending_adjustment = 0.0;
            return ScrollInstruction::ToTail;
        }

        let target = match mutation {
            Mutation::Appended { evicted } => {
                let adjustment = evicted as f64 * self.row_height;
                self.state.pending_adjustment = adjustment;
                (self.state.saved_offset - adjustment).max(0.0)
            }
            Mutation::FilterChanged => {
                self.state.pending_adjustment = 0.0;
                self.state.saved_offset
            }
            Mutation::Reloaded | Mutation::Cleared => {
                self.state.saved_offset = 0.0;
                self.state.pending_adjustment = 0.0;
                0.0
            }
        };

        self.current_offset = target;
        ScrollInstruction::ToOffset(target)
    }

    /// Explicit user toggle of follow mode.
    ///
    /// Entering follow mode discards the saved offset and scrolls to the tail
    /// immediately. Leaving it holds the current position.
    pub fn set_follow(&mut self, follow: bool) -> ScrollInstruction {
        if follow == self.state.follow_tail {
            return ScrollInstruction::None;
        }

        self.state.follow_tail = follow;
        self.state.pending_adjustment = 0.0;
        if follow {
            self.state.saved_offset = 0.0;
            ScrollInstruction::ToTail
        } else {
            self.state.saved_offset = self.current_offset;
            ScrollInstruction::None
        }
    }

    /// Forget every offset, keeping the mode
    pub fn reset(&mut self) {
        self.state.saved_offset = 0.0;
        self.state.pending_adjustment = 0.0;
        self.current_offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held_at(offset: f64, row_height: f64) -> ViewportTracker {
        let mut tracker = ViewportTracker::new(false, row_height);
        tracker.observe_scroll(offset);
        tracker
    }

    #[test]
    fn test_follow_always_scrolls_to_tail() {
        let mut tracker = ViewportTracker::new(true, 20.0);
        tracker.observe_scroll(340.0);
        tracker.capture();
        assert_eq!(
            tracker.reconcile(Mutation::Appended { evicted: 3 }),
            ScrollInstruction::ToTail
        );
        assert_eq!(tracker.state().saved_offset, 0.0);
        assert_eq!(tracker.mode(), ViewportMode::Follow);
    }

    #[test]
    fn test_held_without_eviction_restores_exactly() {
        let mut tracker = held_at(137.5, 20.0);
        tracker.capture();
        let instruction = tracker.reconcile(Mutation::Appended { evicted: 0 });
        assert_eq!(instruction, ScrollInstruction::ToOffset(137.5));
        assert_eq!(tracker.state().saved_offset, 137.5);
        assert_eq!(tracker.state().pending_adjustment, 0.0);
    }

    #[test]
    fn test_held_with_eviction_adjusts_by_row_height() {
        let mut tracker = held_at(100.0, 20.0);
        tracker.capture();
        let instruction = tracker.reconcile(Mutation::Appended { evicted: 2 });
        assert_eq!(instruction, ScrollInstruction::ToOffset(60.0));
        assert_eq!(tracker.state().pending_adjustment, 40.0);
    }

    #[test]
    fn test_held_adjustment_floors_at_zero() {
        let mut tracker = held_at(30.0, 20.0);
        tracker.capture();
        assert_eq!(
            tracker.reconcile(Mutation::Appended { evicted: 5 }),
            ScrollInstruction::ToOffset(0.0)
        );
    }

    #[test]
    fn test_consecutive_mutations_chain_from_predicted_offset() {
        let mut tracker = held_at(100.0, 20.0);
        tracker.capture();
        tracker.reconcile(Mutation::Appended { evicted: 1 });
        // The presentation has not applied 80 yet; the next capture starts there anyway.
        tracker.capture();
        assert_eq!(
            tracker.reconcile(Mutation::Appended { evicted: 1 }),
            ScrollInstruction::ToOffset(60.0)
        );
    }

    #[test]
    fn test_filter_change_restores_saved_offset() {
        let mut tracker = held_at(240.0, 20.0);
        tracker.capture();
        assert_eq!(
            tracker.reconcile(Mutation::FilterChanged),
            ScrollInstruction::ToOffset(240.0)
        );
    }

    #[test]
    fn test_reload_and_clear_go_to_top() {
        let mut tracker = held_at(240.0, 20.0);
        tracker.capture();
        assert_eq!(
            tracker.reconcile(Mutation::Cleared),
            ScrollInstruction::ToOffset(0.0)
        );
        assert_eq!(tracker.state().saved_offset, 0.0);
    }

    #[test]
    fn test_toggle_to_follow_discards_saved_offset() {
        let mut tracker = held_at(90.0, 20.0);
        tracker.capture();
        assert_eq!(tracker.set_follow(true), ScrollInstruction::ToTail);
        assert_eq!(tracker.state().saved_offset, 0.0);
        assert!(tracker.is_following());
        // Toggling to the mode already active does nothing
        assert_eq!(tracker.set_follow(true), ScrollInstruction::None);
    }

    #[test]
    fn test_toggle_to_held_keeps_current_position() {
        let mut tracker = ViewportTracker::new(true, 20.0);
        tracker.observe_scroll(480.0);
        assert_eq!(tracker.set_follow(false), ScrollInstruction::None);
        assert_eq!(tracker.mode(), ViewportMode::Held);
        assert_eq!(tracker.state().saved_offset, 480.0);
    }

    #[test]
    fn test_observe_scroll_ignores_garbage() {
        let mut tracker = held_at(50.0, 20.0);
        tracker.observe_scroll(f64::NAN);
        assert_eq!(tracker.current_offset(), 50.0);
        tracker.observe_scroll(-10.0);
        assert_eq!(tracker.current_offset(), 0.0);
    }
}
