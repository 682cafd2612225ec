//! Events emitted for the presentation layer.

use crate::model::Record;
use crate::viewport::ScrollInstruction;

/// Summary shown when the buffer holds nothing
pub const EMPTY_SUMMARY: &str = "log is empty";

/// Summary shown right after an explicit clear
pub const CLEARED_SUMMARY: &str = "log cleared";

/// Status line for the given counts.
///
/// `"total: N"` when nothing is filtered out, `"showing: V / total: N"`
/// otherwise, and [`EMPTY_SUMMARY`] for an empty buffer.
pub fn status_text(total_count: usize, visible_count: usize) -> String {
    if total_count == 0 {
        EMPTY_SUMMARY.to_string()
    } else if total_count == visible_count {
        format!("total: {}", total_count)
    } else {
        format!("showing: {} / total: {}", visible_count, total_count)
    }
}

/// New visible state after a mutation.
///
/// The presentation applies `visible_records` right away. `scroll_instruction`
/// tells it which scroll will follow; the scroll itself is delivered as a
/// separate [`ViewEvent::Scroll`] once the presentation reports its layout
/// pass settled.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewUpdate {
    pub visible_records: Vec<Record>,
    pub total_count: usize,
    pub visible_count: usize,
    pub inserted: usize,
    pub evicted: usize,
    pub status_text: String,
    /// Summary of the newest record in the buffer
    pub latest_summary: String,
    pub scroll_instruction: ScrollInstruction,
    /// Increases with every update; scroll reports name the update whose
    /// records they were measured against
    pub generation: u64,
}

/// Everything the consumer sends to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Phase one: the visible set changed
    Updated(ViewUpdate),
    /// Phase two: scroll after the layout of the preceding update settled,
    /// or right away for a follow-mode toggle
    Scroll(ScrollInstruction),
    /// Follow mode changed
    FollowModeChanged(bool),
    /// The session closed; no further events follow
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_unfiltered() {
        assert_eq!(status_text(42, 42), "total: 42");
    }

    #[test]
    fn test_status_text_filtered() {
        assert_eq!(status_text(42, 7), "showing: 7 / total: 42");
        assert_eq!(status_text(3, 0), "showing: 0 / total: 3");
    }

    #[test]
    fn test_status_text_empty() {
        assert_eq!(status_text(0, 0), "log is empty");
    }
}
