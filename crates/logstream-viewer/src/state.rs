//! Viewer State
//!
//! Presentation-side state. The record list and status text mirror the last
//! view update from the consumer; the scroll offset belongs to the viewer.

use logstream_core::{Level, Record, ScopeName, StreamAction};

/// Viewer state
#[derive(Debug, Clone)]
pub struct ViewerState {
    /// Visible records from the last view update
    pub records: Vec<Record>,
    pub status_text: String,
    pub latest_summary: String,
    pub follow_tail: bool,
    pub min_level: Option<Level>,
    pub scope: ScopeName,
    /// Height of one row in offset units
    pub row_height: f64,
    /// Distance from the top of the list, in offset units
    pub scroll_offset: f64,
    /// Update the records came from; scroll reports are measured against it
    pub generation: u64,
    /// Rows the list area can show (set before every render)
    pub viewport_rows: usize,
    /// An update arrived and its layout pass has not been reported yet
    pub layout_pending: bool,
    /// Where records come from, shown in the title
    pub source_label: String,
    pub running: bool,
}

impl ViewerState {
    pub fn new(row_height: f64, follow_tail: bool, source_label: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            status_text: logstream_core::status_text(0, 0),
            latest_summary: String::new(),
            follow_tail,
            min_level: None,
            scope: ScopeName::All,
            row_height,
            scroll_offset: 0.0,
            generation: 0,
            viewport_rows: 0,
            layout_pending: false,
            source_label: source_label.into(),
            running: true,
        }
    }

    /// Largest offset that still fills the viewport
    pub fn max_offset(&self) -> f64 {
        self.records.len().saturating_sub(self.viewport_rows) as f64 * self.row_height
    }

    /// Report of the current scroll position for the consumer
    pub fn scroll_report(&self) -> StreamAction {
        StreamAction::ViewportScrolled {
            offset: self.scroll_offset,
            generation: self.generation,
        }
    }

    pub fn clamp_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_offset());
    }

    /// Index of the first row on screen
    pub fn first_row(&self) -> usize {
        if self.row_height <= 0.0 {
            return 0;
        }
        (self.scroll_offset / self.row_height).floor() as usize
    }

    /// Records that fit the viewport at the current offset
    pub fn visible_rows(&self) -> &[Record] {
        let start = self.first_row().min(self.records.len());
        let end = (start + self.viewport_rows).min(self.records.len());
        &self.records[start..end]
    }

    /// Rows above and below the viewport
    pub fn rows_hidden(&self) -> (usize, usize) {
        let above = self.first_row().min(self.records.len());
        let below = self
            .records
            .len()
            .saturating_sub(above + self.viewport_rows);
        (above, below)
    }
}
