use crate::keymap::HINTS;
use crate::state::ViewerState;
use crate::theme::Theme;
use logstream_core::Record;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows reserved below the list: status bar and key hints
const FOOTER_ROWS: u16 = 2;

/// Number of record rows the list shows in a terminal of `area`
pub fn list_height(area: Rect) -> usize {
    // -2 for borders
    area.height.saturating_sub(FOOTER_ROWS + 2) as usize
}

/// Render the entire application UI
pub fn render(state: &ViewerState, theme: &Theme, area: Rect, f: &mut Frame) {
    let [list_area, status_area, hints_area] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_list(state, theme, list_area, f);
    render_status(state, theme, status_area, f);
    render_hints(theme, hints_area, f);
}

fn render_list(state: &ViewerState, theme: &Theme, area: Rect, f: &mut Frame) {
    let (above, below) = state.rows_hidden();
    let title = format!(" {} ", state.source_label);
    let position = format!(" {} above / {} below ", above, below);

    let block = Block::default()
        .title(title)
        .title_bottom(Line::from(position).right_aligned())
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());

    let lines: Vec<Line> = state
        .visible_rows()
        .iter()
        .map(|record| record_line(record, theme))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme.panel_background());

    f.render_widget(paragraph, area);
}

fn record_line<'a>(record: &'a Record, theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(
            record.timestamp().format("%H:%M:%S ").to_string(),
            theme.muted(),
        ),
        Span::styled(format!("[{:<7}] ", record.level().label()), theme.level(record.level())),
    ];
    if !record.component().is_empty() {
        spans.push(Span::styled(
            format!("{}: ", record.component()),
            theme.component(),
        ));
    }
    spans.push(Span::styled(record.text(), theme.text()));
    Line::from(spans)
}

fn render_status(state: &ViewerState, theme: &Theme, area: Rect, f: &mut Frame) {
    let mode = if state.follow_tail { " FOLLOW " } else { " HELD " };
    let level = state
        .min_level
        .as_ref()
        .map(|l| l.label().to_string())
        .unwrap_or_else(|| "ALL".to_string());

    let line = Line::from(vec![
        Span::styled(mode, theme.mode(state.follow_tail)),
        Span::styled(
            format!(
                " {} | level: {} | scope: {} | {}",
                state.status_text, level, state.scope, state.latest_summary
            ),
            theme.status_bar(),
        ),
    ]);

    f.render_widget(Paragraph::new(line).style(theme.status_bar()), area);
}

fn render_hints(theme: &Theme, area: Rect, f: &mut Frame) {
    let spans: Vec<Span> = HINTS
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(format!(" {}", key), theme.hint_key()),
                Span::styled(format!(" {} ", label), theme.muted()),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_height_subtracts_chrome() {
        assert_eq!(list_height(Rect::new(0, 0, 80, 24)), 20);
        assert_eq!(list_height(Rect::new(0, 0, 80, 3)), 0);
    }
}
