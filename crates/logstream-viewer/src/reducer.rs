use crate::actions::UiAction;
use crate::state::ViewerState;
use logstream_core::{Level, ReservedComponents, ScrollInstruction, StreamAction, ViewEvent};

/// Apply an event from the consumer.
///
/// Returns the new state plus the actions to send back: every scroll the
/// viewer performs is reported so the tracker knows the real offset.
pub fn reduce_event(mut state: ViewerState, event: &ViewEvent) -> (ViewerState, Vec<StreamAction>) {
    let mut follow_up = Vec::new();

    match event {
        ViewEvent::Updated(update) => {
            state.records = update.visible_records.clone();
            state.status_text = update.status_text.clone();
            state.latest_summary = update.latest_summary.clone();
            state.generation = update.generation;
            state.layout_pending = true;
        }
        ViewEvent::Scroll(instruction) => {
            let target = match instruction {
                ScrollInstruction::ToTail => Some(state.max_offset()),
                ScrollInstruction::ToOffset(offset) => Some(*offset),
                ScrollInstruction::None => None,
            };
            if let Some(target) = target {
                state.scroll_offset = target;
                state.clamp_offset();
                follow_up.push(state.scroll_report());
            }
        }
        ViewEvent::FollowModeChanged(follow) => {
            state.follow_tail = *follow;
        }
        ViewEvent::Closed => {
            state.running = false;
        }
    }

    (state, follow_up)
}

/// Apply a keyboard action.
pub fn reduce_ui(
    mut state: ViewerState,
    action: &UiAction,
    reserved: &ReservedComponents,
) -> (ViewerState, Vec<StreamAction>) {
    let row = state.row_height;
    let page = state.viewport_rows.max(1) as f64 * row;

    match action {
        UiAction::ScrollDown => scroll_by(state, row),
        UiAction::ScrollUp => scroll_by(state, -row),
        UiAction::PageDown => scroll_by(state, page),
        UiAction::PageUp => scroll_by(state, -page),
        UiAction::JumpToTop => scroll_to(state, 0.0),
        UiAction::JumpToBottom => {
            let bottom = state.max_offset();
            scroll_to(state, bottom)
        }
        UiAction::ToggleFollow => {
            // Report the offset first so a switch to held mode saves it
            let actions = vec![
                state.scroll_report(),
                StreamAction::SetFollowMode(!state.follow_tail),
            ];
            (state, actions)
        }
        UiAction::CycleLevel => {
            state.min_level = Level::cycle(state.min_level.as_ref());
            let action = StreamAction::SetMinLevel(state.min_level.clone());
            (state, vec![action])
        }
        UiAction::CycleScope => {
            state.scope = state.scope.next();
            let action = StreamAction::SetComponentScope(reserved.scope(state.scope));
            (state, vec![action])
        }
        UiAction::Clear => (state, vec![StreamAction::Clear]),
        UiAction::Quit => {
            state.running = false;
            (state, Vec::new())
        }
    }
}

fn scroll_by(state: ViewerState, delta: f64) -> (ViewerState, Vec<StreamAction>) {
    let target = state.scroll_offset + delta;
    scroll_to(state, target)
}

fn scroll_to(mut state: ViewerState, target: f64) -> (ViewerState, Vec<StreamAction>) {
    state.scroll_offset = target;
    state.clamp_offset();
    let report = state.scroll_report();
    (state, vec![report])
}

#[cfg(test)]
mod tests {
    use super::*;
    use logstream_core::{ComponentScope, Record, ViewUpdate};
    use pretty_assertions::assert_eq;

    fn records(count: usize) -> Vec<Record> {
        (0..count)
            .map(|i| Record::new(Level::Info, "t", format!("line {}", i)))
            .collect()
    }

    fn state_with(count: usize) -> ViewerState {
        let mut state = ViewerState::new(20.0, true, "test");
        state.records = records(count);
        state.viewport_rows = 5;
        state
    }

    fn update(count: usize) -> ViewUpdate {
        ViewUpdate {
            visible_records: records(count),
            total_count: count,
            visible_count: count,
            inserted: count,
            evicted: 0,
            status_text: format!("total: {}", count),
            latest_summary: String::new(),
            scroll_instruction: ScrollInstruction::ToTail,
            generation: 4,
        }
    }

    fn scrolled(offset: f64, generation: u64) -> StreamAction {
        StreamAction::ViewportScrolled { offset, generation }
    }

    #[test]
    fn test_update_replaces_records_and_waits_for_layout() {
        let state = ViewerState::new(20.0, true, "test");
        let (state, actions) = reduce_event(state, &ViewEvent::Updated(update(3)));

        assert_eq!(state.records.len(), 3);
        assert_eq!(state.status_text, "total: 3");
        assert!(state.layout_pending);
        assert_eq!(state.generation, 4);
        assert_eq!(state.scroll_offset, 0.0);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_scroll_to_tail_reports_offset() {
        let state = state_with(20);
        let (state, actions) = reduce_event(state, &ViewEvent::Scroll(ScrollInstruction::ToTail));

        assert_eq!(state.scroll_offset, 300.0);
        assert_eq!(actions, vec![scrolled(300.0, 0)]);
    }

    #[test]
    fn test_scroll_to_offset_is_clamped() {
        let state = state_with(10);
        let (state, actions) =
            reduce_event(state, &ViewEvent::Scroll(ScrollInstruction::ToOffset(60.0)));
        assert_eq!(state.scroll_offset, 60.0);
        assert_eq!(actions, vec![scrolled(60.0, 0)]);

        let (state, _) = reduce_event(state, &ViewEvent::Scroll(ScrollInstruction::ToOffset(500.0)));
        assert_eq!(state.scroll_offset, 100.0);
    }

    #[test]
    fn test_scroll_none_does_nothing() {
        let mut state = state_with(10);
        state.scroll_offset = 40.0;
        let (state, actions) = reduce_event(state, &ViewEvent::Scroll(ScrollInstruction::None));
        assert_eq!(state.scroll_offset, 40.0);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_follow_mode_and_close_events() {
        let state = state_with(0);
        let (state, _) = reduce_event(state, &ViewEvent::FollowModeChanged(false));
        assert!(!state.follow_tail);

        let (state, _) = reduce_event(state, &ViewEvent::Closed);
        assert!(!state.running);
    }

    #[test]
    fn test_scroll_keys_stay_in_bounds() {
        let reserved = ReservedComponents::default();
        let state = state_with(10);

        let (state, actions) = reduce_ui(state, &UiAction::ScrollUp, &reserved);
        assert_eq!(state.scroll_offset, 0.0);
        assert_eq!(actions, vec![scrolled(0.0, 0)]);

        let (state, _) = reduce_ui(state, &UiAction::PageDown, &reserved);
        assert_eq!(state.scroll_offset, 100.0);

        let (state, _) = reduce_ui(state, &UiAction::PageDown, &reserved);
        assert_eq!(state.scroll_offset, 100.0);

        let (state, _) = reduce_ui(state, &UiAction::ScrollUp, &reserved);
        assert_eq!(state.scroll_offset, 80.0);

        let (state, _) = reduce_ui(state, &UiAction::JumpToTop, &reserved);
        assert_eq!(state.scroll_offset, 0.0);

        let (state, _) = reduce_ui(state, &UiAction::JumpToBottom, &reserved);
        assert_eq!(state.scroll_offset, 100.0);
    }

    #[test]
    fn test_user_scroll_reports_generation_of_shown_records() {
        let reserved = ReservedComponents::default();
        let mut state = ViewerState::new(20.0, false, "test");
        state.viewport_rows = 5;

        let (state, _) = reduce_event(state, &ViewEvent::Updated(update(20)));
        // Scrolled before the pending restore of that update arrived
        let (_, actions) = reduce_ui(state, &UiAction::ScrollDown, &reserved);
        assert_eq!(actions, vec![scrolled(20.0, 4)]);
    }

    #[test]
    fn test_toggle_follow_reports_offset_first() {
        let reserved = ReservedComponents::default();
        let mut state = state_with(10);
        state.scroll_offset = 40.0;

        let (state, actions) = reduce_ui(state, &UiAction::ToggleFollow, &reserved);
        assert_eq!(
            actions,
            vec![
                scrolled(40.0, 0),
                StreamAction::SetFollowMode(false),
            ]
        );
        // Mode flips only once the consumer confirms it
        assert!(state.follow_tail);
    }

    #[test]
    fn test_cycle_level_wraps_to_unfiltered() {
        let reserved = ReservedComponents::default();
        let mut state = state_with(0);

        let expected = [
            Some(Level::Debug),
            Some(Level::Info),
            Some(Level::Warning),
            Some(Level::Error),
            None,
        ];
        for level in expected {
            let (next, actions) = reduce_ui(state, &UiAction::CycleLevel, &reserved);
            assert_eq!(next.min_level, level);
            assert_eq!(actions, vec![StreamAction::SetMinLevel(level.clone())]);
            state = next;
        }
    }

    #[test]
    fn test_cycle_scope_uses_reserved_names() {
        let reserved = ReservedComponents::default();
        let state = state_with(0);

        let (state, actions) = reduce_ui(state, &UiAction::CycleScope, &reserved);
        assert_eq!(
            actions,
            vec![StreamAction::SetComponentScope(ComponentScope::Exact(
                "viewer".to_string()
            ))]
        );

        let (state, _) = reduce_ui(state, &UiAction::CycleScope, &reserved);
        let (state, actions) = reduce_ui(state, &UiAction::CycleScope, &reserved);
        assert_eq!(
            actions,
            vec![StreamAction::SetComponentScope(ComponentScope::All)]
        );
        assert_eq!(state.scope, logstream_core::ScopeName::All);
    }

    #[test]
    fn test_quit_stops_running() {
        let reserved = ReservedComponents::default();
        let (state, actions) = reduce_ui(state_with(0), &UiAction::Quit, &reserved);
        assert!(!state.running);
        assert!(actions.is_empty());
    }
}
