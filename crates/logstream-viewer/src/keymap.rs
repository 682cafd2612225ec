use crate::actions::UiAction;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key hints shown in the footer
pub const HINTS: [(&str, &str); 8] = [
    ("j/k", "scroll"),
    ("PgUp/PgDn", "page"),
    ("g/G", "top/bottom"),
    ("f", "follow"),
    ("l", "level"),
    ("s", "scope"),
    ("c", "clear"),
    ("q", "quit"),
];

/// Convert a key press to a semantic action
pub fn map_key(key: &KeyEvent) -> Option<UiAction> {
    let plain = key.modifiers == KeyModifiers::NONE;
    match key.code {
        KeyCode::Char('q') if plain => Some(UiAction::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(UiAction::Quit),
        KeyCode::Esc => Some(UiAction::Quit),

        // Vim navigation
        KeyCode::Char('j') if plain => Some(UiAction::ScrollDown),
        KeyCode::Down => Some(UiAction::ScrollDown),
        KeyCode::Char('k') if plain => Some(UiAction::ScrollUp),
        KeyCode::Up => Some(UiAction::ScrollUp),
        KeyCode::PageDown => Some(UiAction::PageDown),
        KeyCode::PageUp => Some(UiAction::PageUp),
        KeyCode::Char('g') if plain => Some(UiAction::JumpToTop),
        KeyCode::Home => Some(UiAction::JumpToTop),
        KeyCode::Char('G') => Some(UiAction::JumpToBottom),
        KeyCode::End => Some(UiAction::JumpToBottom),

        KeyCode::Char('f') if plain => Some(UiAction::ToggleFollow),
        KeyCode::Char('l') if plain => Some(UiAction::CycleLevel),
        KeyCode::Char('s') if plain => Some(UiAction::CycleScope),
        KeyCode::Char('c') if plain => Some(UiAction::Clear),
        _ => None,
    }
}
