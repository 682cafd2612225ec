/// Semantic actions produced by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    JumpToTop,
    JumpToBottom,
    ToggleFollow,
    CycleLevel,
    CycleScope,
    Clear,
    Quit,
}
