use logstream_core::Level;
use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Log level colors
    pub level_debug: Color,
    pub level_info: Color,
    pub level_warning: Color,
    pub level_error: Color,
    pub level_unknown: Color,

    // Mode indicator colors
    pub mode_follow: Color,
    pub mode_held: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c800,

            // Text
            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,

            // Accents
            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,

            // Levels
            level_debug: tailwind::SLATE.c500,
            level_info: tailwind::BLUE.c400,
            level_warning: tailwind::AMBER.c400,
            level_error: tailwind::RED.c500,
            level_unknown: tailwind::PURPLE.c400,

            // Modes
            mode_follow: tailwind::EMERALD.c400,
            mode_held: tailwind::AMBER.c400,
        }
    }

    pub fn level(&self, level: &Level) -> Style {
        let color = match level {
            Level::Debug => self.level_debug,
            Level::Info => self.level_info,
            Level::Warning => self.level_warning,
            Level::Error => self.level_error,
            Level::Unknown(_) => self.level_unknown,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn component(&self) -> Style {
        Style::default().fg(self.accent_secondary)
    }

    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.accent_secondary)
    }

    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_primary)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.bg_secondary)
    }

    pub fn mode(&self, following: bool) -> Style {
        let color = if following {
            self.mode_follow
        } else {
            self.mode_held
        };
        Style::default()
            .fg(color)
            .bg(self.bg_secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_key(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }
}
