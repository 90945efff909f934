//! TUI-specific theme helpers and style builders.
//!
//! This module extends `lap_config::Theme` with helpers for building ratatui
//! `Style` objects consistently across the screens, and maps the client's
//! semantic [`BadgeStyle`] onto theme colors.

use lap_client::BadgeStyle;
use lap_config::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Spinner characters for the animated loading indicator.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Get the spinner character for a given animation frame.
///
/// ```
/// use lap_tui::ui::theme::spinner_char;
///
/// assert_eq!(spinner_char(9), spinner_char(1));
/// ```
pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    fn text(&self) -> Style;
    fn text_dim(&self) -> Style;
    /// Accent + bold.
    fn title(&self) -> Style;
    fn border(&self) -> Style;
    fn border_focused(&self) -> Style;
    /// Selected row in tables and lists.
    fn highlight(&self) -> Style;
    fn table_header(&self) -> Style;
    /// Active entry of the navigation bar.
    fn nav_active(&self) -> Style;
    /// Color for a semantic badge style.
    fn badge_color(&self, style: BadgeStyle) -> Color;
    /// Bold text in the badge color.
    fn badge(&self, style: BadgeStyle) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn highlight(&self) -> Style {
        Style::default()
            .fg(self.highlight_fg)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    fn table_header(&self) -> Style {
        Style::default()
            .fg(self.table_header_fg)
            .add_modifier(Modifier::BOLD)
    }

    fn nav_active(&self) -> Style {
        Style::default()
            .fg(self.nav_active)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    fn badge_color(&self, style: BadgeStyle) -> Color {
        match style {
            BadgeStyle::Positive => self.positive,
            BadgeStyle::Warning => self.warning,
            BadgeStyle::Negative => self.negative,
            BadgeStyle::Info => self.info,
            BadgeStyle::Neutral => self.neutral,
        }
    }

    fn badge(&self, style: BadgeStyle) -> Style {
        Style::default()
            .fg(self.badge_color(style))
            .add_modifier(Modifier::BOLD)
    }
}
