//! Theme types for the TUI.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Expand a `ColorTheme` into the runtime `Theme` palette.
//!
//! Invariants:
//! - `ColorTheme` is the persisted representation; `Theme` is never serialized.
//! - Colors are named by meaning (positive/warning/negative/info) rather than hue,
//!   so badge, risk, and map colorings stay consistent across themes.

use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Default,
    Light,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Padrão",
            Self::Light => "Claro",
            Self::HighContrast => "Alto contraste",
            Self::Monochrome => "Monocromático",
        }
    }

    /// Next theme in the cycle bound to the theme toggle key.
    pub fn cycle_next(self) -> Self {
        match self {
            Self::Default => Self::Light,
            Self::Light => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::Default,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Chrome
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub table_header_fg: Color,
    pub nav_active: Color,

    // Semantic styles (badges, thresholds, map markers)
    pub positive: Color,
    pub warning: Color,
    pub negative: Color,
    pub info: Color,
    pub neutral: Color,

    // Charts
    pub chart_bar: Color,
    pub chart_line: Color,
    pub chart_average: Color,
    /// Slice colors for pie/share charts, used in order and repeated.
    pub chart_palette: [Color; 6],
}

impl Theme {
    /// Expand a persisted `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Cyan,
                accent: Color::Yellow,
                highlight_fg: Color::Black,
                highlight_bg: Color::Cyan,
                table_header_fg: Color::Cyan,
                nav_active: Color::LightBlue,
                positive: Color::Green,
                warning: Color::Yellow,
                negative: Color::Red,
                info: Color::LightBlue,
                neutral: Color::Gray,
                chart_bar: Color::Blue,
                chart_line: Color::Cyan,
                chart_average: Color::Red,
                chart_palette: [
                    Color::Blue,
                    Color::Green,
                    Color::Yellow,
                    Color::Red,
                    Color::Magenta,
                    Color::Cyan,
                ],
            },
            ColorTheme::Light => Self {
                text: Color::Black,
                text_dim: Color::DarkGray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,
                highlight_fg: Color::White,
                highlight_bg: Color::Blue,
                table_header_fg: Color::Blue,
                nav_active: Color::Blue,
                positive: Color::Green,
                warning: Color::Indexed(136),
                negative: Color::Red,
                info: Color::Blue,
                neutral: Color::DarkGray,
                chart_bar: Color::Blue,
                chart_line: Color::Indexed(25),
                chart_average: Color::Red,
                chart_palette: [
                    Color::Blue,
                    Color::Green,
                    Color::Indexed(136),
                    Color::Red,
                    Color::Magenta,
                    Color::Indexed(25),
                ],
            },
            ColorTheme::HighContrast => Self {
                text: Color::White,
                text_dim: Color::White,
                border: Color::White,
                title: Color::White,
                accent: Color::Yellow,
                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,
                table_header_fg: Color::Yellow,
                nav_active: Color::Yellow,
                positive: Color::LightGreen,
                warning: Color::LightYellow,
                negative: Color::LightRed,
                info: Color::LightCyan,
                neutral: Color::White,
                chart_bar: Color::LightCyan,
                chart_line: Color::LightGreen,
                chart_average: Color::LightRed,
                chart_palette: [
                    Color::LightCyan,
                    Color::LightGreen,
                    Color::LightYellow,
                    Color::LightRed,
                    Color::LightMagenta,
                    Color::White,
                ],
            },
            ColorTheme::Monochrome => Self {
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Gray,
                title: Color::White,
                accent: Color::White,
                highlight_fg: Color::Black,
                highlight_bg: Color::White,
                table_header_fg: Color::White,
                nav_active: Color::White,
                positive: Color::White,
                warning: Color::Gray,
                negative: Color::White,
                info: Color::Gray,
                neutral: Color::DarkGray,
                chart_bar: Color::White,
                chart_line: Color::White,
                chart_average: Color::Gray,
                chart_palette: [
                    Color::White,
                    Color::Gray,
                    Color::DarkGray,
                    Color::White,
                    Color::Gray,
                    Color::DarkGray,
                ],
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}
