//! Toast notifications for transient feedback.
//!
//! Toasts stack in the bottom-right corner above the footer and expire after
//! a level-dependent TTL. Blocking errors use the error popup instead.

use std::time::{Duration, Instant};

use lap_config::Theme;
use lap_config::constants::DEFAULT_TOAST_SECS;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{FOOTER_HEIGHT, HEADER_HEIGHT};

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "AVISO",
            Self::Error => "ERRO",
        }
    }

    /// Returns the TTL for this level. Errors stay twice as long.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success | Self::Warning => Duration::from_secs(DEFAULT_TOAST_SECS),
            Self::Error => Duration::from_secs(DEFAULT_TOAST_SECS * 2),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    /// Returns true if this toast has expired at `now`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.ttl
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }
}

/// Maximum number of toasts displayed at once.
pub const MAX_TOASTS: usize = 5;

const TOAST_HEIGHT: u16 = 3;
const TOAST_WIDTH: u16 = 56;

/// Renders the most recent non-expired toasts in the bottom-right corner.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let active: Vec<&Toast> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }
    let skip = active.len().saturating_sub(MAX_TOASTS);
    let active = &active[skip..];

    let area = f.area();
    let total_height = active.len() as u16 * TOAST_HEIGHT;
    if area.height < HEADER_HEIGHT + FOOTER_HEIGHT + total_height + 1
        || area.width < TOAST_WIDTH + 2
    {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(TOAST_WIDTH + 2),
        y: area.height.saturating_sub(FOOTER_HEIGHT + total_height),
        width: TOAST_WIDTH,
        height: total_height,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            std::iter::repeat_n(Constraint::Length(TOAST_HEIGHT), active.len())
                .collect::<Vec<_>>(),
        )
        .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, theme);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let color = match toast.level {
        ToastLevel::Info => theme.info,
        ToastLevel::Success => theme.positive,
        ToastLevel::Warning => theme.warning,
        ToastLevel::Error => theme.negative,
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", toast.level.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(toast.message.as_str(), Style::default().fg(theme.text)),
    ]);

    let paragraph = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(ratatui::widgets::Clear, area);
    f.render_widget(paragraph, area);
}
