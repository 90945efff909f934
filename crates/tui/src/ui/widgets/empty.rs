//! Empty and error state widgets.
//!
//! Every screen shows one of these instead of a table when there is nothing
//! to display, so the user always sees why and how to recover.

use lap_client::BadgeStyle;
use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::theme::ThemeExt;

/// Render a bordered placeholder with a centered message.
///
/// ```rust,ignore
/// render_empty_state(f, area, "Licitações", "Nenhuma licitação encontrada.", theme);
/// ```
pub fn render_empty_state(f: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let placeholder = Paragraph::new(message)
        .style(theme.text_dim())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title)
                .title_style(theme.title()),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(placeholder, area);
}

/// Render a failed read: the error message plus the refresh hint.
pub fn render_error_state(f: &mut Frame, area: Rect, title: &str, error: &str, theme: &Theme) {
    let lines = vec![
        Line::styled(
            format!("Erro ao carregar dados: {error}"),
            theme.badge(BadgeStyle::Negative),
        ),
        Line::from(""),
        Line::styled("Pressione 'r' para tentar novamente.", theme.text_dim()),
    ];
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title)
                .title_style(theme.title()),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
