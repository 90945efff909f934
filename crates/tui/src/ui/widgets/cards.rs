//! KPI cards.

use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::ThemeExt;

/// Render a bordered card: label as title, value in bold, optional caption below.
pub fn render_stat_card(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    caption: Option<(&str, Color)>,
    theme: &Theme,
) {
    let mut lines = vec![Line::styled(
        value.to_string(),
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some((caption, color)) = caption {
        lines.push(Line::styled(caption.to_string(), Style::default().fg(color)));
    }

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(label)
                .title_style(theme.text_dim()),
        );
    f.render_widget(card, area);
}
