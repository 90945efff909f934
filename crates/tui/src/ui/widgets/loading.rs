//! Loading state widget with an animated spinner.

use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::{ThemeExt, spinner_char};

/// Render a bordered "loading" placeholder.
///
/// ```rust,ignore
/// render_loading_state(f, area, "Dashboard", "Carregando indicadores...", spinner_frame, theme);
/// ```
pub fn render_loading_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    spinner_frame: u8,
    theme: &Theme,
) {
    let spinner = spinner_char(spinner_frame);
    let loading_widget = Paragraph::new(format!("{spinner} {message}"))
        .style(theme.text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title(title)
                .title_style(theme.title()),
        )
        .alignment(Alignment::Center);
    f.render_widget(loading_widget, area);
}
