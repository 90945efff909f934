//! Pagination controls.
//!
//! "Anterior" is dimmed on the first page and "Próxima" on the last, matching
//! what the `n`/`p` keys will actually do.

use lap_client::Pager;
use lap_client::format::format_int;
use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::ThemeExt;

/// Spans for the pager line; exposed for screens that embed it in a footer.
pub fn pager_line(pager: &Pager, theme: &Theme) -> Line<'static> {
    let style_for = |enabled: bool| {
        if enabled {
            theme.text()
        } else {
            theme.text_dim()
        }
    };
    Line::from(vec![
        Span::styled("◀ Anterior (p)", style_for(pager.prev_enabled())),
        Span::raw("   "),
        Span::styled(
            format!("{} ({} registros)", pager.label(), format_int(pager.total)),
            theme.text(),
        ),
        Span::raw("   "),
        Span::styled("Próxima (n) ▶", style_for(pager.next_enabled())),
    ])
}

/// Render the pager centered in a one-line area. Nothing is drawn without a response.
pub fn render_pager(f: &mut Frame, area: Rect, pager: Option<Pager>, theme: &Theme) {
    let Some(pager) = pager else {
        return;
    };
    f.render_widget(
        Paragraph::new(pager_line(&pager, theme)).alignment(Alignment::Center),
        area,
    );
}
