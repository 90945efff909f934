//! UI screen rendering modules.
//!
//! One module per navigation entry, plus the table and placeholder helpers
//! they share.

pub mod alertas;
pub mod anomalias;
pub mod ceis;
pub mod dashboard;
pub mod fornecedores;
pub mod governanca;
pub mod itens;
pub mod licitacoes;
pub mod municipios;
pub mod relatorios;

use lap_client::{BadgeKind, BadgeStyle, classify_status};
use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::app::state::{Remote, TextInput};
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::{render_error_state, render_loading_state};

/// Draw the loading or error placeholder for a resource without data.
///
/// Returns `true` when something was drawn and the caller should stop.
pub(crate) fn render_fetch_placeholder<T>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    remote: &Remote<T>,
    spinner_frame: u8,
    theme: &Theme,
) -> bool {
    if let Some(error) = &remote.error {
        render_error_state(f, area, title, error, theme);
        return true;
    }
    if remote.data.is_none() {
        let message = if remote.loading {
            "Carregando..."
        } else {
            "Nenhum dado carregado. Pressione 'r' para atualizar."
        };
        render_loading_state(f, area, title, message, spinner_frame, theme);
        return true;
    }
    false
}

pub(crate) fn bordered<'a>(title: impl Into<Line<'a>>, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(title)
        .title_style(theme.title())
}

/// Bordered table with a bold header row and the selection highlight.
pub(crate) fn data_table<'a>(
    headers: &[&'a str],
    rows: Vec<Row<'a>>,
    widths: &[Constraint],
    title: impl Into<Line<'a>>,
    theme: &Theme,
) -> Table<'a> {
    let header = Row::new(headers.iter().map(|h| Cell::from(*h)))
        .style(theme.table_header())
        .height(1);
    Table::new(rows, widths.to_vec())
        .header(header)
        .block(bordered(title, theme))
        .row_highlight_style(theme.highlight())
        .highlight_symbol("> ")
}

/// Cell showing a label colored by the status rule table.
pub(crate) fn badge_cell<'a>(label: &str, kind: BadgeKind, theme: &Theme) -> Cell<'a> {
    let style = classify_status(label, kind);
    Cell::from(label.to_string()).style(theme.badge(style))
}

/// Cell with an explicit semantic style.
pub(crate) fn styled_cell<'a>(text: String, style: BadgeStyle, theme: &Theme) -> Cell<'a> {
    Cell::from(text).style(theme.badge(style))
}

/// One-line filter field: `label: value` with a cursor while focused.
pub(crate) fn input_line<'a>(
    label: &'a str,
    input: &TextInput,
    placeholder: &'a str,
    theme: &Theme,
) -> Line<'a> {
    let value = if input.focused {
        Span::styled(format!("{}█", input.value), theme.border_focused())
    } else if input.value.is_empty() {
        Span::styled(placeholder, theme.text_dim())
    } else {
        Span::styled(input.value.clone(), theme.text())
    };
    Line::from(vec![Span::styled(format!("{label}: "), theme.text_dim()), value])
}

/// Key hint span: `key` highlighted followed by its description.
pub(crate) fn hint<'a>(key: &'a str, description: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::styled(key, theme.border_focused()),
        Span::styled(format!(" {description}  "), Style::default().fg(theme.text_dim)),
    ]
}
