//! Licitações screen: search field, paginated notices table and pager.

use lap_client::format::{format_brl, format_opt_date};
use lap_client::{BadgeKind, Licitacao};
use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Cell, Paragraph, Row},
};

use crate::app::state::{PagedList, TextInput};
use crate::ui::screens::{
    badge_cell, bordered, data_table, input_line, render_fetch_placeholder,
};
use crate::ui::widgets::{render_empty_state, render_pager};

const TITLE: &str = "Licitações";

pub struct LicitacoesRenderConfig<'a> {
    pub list: &'a mut PagedList<Licitacao>,
    pub search: &'a TextInput,
    pub spinner_frame: u8,
    pub theme: &'a Theme,
}

pub fn render_licitacoes(f: &mut Frame, area: Rect, config: LicitacoesRenderConfig) {
    let LicitacoesRenderConfig {
        list,
        search,
        spinner_frame,
        theme,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let search_box = Paragraph::new(input_line(
        "Buscar",
        search,
        "pressione / para buscar por objeto ou número",
        theme,
    ))
    .block(bordered("Filtro", theme));
    f.render_widget(search_box, chunks[0]);

    if render_fetch_placeholder(f, chunks[1], TITLE, &list.fetch.remote, spinner_frame, theme) {
        return;
    }
    if list.items().is_empty() {
        render_empty_state(
            f,
            chunks[1],
            TITLE,
            "Nenhuma licitação encontrada.",
            theme,
        );
        render_pager(f, chunks[2], list.pager(), theme);
        return;
    }

    let rows: Vec<Row> = list
        .items()
        .iter()
        .map(|l| {
            Row::new(vec![
                Cell::from(l.numero_compra.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(l.objeto_compra.clone().unwrap_or_default()),
                Cell::from(l.modalidade_nome.clone().unwrap_or_default()),
                badge_cell(l.situacao(), BadgeKind::Status, theme),
                Cell::from(format_brl(l.valor_total_estimado)),
                Cell::from(format_opt_date(l.data_publicacao_pncp.as_deref())),
            ])
        })
        .collect();

    let title = match list.query.filter("search") {
        Some(term) => format!("{TITLE} - busca: \"{term}\""),
        None => TITLE.to_string(),
    };
    let table = data_table(
        &[
            "Número",
            "Objeto",
            "Modalidade",
            "Situação",
            "Valor Estimado",
            "Publicação",
        ],
        rows,
        &[
            Constraint::Length(12),
            Constraint::Min(24),
            Constraint::Length(18),
            Constraint::Length(16),
            Constraint::Length(18),
            Constraint::Length(11),
        ],
        title,
        theme,
    );
    let pager = list.pager();
    f.render_stateful_widget(table, chunks[1], &mut list.table);
    render_pager(f, chunks[2], pager, theme);
}
