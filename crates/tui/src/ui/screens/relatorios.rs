//! Relatórios screen: generated reports with status and download link.

use lap_client::format::format_opt_date;
use lap_client::{BadgeKind, Page, Relatorio};
use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Cell, Row, TableState},
};

use crate::app::state::Remote;
use crate::ui::screens::{badge_cell, data_table, render_fetch_placeholder};
use crate::ui::widgets::render_empty_state;

const TITLE: &str = "Relatórios";

pub struct RelatoriosRenderConfig<'a> {
    pub data: &'a Remote<Page<Relatorio>>,
    pub table: &'a mut TableState,
    pub spinner_frame: u8,
    pub theme: &'a Theme,
}

pub fn render_relatorios(f: &mut Frame, area: Rect, config: RelatoriosRenderConfig) {
    let RelatoriosRenderConfig {
        data,
        table,
        spinner_frame,
        theme,
    } = config;

    if render_fetch_placeholder(f, area, TITLE, data, spinner_frame, theme) {
        return;
    }
    let items = data.data.as_ref().map(|p| p.items.as_slice()).unwrap_or(&[]);
    if items.is_empty() {
        render_empty_state(
            f,
            area,
            TITLE,
            "Nenhum relatório gerado. Pressione 'g' para gerar.",
            theme,
        );
        return;
    }

    let rows: Vec<Row> = items
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.tipo.clone()),
                Cell::from(r.formato.to_uppercase()),
                badge_cell(&r.status, BadgeKind::Status, theme),
                Cell::from(r.filename.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(format_opt_date(r.created_at.as_deref())),
                Cell::from(r.download_url.clone().unwrap_or_else(|| "-".to_string())),
            ])
        })
        .collect();
    let table_widget = data_table(
        &["Tipo", "Formato", "Status", "Arquivo", "Criado em", "Download"],
        rows,
        &[
            Constraint::Length(14),
            Constraint::Length(7),
            Constraint::Length(11),
            Constraint::Min(20),
            Constraint::Length(11),
            Constraint::Min(24),
        ],
        TITLE,
        theme,
    );
    f.render_stateful_widget(table_widget, area, table);
}
