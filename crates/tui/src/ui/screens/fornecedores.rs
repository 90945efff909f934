//! Fornecedores screen: stats cards, porte pie, top-10 bar chart and table.
//!
//! Every figure is computed over the porte-filtered list.

use lap_client::charts::{porte_distribution, top_fornecedores};
use lap_client::format::{format_brl, format_int, format_percent};
use lap_client::models::{FornecedorStats, Porte};
use lap_client::{BadgeStyle, Fornecedor, Page};
use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Cell, Row, TableState},
};

use crate::app::state::Remote;
use crate::ui::screens::{data_table, render_fetch_placeholder, styled_cell};
use crate::ui::widgets::charts::{BarChartConfig, render_bar_chart, render_pie_chart};
use crate::ui::widgets::{render_empty_state, render_stat_card};

const TITLE: &str = "Fornecedores";

pub struct FornecedoresRenderConfig<'a> {
    pub data: &'a Remote<Page<Fornecedor>>,
    pub visible: Vec<Fornecedor>,
    pub porte: Option<Porte>,
    pub table: &'a mut TableState,
    pub spinner_frame: u8,
    pub theme: &'a Theme,
}

/// Compact money label for bars (`R$ 1,2 mi`).
fn compact_brl(value: f64) -> String {
    let (scaled, suffix) = if value >= 1_000_000.0 {
        (value / 1_000_000.0, " mi")
    } else if value >= 1_000.0 {
        (value / 1_000.0, " mil")
    } else {
        (value, "")
    };
    format!("R$ {scaled:.1}{suffix}").replace('.', ",")
}

pub fn render_fornecedores(f: &mut Frame, area: Rect, config: FornecedoresRenderConfig) {
    let FornecedoresRenderConfig {
        data,
        visible,
        porte,
        table,
        spinner_frame,
        theme,
    } = config;

    if render_fetch_placeholder(f, area, TITLE, data, spinner_frame, theme) {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(12),
            Constraint::Min(4),
        ])
        .split(area);

    let stats = FornecedorStats::from_fornecedores(&visible);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[0]);
    let filtro = format!("porte: {}", porte.map(Porte::as_str).unwrap_or("todos"));
    render_stat_card(
        f,
        cards[0],
        "Total de Fornecedores",
        &format_int(stats.total as u64),
        Some((&filtro, theme.text_dim)),
        theme,
    );
    render_stat_card(
        f,
        cards[1],
        "Valor Total Ganho",
        &format_brl(stats.valor_total),
        None,
        theme,
    );
    render_stat_card(
        f,
        cards[2],
        "Participação ME/EPP",
        &format_percent(stats.percentual_meepp),
        None,
        theme,
    );

    if visible.is_empty() {
        render_empty_state(
            f,
            chunks[1].union(chunks[2]),
            TITLE,
            "Nenhum fornecedor para o filtro selecionado. Pressione 'f' para alternar o porte.",
            theme,
        );
        return;
    }

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);
    render_pie_chart(
        f,
        charts[0],
        "Distribuição por Porte",
        &porte_distribution(&visible),
        theme,
    );
    render_bar_chart(
        f,
        charts[1],
        BarChartConfig {
            title: "Top 10 por Valor Ganho",
            points: &top_fornecedores(&visible),
            color: theme.chart_bar,
            horizontal: true,
            value_label: compact_brl,
        },
        theme,
    );

    let rows: Vec<Row> = visible
        .iter()
        .map(|fornecedor| {
            let situacao = if fornecedor.impedida {
                styled_cell("Impedida".to_string(), BadgeStyle::Negative, theme)
            } else {
                styled_cell("Regular".to_string(), BadgeStyle::Positive, theme)
            };
            Row::new(vec![
                Cell::from(fornecedor.razao_social.clone()),
                Cell::from(fornecedor.cnpj.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(fornecedor.porte_class().as_str()),
                Cell::from(format_int(fornecedor.total_vitorias)),
                Cell::from(format_brl(fornecedor.valor_total_ganho)),
                situacao,
            ])
        })
        .collect();
    let table_widget = data_table(
        &[
            "Razão Social",
            "CNPJ",
            "Porte",
            "Vitórias",
            "Valor Ganho",
            "Situação",
        ],
        rows,
        &[
            Constraint::Min(24),
            Constraint::Length(20),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(20),
            Constraint::Length(9),
        ],
        TITLE,
        theme,
    );
    f.render_stateful_widget(table_widget, chunks[2], table);
}
