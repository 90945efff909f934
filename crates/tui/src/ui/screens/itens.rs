//! Itens screen: item description input and the price history line.

use lap_client::charts::{average, price_series};
use lap_client::format::{format_brl, format_int, format_opt_brl};
use lap_client::models::HistoricoPrecos;
use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{Remote, TextInput};
use crate::ui::screens::{bordered, input_line, render_fetch_placeholder};
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::charts::{LineChartConfig, render_line_chart};
use crate::ui::widgets::render_empty_state;

const TITLE: &str = "Histórico de Preços";

pub struct ItensRenderConfig<'a> {
    pub descricao: &'a TextInput,
    pub meses: u32,
    pub data: &'a Remote<HistoricoPrecos>,
    pub spinner_frame: u8,
    pub theme: &'a Theme,
}

/// Lowest minimum and highest maximum across the periods that report them.
fn price_range(historico: &HistoricoPrecos) -> (Option<f64>, Option<f64>) {
    let min = historico
        .historico
        .iter()
        .filter_map(|p| p.preco_minimo)
        .reduce(f64::min);
    let max = historico
        .historico
        .iter()
        .filter_map(|p| p.preco_maximo)
        .reduce(f64::max);
    (min, max)
}

fn summary_line<'a>(historico: &HistoricoPrecos, theme: &Theme) -> Line<'a> {
    let points = price_series(historico);
    let (min, max) = price_range(historico);
    let pairs = [
        ("Registros", format_int(historico.total_registros)),
        ("Média", format_opt_brl(average(&points))),
        ("Mínimo", format_opt_brl(min)),
        ("Máximo", format_opt_brl(max)),
    ];
    let mut spans = Vec::new();
    for (label, value) in pairs {
        spans.push(Span::styled(format!("{label}: "), theme.text_dim()));
        spans.push(Span::styled(format!("{value}   "), theme.text()));
    }
    Line::from(spans)
}

pub fn render_itens(f: &mut Frame, area: Rect, config: ItensRenderConfig) {
    let ItensRenderConfig {
        descricao,
        meses,
        data,
        spinner_frame,
        theme,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let periodo = Line::from(vec![
        Span::styled("Período: ", theme.text_dim()),
        Span::styled(format!("{meses} meses"), theme.border_focused()),
        Span::styled("  (+/- para alterar)", theme.text_dim()),
    ]);
    let header = Paragraph::new(vec![
        input_line("Item", descricao, "pressione / e digite a descrição do item", theme),
        periodo,
    ])
    .block(bordered("Consulta", theme));
    f.render_widget(header, chunks[0]);

    if descricao.trimmed().is_none() && data.data.is_none() && !data.loading {
        render_empty_state(
            f,
            chunks[1],
            TITLE,
            "Informe a descrição de um item para ver o histórico de preços.",
            theme,
        );
        return;
    }
    if render_fetch_placeholder(f, chunks[1], TITLE, data, spinner_frame, theme) {
        return;
    }
    let Some(historico) = data.data.as_ref() else {
        return;
    };
    if historico.historico.is_empty() {
        render_empty_state(
            f,
            chunks[1],
            TITLE,
            "Nenhum registro de preço para o item no período.",
            theme,
        );
        return;
    }

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(chunks[1]);
    f.render_widget(Paragraph::new(summary_line(historico, theme)), body[0]);

    let title = format!("{TITLE}: {}", historico.descricao);
    render_line_chart(
        f,
        body[1],
        LineChartConfig {
            title: &title,
            series_name: "Preço médio",
            points: &price_series(historico),
            show_average: true,
            value_label: format_brl,
        },
        theme,
    );
}
