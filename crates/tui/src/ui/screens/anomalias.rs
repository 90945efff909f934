//! Anomalias screen: summary, status filter, risk-colored table and pager.

use lap_client::charts::anomalias_por_tipo;
use lap_client::format::{format_decimal, format_int, format_opt_brl, format_opt_date};
use lap_client::levels::RiskLevel;
use lap_client::models::AnomaliaStatus;
use lap_client::{Anomalia, AnomaliaResumo, BadgeKind};
use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row},
};

use crate::app::state::{PagedList, Remote};
use crate::ui::screens::{
    badge_cell, bordered, data_table, render_fetch_placeholder, styled_cell,
};
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::charts::{BarChartConfig, render_bar_chart};
use crate::ui::widgets::{render_empty_state, render_pager};

const TITLE: &str = "Anomalias";

pub struct AnomaliasRenderConfig<'a> {
    pub list: &'a mut PagedList<Anomalia>,
    pub resumo: &'a Remote<AnomaliaResumo>,
    pub status: Option<AnomaliaStatus>,
    pub spinner_frame: u8,
    pub theme: &'a Theme,
}

fn summary_line<'a>(resumo: &Remote<AnomaliaResumo>, theme: &Theme) -> Line<'a> {
    let Some(resumo) = resumo.data.as_ref() else {
        let text = match &resumo.error {
            Some(error) => format!("Resumo indisponível: {error}"),
            None => "Carregando resumo...".to_string(),
        };
        return Line::styled(text, theme.text_dim());
    };
    let risk = RiskLevel::from_score(resumo.score_risco_medio);
    let mut spans = vec![
        Span::styled("Total: ", theme.text_dim()),
        Span::styled(format_int(resumo.total), theme.text()),
    ];
    for status in AnomaliaStatus::ALL {
        spans.push(Span::styled(format!("  {}: ", status.label()), theme.text_dim()));
        spans.push(Span::styled(
            format_int(resumo.count_for_status(status)),
            theme.text(),
        ));
    }
    spans.push(Span::styled("  Score médio: ", theme.text_dim()));
    spans.push(Span::styled(
        format!("{} ({})", format_decimal(resumo.score_risco_medio), risk.label()),
        theme.badge(risk.style()),
    ));
    Line::from(spans)
}

pub fn render_anomalias(f: &mut Frame, area: Rect, config: AnomaliasRenderConfig) {
    let AnomaliasRenderConfig {
        list,
        resumo,
        status,
        spinner_frame,
        theme,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let filter = Line::from(vec![
        Span::styled("Status: ", theme.text_dim()),
        Span::styled(
            status.map(AnomaliaStatus::label).unwrap_or("Todos"),
            theme.border_focused(),
        ),
        Span::styled("  (s para alternar)", theme.text_dim()),
    ]);
    let header = Paragraph::new(vec![summary_line(resumo, theme), filter])
        .block(bordered("Resumo", theme));
    f.render_widget(header, chunks[0]);

    let por_tipo = resumo
        .data
        .as_ref()
        .map(anomalias_por_tipo)
        .unwrap_or_default();
    let body = if por_tipo.is_empty() || chunks[1].width < 120 {
        chunks[1]
    } else {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(chunks[1]);
        render_bar_chart(
            f,
            split[1],
            BarChartConfig {
                title: "Por tipo",
                points: &por_tipo,
                color: theme.chart_bar,
                horizontal: true,
                value_label: |v| format_int(v.max(0.0) as u64),
            },
            theme,
        );
        split[0]
    };

    if render_fetch_placeholder(f, body, TITLE, &list.fetch.remote, spinner_frame, theme) {
        return;
    }
    if list.items().is_empty() {
        render_empty_state(f, body, TITLE, "Nenhuma anomalia encontrada.", theme);
        render_pager(f, chunks[2], list.pager(), theme);
        return;
    }

    let rows: Vec<Row> = list
        .items()
        .iter()
        .map(|a| {
            let risk = RiskLevel::from_score(a.score_risco);
            Row::new(vec![
                Cell::from(a.tipo.clone()),
                Cell::from(a.descricao.clone().unwrap_or_default()),
                Cell::from(format_opt_brl(a.valor_detectado)),
                Cell::from(
                    a.percentual_desvio
                        .map(|p| format!("{}%", format_decimal(p)))
                        .unwrap_or_else(|| "-".to_string()),
                ),
                styled_cell(
                    format!("{} {}", format_decimal(a.score_risco), risk.label()),
                    risk.style(),
                    theme,
                ),
                badge_cell(&a.status, BadgeKind::Status, theme),
                Cell::from(format_opt_date(a.created_at.as_deref())),
            ])
        })
        .collect();

    let table = data_table(
        &[
            "Tipo",
            "Descrição",
            "Valor Detectado",
            "Desvio",
            "Risco",
            "Status",
            "Data",
        ],
        rows,
        &[
            Constraint::Length(16),
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(11),
        ],
        TITLE,
        theme,
    );
    let pager = list.pager();
    f.render_stateful_widget(table, body, &mut list.table);
    render_pager(f, chunks[2], pager, theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::test_support::buffer_text;
    use lap_client::Page;
    use lap_config::ColorTheme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::collections::BTreeMap;

    #[test]
    fn risk_label_and_summary_are_shown() {
        let mut list = PagedList::new(20);
        let seq = list.reload();
        list.accept(
            seq,
            Ok(Page::single(vec![Anomalia {
                id: "a1".to_string(),
                licitacao_id: None,
                tipo: "sobrepreco".to_string(),
                descricao: Some("Preço acima da média".to_string()),
                valor_detectado: Some(150.0),
                valor_referencia: Some(100.0),
                percentual_desvio: Some(50.0),
                score_risco: 82.0,
                status: "pendente".to_string(),
                created_at: None,
            }])),
        );
        let mut resumo = Remote::default();
        resumo.resolve(Ok(AnomaliaResumo {
            total: 1,
            por_tipo: BTreeMap::from([("sobrepreco".to_string(), 1)]),
            por_status: BTreeMap::from([("pendente".to_string(), 1)]),
            score_risco_medio: 82.0,
        }));
        let theme = Theme::from_color_theme(ColorTheme::Default);
        let mut terminal = Terminal::new(TestBackend::new(110, 14)).unwrap();
        terminal
            .draw(|f| {
                render_anomalias(
                    f,
                    f.area(),
                    AnomaliasRenderConfig {
                        list: &mut list,
                        resumo: &resumo,
                        status: Some(AnomaliaStatus::Pendente),
                        spinner_frame: 0,
                        theme: &theme,
                    },
                )
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Alto"));
        assert!(text.contains("Total: 1"));
        assert!(text.contains("sobrepreco"));
    }
}
