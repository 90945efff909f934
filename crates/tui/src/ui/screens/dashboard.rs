//! Dashboard screen: KPI cards and the monthly notices chart.

use lap_client::charts::monthly_series;
use lap_client::format::{format_brl, format_int, format_percent};
use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::action::DashboardData;
use crate::app::state::Remote;
use crate::ui::screens::render_fetch_placeholder;
use crate::ui::widgets::charts::{BarChartConfig, render_bar_chart};
use crate::ui::widgets::{render_empty_state, render_stat_card};

const TITLE: &str = "Dashboard";
const CARD_HEIGHT: u16 = 4;

/// Configuration for rendering the dashboard.
pub struct DashboardRenderConfig<'a> {
    pub data: &'a Remote<DashboardData>,
    pub spinner_frame: u8,
    pub theme: &'a Theme,
}

pub fn render_dashboard(f: &mut Frame, area: Rect, config: DashboardRenderConfig) {
    let DashboardRenderConfig {
        data,
        spinner_frame,
        theme,
    } = config;

    if render_fetch_placeholder(f, area, TITLE, data, spinner_frame, theme) {
        return;
    }
    let Some(DashboardData { kpis, por_mes }) = data.data.as_ref() else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Min(6),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[0]);
    let abertas = format!("{} abertas", format_int(kpis.licitacoes_abertas));
    render_stat_card(
        f,
        top[0],
        "Total de Licitações",
        &format_int(kpis.total_licitacoes),
        Some((&abertas, theme.info)),
        theme,
    );
    render_stat_card(
        f,
        top[1],
        "Valor Estimado",
        &format_brl(kpis.valor_total_estimado),
        None,
        theme,
    );
    render_stat_card(
        f,
        top[2],
        "Valor Homologado",
        &format_brl(kpis.valor_total_homologado),
        None,
        theme,
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[1]);
    let economia_pct = format!(
        "{} do estimado",
        format_percent(kpis.economia_gerada.percentual)
    );
    render_stat_card(
        f,
        bottom[0],
        "Economia Gerada",
        &format_brl(kpis.economia_gerada.valor),
        Some((&economia_pct, theme.positive)),
        theme,
    );
    render_stat_card(
        f,
        bottom[1],
        "Alertas Pendentes",
        &format_int(kpis.alertas_pendentes),
        None,
        theme,
    );
    render_stat_card(
        f,
        bottom[2],
        "Anomalias Detectadas",
        &format_int(kpis.anomalias_detectadas),
        (kpis.anomalias_detectadas > 0).then_some(("requer atenção", theme.warning)),
        theme,
    );

    let points = monthly_series(por_mes);
    if points.is_empty() {
        render_empty_state(
            f,
            rows[2],
            "Licitações por Mês",
            "Sem dados mensais.",
            theme,
        );
        return;
    }
    render_bar_chart(
        f,
        rows[2],
        BarChartConfig {
            title: "Licitações por Mês (últimos 12 meses)",
            points: &points,
            color: theme.chart_bar,
            horizontal: false,
            value_label: |v| format_int(v.max(0.0) as u64),
        },
        theme,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::test_support::buffer_text;
    use lap_client::models::{EconomiaGerada, Kpis, PontoMensal, SerieMensal};
    use lap_config::ColorTheme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn renders_kpis_and_chart() {
        let mut remote = Remote::default();
        remote.resolve(Ok(DashboardData {
            kpis: Kpis {
                total_licitacoes: 1234,
                licitacoes_abertas: 12,
                valor_total_estimado: 1_500_000.0,
                valor_total_homologado: 1_200_000.0,
                economia_gerada: EconomiaGerada {
                    valor: 300_000.0,
                    percentual: 20.0,
                },
                alertas_pendentes: 3,
                anomalias_detectadas: 0,
            },
            por_mes: SerieMensal {
                meses: 2,
                series: vec![
                    PontoMensal {
                        periodo: "2024-01".to_string(),
                        total: 10,
                        valor_total: 1.0,
                    },
                    PontoMensal {
                        periodo: "2024-02".to_string(),
                        total: 7,
                        valor_total: 1.0,
                    },
                ],
            },
        }));
        let theme = Theme::from_color_theme(ColorTheme::Default);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| {
                render_dashboard(
                    f,
                    f.area(),
                    DashboardRenderConfig {
                        data: &remote,
                        spinner_frame: 0,
                        theme: &theme,
                    },
                )
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("1.234"));
        assert!(text.contains("R$ 1.500.000,00"));
        assert!(text.contains("20,0% do estimado"));
        assert!(text.contains("Licitações por Mês"));
    }

    #[test]
    fn error_replaces_content() {
        let mut remote: Remote<DashboardData> = Remote::default();
        remote.error = Some("A API não respondeu a tempo".to_string());
        let theme = Theme::from_color_theme(ColorTheme::Default);
        let mut terminal = Terminal::new(TestBackend::new(80, 10)).unwrap();
        terminal
            .draw(|f| {
                render_dashboard(
                    f,
                    f.area(),
                    DashboardRenderConfig {
                        data: &remote,
                        spinner_frame: 0,
                        theme: &theme,
                    },
                )
            })
            .unwrap();
        assert!(buffer_text(&terminal).contains("A API não respondeu a tempo"));
    }
}
