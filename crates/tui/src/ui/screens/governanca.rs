//! Governança screen: municipality ranking colored by score, with the weight legend.

use lap_client::format::{format_decimal, format_percent};
use lap_client::levels::GovernanceLevel;
use lap_client::models::GOVERNANCA_PESOS;
use lap_client::{Page, RankingGovernanca};
use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, TableState, Wrap},
};

use crate::app::state::Remote;
use crate::ui::screens::{bordered, data_table, render_fetch_placeholder, styled_cell};
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::render_empty_state;

const TITLE: &str = "Ranking de Governança";

pub struct GovernancaRenderConfig<'a> {
    pub data: &'a Remote<Page<RankingGovernanca>>,
    pub table: &'a mut TableState,
    pub spinner_frame: u8,
    pub theme: &'a Theme,
}

fn legend_lines<'a>(theme: &Theme) -> Vec<Line<'a>> {
    let pesos: Vec<Span> = GOVERNANCA_PESOS
        .iter()
        .flat_map(|(nome, peso)| {
            [
                Span::styled(format!("{nome} "), theme.text_dim()),
                Span::styled(format!("{peso}%   "), theme.text()),
            ]
        })
        .collect();
    let escala = Line::from(vec![
        Span::styled("Escala: ", theme.text_dim()),
        Span::styled(
            ">= 70 Bom",
            theme.badge(GovernanceLevel::from_score(70.0).style()),
        ),
        Span::styled("  >= 50 Regular", theme.badge(GovernanceLevel::from_score(50.0).style())),
        Span::styled("  < 50 Ruim", theme.badge(GovernanceLevel::from_score(0.0).style())),
    ]);
    vec![Line::from(pesos), escala]
}

pub fn render_governanca(f: &mut Frame, area: Rect, config: GovernancaRenderConfig) {
    let GovernancaRenderConfig {
        data,
        table,
        spinner_frame,
        theme,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(4)])
        .split(area);
    let legend = Paragraph::new(legend_lines(theme))
        .wrap(Wrap { trim: true })
        .block(bordered("Pesos do score", theme));
    f.render_widget(legend, chunks[1]);

    if render_fetch_placeholder(f, chunks[0], TITLE, data, spinner_frame, theme) {
        return;
    }
    let items = data.data.as_ref().map(|p| p.items.as_slice()).unwrap_or(&[]);
    if items.is_empty() {
        render_empty_state(f, chunks[0], TITLE, "Ranking indisponível.", theme);
        return;
    }

    let rows: Vec<Row> = items
        .iter()
        .enumerate()
        .map(|(pos, r)| {
            let level = GovernanceLevel::from_score(r.score_governanca);
            Row::new(vec![
                Cell::from(format!("{}º", pos + 1)),
                Cell::from(r.municipio.clone()),
                Cell::from(r.uf.clone()),
                styled_cell(
                    format!("{} {}", format_decimal(r.score_governanca), level.label()),
                    level.style(),
                    theme,
                ),
                Cell::from(format_decimal(r.indice_transparencia)),
                Cell::from(format_percent(r.taxa_sucesso)),
                Cell::from(format_percent(r.participacao_meepp)),
                Cell::from(format_percent(r.economia_media)),
            ])
        })
        .collect();
    let table_widget = data_table(
        &[
            "#",
            "Município",
            "UF",
            "Score",
            "Transparência",
            "Sucesso",
            "ME/EPP",
            "Economia",
        ],
        rows,
        &[
            Constraint::Length(4),
            Constraint::Min(18),
            Constraint::Length(3),
            Constraint::Length(13),
            Constraint::Length(13),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(9),
        ],
        TITLE,
        theme,
    );
    f.render_stateful_widget(table_widget, chunks[0], table);
}
