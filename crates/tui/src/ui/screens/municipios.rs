//! Municípios screen: UF and distance filters, table and marker map.
//!
//! The map projects latitude/longitude straight onto a ratatui `Canvas`.
//! Marker color follows the municipality's total value and the radius its
//! notice count; municipalities without coordinates are listed but not plotted.

use lap_client::Municipio;
use lap_client::format::{format_brl, format_decimal, format_int};
use lap_client::levels::{marker_radius, marker_style};
use lap_config::Theme;
use lap_config::constants::{MAP_DEFAULT_CENTER, MAX_DISTANCE_KM, MIN_DISTANCE_KM};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Cell, Paragraph, Row, TableState,
        canvas::{Canvas, Circle},
    },
};

use crate::app::state::{Remote, TextInput};
use crate::ui::screens::{bordered, data_table, input_line, render_fetch_placeholder};
use crate::ui::theme::ThemeExt;
use crate::ui::widgets::render_empty_state;

const TITLE: &str = "Municípios";
/// Degrees per marker-radius unit.
const RADIUS_SCALE: f64 = 0.01;
/// Half-width of the map window around the default center, in degrees.
const DEFAULT_SPAN: f64 = 2.0;
const MAX_MAP_LABELS: usize = 15;

pub struct MunicipiosRenderConfig<'a> {
    pub data: &'a Remote<lap_client::Page<Municipio>>,
    pub visible: Vec<Municipio>,
    pub uf: &'a TextInput,
    pub max_distance_km: u32,
    pub table: &'a mut TableState,
    pub spinner_frame: u8,
    pub theme: &'a Theme,
}

/// Slider drawn as `50 km [=====-----] 200 km`.
fn distance_line<'a>(max_distance_km: u32, theme: &Theme) -> Line<'a> {
    const WIDTH: u32 = 15;
    let range = MAX_DISTANCE_KM - MIN_DISTANCE_KM;
    let filled = (max_distance_km.saturating_sub(MIN_DISTANCE_KM) * WIDTH / range.max(1)) as usize;
    Line::from(vec![
        Span::styled("Distância máxima: ", theme.text_dim()),
        Span::styled(format!("{max_distance_km} km  "), theme.border_focused()),
        Span::styled(format!("{MIN_DISTANCE_KM} km ["), theme.text_dim()),
        Span::styled("=".repeat(filled), theme.border_focused()),
        Span::styled("-".repeat(WIDTH as usize - filled), theme.text_dim()),
        Span::styled(format!("] {MAX_DISTANCE_KM} km  (+/-)"), theme.text_dim()),
    ])
}

/// Map window covering every plotted point, or the default center.
fn map_bounds(points: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    if points.is_empty() {
        let (lat, lon) = MAP_DEFAULT_CENTER;
        return (
            [lon - DEFAULT_SPAN, lon + DEFAULT_SPAN],
            [lat - DEFAULT_SPAN, lat + DEFAULT_SPAN],
        );
    }
    let (mut lat_min, mut lat_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut lon_min, mut lon_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for (lat, lon) in points {
        lat_min = lat_min.min(*lat);
        lat_max = lat_max.max(*lat);
        lon_min = lon_min.min(*lon);
        lon_max = lon_max.max(*lon);
    }
    let pad = 0.5;
    (
        [lon_min - pad, lon_max + pad],
        [lat_min - pad, lat_max + pad],
    )
}

fn render_map(f: &mut Frame, area: Rect, visible: &[Municipio], theme: &Theme) {
    let plotted: Vec<(&Municipio, (f64, f64))> = visible
        .iter()
        .filter_map(|m| m.coords().map(|c| (m, c)))
        .collect();
    let coords: Vec<(f64, f64)> = plotted.iter().map(|(_, c)| *c).collect();
    let (x_bounds, y_bounds) = map_bounds(&coords);
    let title = format!("Mapa ({} de {} plotados)", plotted.len(), visible.len());

    let canvas = Canvas::default()
        .block(bordered(title, theme))
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for (municipio, (lat, lon)) in &plotted {
                ctx.draw(&Circle {
                    x: *lon,
                    y: *lat,
                    radius: marker_radius(municipio.total_licitacoes) * RADIUS_SCALE,
                    color: theme.badge_color(marker_style(municipio.valor_total)),
                });
            }
            if plotted.len() <= MAX_MAP_LABELS {
                for (municipio, (lat, lon)) in &plotted {
                    ctx.print(
                        *lon,
                        *lat,
                        Line::styled(municipio.nome.clone(), theme.text()),
                    );
                }
            }
        });
    f.render_widget(canvas, area);
}

pub fn render_municipios(f: &mut Frame, area: Rect, config: MunicipiosRenderConfig) {
    let MunicipiosRenderConfig {
        data,
        visible,
        uf,
        max_distance_km,
        table,
        spinner_frame,
        theme,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(area);

    let filters = Paragraph::new(vec![
        input_line("UF", uf, "todas (u para filtrar)", theme),
        distance_line(max_distance_km, theme),
    ])
    .block(bordered("Filtros", theme));
    f.render_widget(filters, chunks[0]);

    if render_fetch_placeholder(f, chunks[1], TITLE, data, spinner_frame, theme) {
        return;
    }
    if visible.is_empty() {
        render_empty_state(
            f,
            chunks[1],
            TITLE,
            "Nenhum município dentro da distância selecionada.",
            theme,
        );
        return;
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let rows: Vec<Row> = visible
        .iter()
        .map(|m| {
            Row::new(vec![
                Cell::from(m.nome.clone()),
                Cell::from(m.uf.clone()),
                Cell::from(
                    m.distancia_km
                        .map(|d| format!("{} km", format_decimal(d)))
                        .unwrap_or_else(|| "-".to_string()),
                ),
                Cell::from(format_int(m.total_licitacoes)),
                Cell::from(format_brl(m.valor_total))
                    .style(theme.badge(marker_style(m.valor_total))),
            ])
        })
        .collect();
    let table_widget = data_table(
        &["Município", "UF", "Distância", "Licitações", "Valor Total"],
        rows,
        &[
            Constraint::Min(16),
            Constraint::Length(3),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(18),
        ],
        TITLE,
        theme,
    );
    f.render_stateful_widget(table_widget, body[0], table);
    render_map(f, body[1], &visible, theme);
}
