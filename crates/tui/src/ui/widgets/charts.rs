//! Terminal renderers for the chart adapters.
//!
//! The series come from `lap_client::charts`; this module only draws them.
//! - Bar: ratatui `BarChart`, vertical or horizontal.
//! - Line: ratatui `Chart` with an optional horizontal average dataset.
//! - Pie: there is no terminal pie, so slices are drawn as a legend of
//!   proportional bars in the palette colors.
//!
//! Every renderer accepts an empty series and draws an empty frame.

use lap_client::charts::{ChartPoint, average, pie_slices};
use lap_client::format::format_percent;
use lap_config::Theme;
use ratatui::{
    Frame,
    layout::{Direction, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::ui::theme::ThemeExt;

fn chart_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(title)
        .title_style(theme.title())
}

/// Bar chart options.
pub struct BarChartConfig<'a> {
    pub title: &'a str,
    pub points: &'a [ChartPoint],
    pub color: Color,
    pub horizontal: bool,
    /// Text printed on or next to each bar.
    pub value_label: fn(f64) -> String,
}

pub fn render_bar_chart(f: &mut Frame, area: Rect, config: BarChartConfig, theme: &Theme) {
    let BarChartConfig {
        title,
        points,
        color,
        horizontal,
        value_label,
    } = config;

    let bars: Vec<Bar> = points
        .iter()
        .map(|p| {
            Bar::default()
                .value(p.value.max(0.0).round() as u64)
                .text_value(value_label(p.value))
                .label(Line::from(p.name.clone()))
                .style(Style::default().fg(color))
        })
        .collect();

    let mut chart = BarChart::default()
        .block(chart_block(title, theme))
        .data(BarGroup::default().bars(&bars))
        .bar_gap(1)
        .value_style(Style::default().fg(theme.text).bg(color))
        .label_style(theme.text_dim());

    chart = if horizontal {
        chart.direction(Direction::Horizontal).bar_width(1)
    } else {
        let inner = area.width.saturating_sub(2);
        let n = (bars.len() as u16).max(1);
        let width = (inner / n).saturating_sub(1).clamp(3, 9);
        chart.bar_width(width)
    };

    f.render_widget(chart, area);
}

/// Y-axis bounds with a little headroom; a flat series still gets a visible range.
fn y_bounds(points: &[ChartPoint]) -> [f64; 2] {
    let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max = points
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    if (max - min).abs() < f64::EPSILON {
        return [(min - 1.0).max(0.0), max + 1.0];
    }
    let pad = (max - min) * 0.05;
    [(min - pad).max(0.0), max + pad]
}

/// Line chart options.
pub struct LineChartConfig<'a> {
    pub title: &'a str,
    pub series_name: &'a str,
    pub points: &'a [ChartPoint],
    /// Overlay the arithmetic mean as a horizontal line.
    pub show_average: bool,
    pub value_label: fn(f64) -> String,
}

pub fn render_line_chart(f: &mut Frame, area: Rect, config: LineChartConfig, theme: &Theme) {
    let LineChartConfig {
        title,
        series_name,
        points,
        show_average,
        value_label,
    } = config;

    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(idx, p)| (idx as f64, p.value))
        .collect();
    let x_max = (points.len().saturating_sub(1) as f64).max(1.0);
    let mean = if show_average { average(points) } else { None };
    let average_line: Vec<(f64, f64)> = mean
        .map(|avg| vec![(0.0, avg), (x_max, avg)])
        .unwrap_or_default();

    let mut datasets = vec![
        Dataset::default()
            .name(series_name.to_string())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.chart_line))
            .data(&data),
    ];
    if let Some(avg) = mean {
        datasets.push(
            Dataset::default()
                .name(format!("Média {}", value_label(avg)))
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.chart_average))
                .data(&average_line),
        );
    }

    let [y_min, y_max] = y_bounds(points);
    let x_labels: Vec<String> = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 => {
            vec![first.name.clone(), last.name.clone()]
        }
        (Some(only), _) => vec![only.name.clone()],
        _ => Vec::new(),
    };

    let chart = Chart::new(datasets)
        .block(chart_block(title, theme))
        .x_axis(
            Axis::default()
                .style(theme.text_dim())
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(theme.text_dim())
                .bounds([y_min, y_max])
                .labels(vec![value_label(y_min), value_label(y_max)]),
        );
    f.render_widget(chart, area);
}

/// Render pie slices as a legend with proportional bars.
pub fn render_pie_chart(
    f: &mut Frame,
    area: Rect,
    title: &str,
    points: &[ChartPoint],
    theme: &Theme,
) {
    let slices = pie_slices(points);
    let bar_room = area.width.saturating_sub(24) as f64;

    let lines: Vec<Line> = slices
        .iter()
        .enumerate()
        .map(|(idx, slice)| {
            let color = theme.chart_palette[idx % theme.chart_palette.len()];
            let filled = (slice.share * bar_room).round() as usize;
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(format!("{:<8}", slice.name), theme.text()),
                Span::styled(
                    format!("{:>7} ", format_percent(slice.share * 100.0)),
                    theme.text(),
                ),
                Span::styled("█".repeat(filled), Style::default().fg(color)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(chart_block(title, theme)), area);
}
