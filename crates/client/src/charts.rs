//! Chart adapters.
//!
//! Every chart consumes an ordered `[ChartPoint]`. This module derives those series
//! from API models and computes the chart-level aggregates (average line, pie
//! shares). Rendering lives in the front ends.
//!
//! Invariants:
//! - An empty series is valid and renders an empty chart.
//! - An empty series has no average.
//! - A pie whose values sum to zero (or less) has no slices.

use lap_config::constants::{
    CHART_LABEL_MAX_CHARS, DASHBOARD_MONTHS_SHOWN, TOP_FORNECEDORES_CHART_LEN,
};
use serde::Serialize;

use crate::format::truncate_chars;
use crate::models::{AnomaliaResumo, Fornecedor, HistoricoPrecos, Porte, SerieMensal};

/// One labeled value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Arithmetic mean of the series values.
pub fn average(points: &[ChartPoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().map(|p| p.value).sum::<f64>() / points.len() as f64)
}

/// Largest value, or zero for an empty series. Used to scale bars.
pub fn max_value(points: &[ChartPoint]) -> f64 {
    points.iter().map(|p| p.value).fold(0.0, f64::max)
}

/// A pie slice with its share of the whole, in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub share: f64,
}

pub fn pie_slices(points: &[ChartPoint]) -> Vec<PieSlice> {
    let sum: f64 = points.iter().map(|p| p.value).sum();
    if sum <= 0.0 || !sum.is_finite() {
        return Vec::new();
    }
    points
        .iter()
        .map(|p| PieSlice {
            name: p.name.clone(),
            value: p.value,
            share: p.value / sum,
        })
        .collect()
}

/// Dashboard bar chart: notice count for the most recent months.
pub fn monthly_series(serie: &SerieMensal) -> Vec<ChartPoint> {
    let skip = serie.series.len().saturating_sub(DASHBOARD_MONTHS_SHOWN);
    serie
        .series
        .iter()
        .skip(skip)
        .map(|p| ChartPoint::new(p.periodo.clone(), p.total as f64))
        .collect()
}

/// Supplier count per size class, always in ME, EPP, Demais order.
pub fn porte_distribution(fornecedores: &[Fornecedor]) -> Vec<ChartPoint> {
    Porte::ALL
        .iter()
        .map(|porte| {
            let count = fornecedores
                .iter()
                .filter(|f| f.porte_class() == *porte)
                .count();
            ChartPoint::new(porte.as_str(), count as f64)
        })
        .collect()
}

/// Top suppliers by amount won, labels cut to the chart width.
pub fn top_fornecedores(fornecedores: &[Fornecedor]) -> Vec<ChartPoint> {
    let mut ranked: Vec<&Fornecedor> = fornecedores.iter().collect();
    ranked.sort_by(|a, b| b.valor_total_ganho.total_cmp(&a.valor_total_ganho));
    ranked
        .into_iter()
        .take(TOP_FORNECEDORES_CHART_LEN)
        .map(|f| {
            ChartPoint::new(
                truncate_chars(&f.razao_social, CHART_LABEL_MAX_CHARS),
                f.valor_total_ganho,
            )
        })
        .collect()
}

/// Average price per period for the item history line.
pub fn price_series(historico: &HistoricoPrecos) -> Vec<ChartPoint> {
    historico
        .historico
        .iter()
        .map(|p| ChartPoint::new(p.periodo.clone(), p.preco_medio))
        .collect()
}

/// Anomaly count per type.
pub fn anomalias_por_tipo(resumo: &AnomaliaResumo) -> Vec<ChartPoint> {
    resumo
        .por_tipo
        .iter()
        .map(|(tipo, count)| ChartPoint::new(tipo.clone(), *count as f64))
        .collect()
}
