//! Threshold classifications for scores and map markers.

use lap_config::constants::{
    MAP_MAX_RADIUS, MAP_MIN_RADIUS, MAP_VALUE_HIGH, MAP_VALUE_LOW, SCORE_HIGH_THRESHOLD,
    SCORE_MEDIUM_THRESHOLD,
};

use crate::badge::BadgeStyle;

/// Three-step level shared by every threshold coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Medium,
    High,
}

fn score_level(score: f64) -> Level {
    if score >= SCORE_HIGH_THRESHOLD {
        Level::High
    } else if score >= SCORE_MEDIUM_THRESHOLD {
        Level::Medium
    } else {
        Level::Low
    }
}

/// Anomaly risk: high risk is bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskLevel(pub Level);

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        Self(score_level(score))
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            Level::High => "Alto",
            Level::Medium => "Médio",
            Level::Low => "Baixo",
        }
    }

    pub fn style(self) -> BadgeStyle {
        match self.0 {
            Level::High => BadgeStyle::Negative,
            Level::Medium => BadgeStyle::Warning,
            Level::Low => BadgeStyle::Positive,
        }
    }
}

/// Governance score: a high score is good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GovernanceLevel(pub Level);

impl GovernanceLevel {
    pub fn from_score(score: f64) -> Self {
        Self(score_level(score))
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            Level::High => "Bom",
            Level::Medium => "Regular",
            Level::Low => "Ruim",
        }
    }

    pub fn style(self) -> BadgeStyle {
        match self.0 {
            Level::High => BadgeStyle::Positive,
            Level::Medium => BadgeStyle::Warning,
            Level::Low => BadgeStyle::Negative,
        }
    }
}

/// Map marker color class for a municipality's total procurement value.
pub fn marker_style(valor_total: f64) -> BadgeStyle {
    if valor_total < MAP_VALUE_LOW {
        BadgeStyle::Positive
    } else if valor_total < MAP_VALUE_HIGH {
        BadgeStyle::Warning
    } else {
        BadgeStyle::Negative
    }
}

/// Map marker radius: half the notice count, clamped to `5..=30`.
pub fn marker_radius(total_licitacoes: u64) -> f64 {
    (total_licitacoes as f64 / 2.0).clamp(MAP_MIN_RADIUS, MAP_MAX_RADIUS)
}
