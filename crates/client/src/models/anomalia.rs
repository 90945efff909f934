//! Anomaly models.
//!
//! Anomalies are produced by the backend's detection job; the client only lists
//! them and filters by review status.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{
    count_map_lenient, f64_lenient, opt_f64_lenient, opt_string_from_number_or_string,
    string_from_number_or_string, u64_lenient,
};

/// A detected anomaly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomalia {
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub licitacao_id: Option<String>,
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "opt_f64_lenient")]
    pub valor_detectado: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_lenient")]
    pub valor_referencia: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_lenient")]
    pub percentual_desvio: Option<f64>,
    /// Risk score in `0..=100`.
    #[serde(default, deserialize_with = "f64_lenient")]
    pub score_risco: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Review status used by the anomaly list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnomaliaStatus {
    Pendente,
    Analisada,
    Descartada,
}

impl AnomaliaStatus {
    pub const ALL: [AnomaliaStatus; 3] = [Self::Pendente, Self::Analisada, Self::Descartada];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::Analisada => "analisada",
            Self::Descartada => "descartada",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pendente => "Pendente",
            Self::Analisada => "Analisada",
            Self::Descartada => "Descartada",
        }
    }
}

impl fmt::Display for AnomaliaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnomaliaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pendente" => Ok(Self::Pendente),
            "analisada" => Ok(Self::Analisada),
            "descartada" => Ok(Self::Descartada),
            other => Err(format!(
                "status inválido '{other}' (esperado: pendente, analisada, descartada)"
            )),
        }
    }
}

/// Summary from `/anomalias/estatisticas/resumo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnomaliaResumo {
    #[serde(default, deserialize_with = "u64_lenient")]
    pub total: u64,
    #[serde(default, deserialize_with = "count_map_lenient")]
    pub por_tipo: BTreeMap<String, u64>,
    #[serde(default, deserialize_with = "count_map_lenient")]
    pub por_status: BTreeMap<String, u64>,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub score_risco_medio: f64,
}

impl AnomaliaResumo {
    pub fn count_for_status(&self, status: AnomaliaStatus) -> u64 {
        self.por_status.get(status.as_str()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(
            "Pendente".parse::<AnomaliaStatus>().unwrap(),
            AnomaliaStatus::Pendente
        );
        assert!("aberta".parse::<AnomaliaStatus>().is_err());
    }

    #[test]
    fn resumo_defaults_missing_maps() {
        let resumo: AnomaliaResumo =
            serde_json::from_str(r#"{"total": 4, "por_status": {"pendente": 3}}"#).unwrap();
        assert_eq!(resumo.count_for_status(AnomaliaStatus::Pendente), 3);
        assert_eq!(resumo.count_for_status(AnomaliaStatus::Analisada), 0);
        assert!(resumo.por_tipo.is_empty());
        assert_eq!(resumo.score_risco_medio, 0.0);
    }

    #[test]
    fn null_score_is_zero() {
        let a: Anomalia =
            serde_json::from_str(r#"{"id": 1, "tipo": "sobrepreco", "score_risco": null, "status": "pendente"}"#)
                .unwrap();
        assert_eq!(a.score_risco, 0.0);
    }
}
