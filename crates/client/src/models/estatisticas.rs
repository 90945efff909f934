//! Dashboard statistics models.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{f64_lenient, u64_lenient};

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    #[serde(default, deserialize_with = "u64_lenient")]
    pub total_licitacoes: u64,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub licitacoes_abertas: u64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub valor_total_estimado: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub valor_total_homologado: f64,
    #[serde(default)]
    pub economia_gerada: EconomiaGerada,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub alertas_pendentes: u64,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub anomalias_detectadas: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomiaGerada {
    #[serde(default, deserialize_with = "f64_lenient")]
    pub valor: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub percentual: f64,
}

/// Monthly series from `/estatisticas/por-mes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SerieMensal {
    #[serde(default, deserialize_with = "u64_lenient")]
    pub meses: u64,
    #[serde(default)]
    pub series: Vec<PontoMensal>,
}

/// One month of the series; `periodo` is `YYYY-MM`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PontoMensal {
    #[serde(default)]
    pub periodo: String,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub total: u64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub valor_total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpis_tolerate_missing_economia() {
        let kpis: Kpis =
            serde_json::from_str(r#"{"total_licitacoes": 10, "valor_total_estimado": "99.9"}"#)
                .unwrap();
        assert_eq!(kpis.total_licitacoes, 10);
        assert_eq!(kpis.valor_total_estimado, 99.9);
        assert_eq!(kpis.economia_gerada, EconomiaGerada::default());
    }
}
