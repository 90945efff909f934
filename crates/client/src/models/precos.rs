//! Item price history models.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{f64_lenient, opt_f64_lenient, opt_string_from_number_or_string, u64_lenient};

/// Body of `/precos/historico`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricoPrecos {
    #[serde(default)]
    pub descricao: String,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub periodo_meses: u64,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub total_registros: u64,
    #[serde(default)]
    pub historico: Vec<PontoPreco>,
}

/// One observation in the price timeline.
///
/// Aggregated rows carry `periodo`/`preco_medio`; per-item rows carry `data`/`valor`.
/// Both decode into the same fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PontoPreco {
    #[serde(default, alias = "data")]
    pub periodo: String,
    #[serde(default, alias = "valor", deserialize_with = "f64_lenient")]
    pub preco_medio: f64,
    #[serde(default, deserialize_with = "opt_f64_lenient")]
    pub preco_minimo: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_lenient")]
    pub preco_maximo: Option<f64>,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub quantidade: u64,
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub numero_compra: Option<String>,
}
