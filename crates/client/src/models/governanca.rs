//! Governance ranking models.

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{f64_lenient, opt_string_from_number_or_string};

/// One row of `/governanca/ranking`. All indicators are opaque backend scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingGovernanca {
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub municipio_id: Option<String>,
    #[serde(default)]
    pub municipio: String,
    #[serde(default)]
    pub uf: String,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub score_governanca: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub indice_transparencia: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub taxa_sucesso: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub participacao_meepp: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub economia_media: f64,
}

/// Indicator weights of the governance score, as (label, percent).
pub const GOVERNANCA_PESOS: [(&str, u8); 5] = [
    ("Transparência", 30),
    ("Taxa de sucesso", 25),
    ("Concentração de mercado", 20),
    ("Participação ME/EPP", 15),
    ("Economia", 10),
];
