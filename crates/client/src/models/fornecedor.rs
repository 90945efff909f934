//! Supplier models.
//!
//! Suppliers come from the top-suppliers ranking (`/estatisticas/top-fornecedores`);
//! the size class ("porte") is normalized into [`Porte`] for filtering and charts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::serde_helpers::{f64_lenient, string_from_number_or_string, u64_lenient};

/// A supplier with its win statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fornecedor {
    #[serde(alias = "fornecedor_id", deserialize_with = "string_from_number_or_string")]
    pub id: String,
    #[serde(default)]
    pub razao_social: String,
    #[serde(default, alias = "cnpj_cpf")]
    pub cnpj: Option<String>,
    #[serde(default, alias = "porte_fornecedor_nome")]
    pub porte: Option<String>,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub total_vitorias: u64,
    #[serde(default, alias = "valor_total", deserialize_with = "f64_lenient")]
    pub valor_total_ganho: f64,
    #[serde(default)]
    pub impedida: bool,
}

impl Fornecedor {
    pub fn porte_class(&self) -> Porte {
        Porte::classify(self.porte.as_deref().unwrap_or(""))
    }
}

/// Company size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Porte {
    Me,
    Epp,
    Demais,
}

impl Porte {
    /// Fixed display order used by filters and the share chart.
    pub const ALL: [Porte; 3] = [Self::Me, Self::Epp, Self::Demais];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Me => "ME",
            Self::Epp => "EPP",
            Self::Demais => "Demais",
        }
    }

    /// Map a free-form size label to a class.
    ///
    /// Accepts the short codes and the long names the registry uses
    /// ("Microempresa", "Empresa de Pequeno Porte"); anything else is `Demais`.
    pub fn classify(label: &str) -> Self {
        let upper = label.trim().to_uppercase();
        if upper == "EPP" || upper.contains("PEQUENO PORTE") {
            Self::Epp
        } else if upper == "ME" || upper.contains("MICRO") {
            Self::Me
        } else {
            Self::Demais
        }
    }

    pub fn is_small_business(self) -> bool {
        matches!(self, Self::Me | Self::Epp)
    }
}

impl fmt::Display for Porte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Porte {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ME" => Ok(Self::Me),
            "EPP" => Ok(Self::Epp),
            "DEMAIS" => Ok(Self::Demais),
            other => Err(format!("porte inválido '{other}' (esperado: ME, EPP, Demais)")),
        }
    }
}

/// Aggregates shown above the supplier table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FornecedorStats {
    pub total: usize,
    pub valor_total: f64,
    /// Share of ME/EPP suppliers, in percent.
    pub percentual_meepp: f64,
}

impl FornecedorStats {
    pub fn from_fornecedores(items: &[Fornecedor]) -> Self {
        let total = items.len();
        let valor_total = items.iter().map(|f| f.valor_total_ganho).sum();
        let small = items
            .iter()
            .filter(|f| f.porte_class().is_small_business())
            .count();
        let percentual_meepp = if total == 0 {
            0.0
        } else {
            small as f64 * 100.0 / total as f64
        };
        Self {
            total,
            valor_total,
            percentual_meepp,
        }
    }
}
