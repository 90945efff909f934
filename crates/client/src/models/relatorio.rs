//! Report models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::string_from_number_or_string;

/// A generated (or generating) report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relatorio {
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub id: String,
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub formato: String,
    #[serde(default)]
    pub parametros: Option<serde_json::Value>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TipoRelatorio {
    #[default]
    Diario,
    Licitacoes,
    Fornecedores,
}

impl TipoRelatorio {
    pub const ALL: [TipoRelatorio; 3] = [Self::Diario, Self::Licitacoes, Self::Fornecedores];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diario => "diario",
            Self::Licitacoes => "licitacoes",
            Self::Fornecedores => "fornecedores",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Diario => "Relatório Diário",
            Self::Licitacoes => "Relatório de Licitações",
            Self::Fornecedores => "Ranking de Fornecedores",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Diario => Self::Licitacoes,
            Self::Licitacoes => Self::Fornecedores,
            Self::Fornecedores => Self::Diario,
        }
    }
}

impl FromStr for TipoRelatorio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diario" | "diário" => Ok(Self::Diario),
            "licitacoes" | "licitações" => Ok(Self::Licitacoes),
            "fornecedores" => Ok(Self::Fornecedores),
            other => Err(format!(
                "tipo inválido '{other}' (esperado: diario, licitacoes, fornecedores)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatoRelatorio {
    #[default]
    Pdf,
    Excel,
}

impl FormatoRelatorio {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "excel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Excel => "Excel",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Pdf => Self::Excel,
            Self::Excel => Self::Pdf,
        }
    }
}

impl fmt::Display for FormatoRelatorio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatoRelatorio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "excel" | "xlsx" => Ok(Self::Excel),
            other => Err(format!("formato inválido '{other}' (esperado: pdf, excel)")),
        }
    }
}

/// Body of `POST /relatorios/gerar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PedidoRelatorio {
    pub tipo: String,
    pub formato: String,
    pub data_inicio: String,
    pub data_fim: String,
}

impl PedidoRelatorio {
    /// Build a request; missing dates default to `today` (`YYYY-MM-DD`).
    pub fn new(
        tipo: TipoRelatorio,
        formato: FormatoRelatorio,
        data_inicio: Option<NaiveDate>,
        data_fim: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let fmt = |d: Option<NaiveDate>| d.unwrap_or(today).format("%Y-%m-%d").to_string();
        Self {
            tipo: tipo.as_str().to_string(),
            formato: formato.as_str().to_string(),
            data_inicio: fmt(data_inicio),
            data_fim: fmt(data_fim),
        }
    }

    /// Like [`PedidoRelatorio::new`] using the local calendar date.
    pub fn for_today(
        tipo: TipoRelatorio,
        formato: FormatoRelatorio,
        data_inicio: Option<NaiveDate>,
        data_fim: Option<NaiveDate>,
    ) -> Self {
        Self::new(
            tipo,
            formato,
            data_inicio,
            data_fim,
            chrono::Local::now().date_naive(),
        )
    }
}

/// Parse a `YYYY-MM-DD` date, treating blank input as absent.
pub fn parse_report_date(raw: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("data inválida '{trimmed}' (use AAAA-MM-DD)"))
}
