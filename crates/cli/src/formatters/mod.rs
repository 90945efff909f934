//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the table, JSON, and CSV output formats.
//! - Implement the `Formatter` trait for every LAP resource.
//!
//! Does NOT handle:
//! - Printing (formatters return strings; see `common::output_result`).
//! - Record export files (see `lap_client::export`).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty result | Rationale |
//! |--------|--------------|-----------|
//! | JSON | `[]` or an object with an empty list | Machine parseable |
//! | CSV | Header row only | Pipelines can still read the columns |
//! | Table | Human message (`Nenhuma licitação encontrada.`) | Interactive feedback |
//!
//! Missing optional values render as `-` in tables and as empty cells in CSV.

use std::str::FromStr;

use anyhow::Result;
use lap_client::models::{
    Alerta, Anomalia, AnomaliaResumo, CnpjCheck, EmpresaImpedida, Fornecedor, FornecedorStats,
    HistoricoPrecos, Kpis, Licitacao, Municipio, PontoMensal, RankingGovernanca, Relatorio,
};
use serde::Serialize;

mod common;
mod csv;
mod json;
mod table;

pub use common::{output_result, write_to_file};
pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: table, json, csv", s),
        }
    }
}

/// One page of a paginated list with its position.
#[derive(Debug, Clone, Serialize)]
pub struct PageOutput<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub pages: u32,
}

impl<T> PageOutput<T> {
    pub fn pager_label(&self) -> String {
        format!("Página {} de {} ({} registros)", self.page, self.pages, self.total)
    }
}

/// Dashboard KPIs plus the most recent months of the monthly series.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardOutput {
    pub kpis: Kpis,
    pub por_mes: Vec<PontoMensal>,
}

/// Supplier ranking with the aggregates shown above it.
#[derive(Debug, Clone, Serialize)]
pub struct FornecedoresOutput {
    pub total: usize,
    pub valor_total: f64,
    pub percentual_meepp: f64,
    pub fornecedores: Vec<Fornecedor>,
}

impl FornecedoresOutput {
    pub fn new(fornecedores: Vec<Fornecedor>) -> Self {
        let FornecedorStats {
            total,
            valor_total,
            percentual_meepp,
        } = FornecedorStats::from_fornecedores(&fornecedores);
        Self {
            total,
            valor_total,
            percentual_meepp,
            fornecedores,
        }
    }
}

/// Result of a debarment lookup.
#[derive(Debug, Clone, Serialize)]
pub struct CnpjCheckOutput {
    pub cnpj: String,
    pub impedida: bool,
    #[serde(flatten)]
    pub check: CnpjCheck,
}

impl CnpjCheckOutput {
    pub fn new(cnpj: String, check: CnpjCheck) -> Self {
        Self {
            cnpj,
            impedida: check.impedida(),
            check,
        }
    }
}

/// Trait for formatting LAP resources in different output formats.
pub trait Formatter {
    fn format_dashboard(&self, dashboard: &DashboardOutput) -> Result<String>;
    fn format_licitacoes(&self, page: &PageOutput<Licitacao>) -> Result<String>;
    fn format_anomalias(&self, page: &PageOutput<Anomalia>) -> Result<String>;
    fn format_anomalias_resumo(&self, resumo: &AnomaliaResumo) -> Result<String>;
    fn format_fornecedores(&self, output: &FornecedoresOutput) -> Result<String>;
    fn format_municipios(&self, municipios: &[Municipio]) -> Result<String>;
    fn format_historico_precos(&self, historico: &HistoricoPrecos) -> Result<String>;
    fn format_alertas(&self, alertas: &[Alerta]) -> Result<String>;
    fn format_empresas_impedidas(&self, empresas: &[EmpresaImpedida]) -> Result<String>;
    fn format_cnpj_check(&self, output: &CnpjCheckOutput) -> Result<String>;
    fn format_ranking_governanca(&self, ranking: &[RankingGovernanca]) -> Result<String>;
    fn format_relatorios(&self, relatorios: &[Relatorio]) -> Result<String>;
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parsing_is_case_insensitive() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn fornecedores_output_computes_stats() {
        let output = FornecedoresOutput::new(vec![
            fixtures::fornecedor("A", "ME", 100.0),
            fixtures::fornecedor("B", "Demais", 300.0),
        ]);
        assert_eq!(output.total, 2);
        assert_eq!(output.valor_total, 400.0);
        assert_eq!(output.percentual_meepp, 50.0);
    }

    #[test]
    fn cnpj_check_output_flattens_result() {
        let output = CnpjCheckOutput::new(
            "12345678000190".to_string(),
            CnpjCheck::CheckFailed {
                reason: "Não foi possível conectar à API".to_string(),
            },
        );
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["impedida"], false);
        assert_eq!(value["resultado"], "check_failed");
        assert_eq!(value["reason"], "Não foi possível conectar à API");
    }
}
