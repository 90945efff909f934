//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all resource types as pretty-printed JSON.
//!
//! Paginated lists carry their position (`page`, `pages`, `total`) next to `items`.

use anyhow::Result;
use lap_client::models::{
    Alerta, Anomalia, AnomaliaResumo, EmpresaImpedida, HistoricoPrecos, Licitacao, Municipio,
    RankingGovernanca, Relatorio,
};

use crate::formatters::{
    CnpjCheckOutput, DashboardOutput, Formatter, FornecedoresOutput, PageOutput,
};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_dashboard(&self, dashboard: &DashboardOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(dashboard)?)
    }

    fn format_licitacoes(&self, page: &PageOutput<Licitacao>) -> Result<String> {
        Ok(serde_json::to_string_pretty(page)?)
    }

    fn format_anomalias(&self, page: &PageOutput<Anomalia>) -> Result<String> {
        Ok(serde_json::to_string_pretty(page)?)
    }

    fn format_anomalias_resumo(&self, resumo: &AnomaliaResumo) -> Result<String> {
        Ok(serde_json::to_string_pretty(resumo)?)
    }

    fn format_fornecedores(&self, output: &FornecedoresOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(output)?)
    }

    fn format_municipios(&self, municipios: &[Municipio]) -> Result<String> {
        Ok(serde_json::to_string_pretty(municipios)?)
    }

    fn format_historico_precos(&self, historico: &HistoricoPrecos) -> Result<String> {
        Ok(serde_json::to_string_pretty(historico)?)
    }

    fn format_alertas(&self, alertas: &[Alerta]) -> Result<String> {
        Ok(serde_json::to_string_pretty(alertas)?)
    }

    fn format_empresas_impedidas(&self, empresas: &[EmpresaImpedida]) -> Result<String> {
        Ok(serde_json::to_string_pretty(empresas)?)
    }

    fn format_cnpj_check(&self, output: &CnpjCheckOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(output)?)
    }

    fn format_ranking_governanca(&self, ranking: &[RankingGovernanca]) -> Result<String> {
        Ok(serde_json::to_string_pretty(ranking)?)
    }

    fn format_relatorios(&self, relatorios: &[Relatorio]) -> Result<String> {
        Ok(serde_json::to_string_pretty(relatorios)?)
    }
}
