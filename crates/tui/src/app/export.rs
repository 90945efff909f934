//! Export payloads for the TUI app.
//!
//! Responsibilities:
//! - Collect the records currently shown on each screen
//! - Name the export file after the screen
//!
//! Does NOT handle:
//! - Does NOT perform actual file I/O (handled by Action::ExportData)

use lap_client::ExportFormat;
use lap_client::export::to_records;
use serde_json::Value;

use crate::action::Action;
use crate::app::App;
use crate::app::state::CurrentScreen;
use crate::ui::toast::ToastLevel;

/// Base file name for exports from `screen`.
pub fn export_filename(screen: CurrentScreen) -> &'static str {
    match screen {
        CurrentScreen::Dashboard => "licitacoes_por_mes",
        CurrentScreen::Licitacoes => "licitacoes",
        CurrentScreen::Fornecedores => "fornecedores",
        CurrentScreen::Municipios => "municipios",
        CurrentScreen::Itens => "historico_precos",
        CurrentScreen::Anomalias => "anomalias",
        CurrentScreen::Alertas => "alertas",
        CurrentScreen::Ceis => "empresas_impedidas",
        CurrentScreen::Governanca => "ranking_governanca",
        CurrentScreen::Relatorios => "relatorios",
    }
}

impl App {
    /// Records visible on the current screen, after client-side filters.
    pub fn export_records(&self) -> Result<Vec<Value>, lap_client::ExportError> {
        match self.current_screen {
            CurrentScreen::Dashboard => match &self.dashboard.data.data {
                Some(data) => to_records(&data.por_mes.series),
                None => Ok(Vec::new()),
            },
            CurrentScreen::Licitacoes => to_records(self.licitacoes.list.items()),
            CurrentScreen::Fornecedores => to_records(&self.fornecedores.visible()),
            CurrentScreen::Municipios => to_records(&self.municipios.visible()),
            CurrentScreen::Itens => match self.itens.fetch.data() {
                Some(historico) => to_records(&historico.historico),
                None => Ok(Vec::new()),
            },
            CurrentScreen::Anomalias => to_records(self.anomalias.list.items()),
            CurrentScreen::Alertas => to_records(self.alertas.items()),
            CurrentScreen::Ceis => to_records(self.ceis.items()),
            CurrentScreen::Governanca => to_records(self.governanca.items()),
            CurrentScreen::Relatorios => to_records(self.relatorios.items()),
        }
    }

    /// Export request for the current screen.
    pub fn export_action(&self, format: ExportFormat) -> Action {
        match self.export_records() {
            Ok(records) => Action::ExportData {
                records,
                dir: self.export_dir.clone(),
                filename: export_filename(self.current_screen).to_string(),
                format,
            },
            Err(e) => Action::Notify(ToastLevel::Error, format!("Falha ao exportar: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lap_client::Page;
    use lap_client::models::Fornecedor;

    #[test]
    fn export_follows_porte_filter() {
        let mut app = App::new(None, CurrentScreen::Fornecedores);
        let fornecedor = |id: &str, porte: &str| Fornecedor {
            id: id.to_string(),
            razao_social: format!("Empresa {id}"),
            cnpj: None,
            porte: Some(porte.to_string()),
            total_vitorias: 2,
            valor_total_ganho: 100.0,
            impedida: false,
        };
        let seq = app.fornecedores.fetch.issue();
        app.fornecedores.fetch.accept(
            seq,
            Ok(Page::single(vec![
                fornecedor("1", "ME"),
                fornecedor("2", "Demais"),
            ])),
        );
        app.fornecedores.cycle_porte();

        match app.export_action(ExportFormat::Json) {
            Action::ExportData {
                records, filename, ..
            } => {
                assert_eq!(filename, "fornecedores");
                assert_eq!(records.len(), 1);
                assert_eq!(records[0]["id"], "1");
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn nothing_loaded_exports_no_records() {
        let app = App::new(None, CurrentScreen::Itens);
        match app.export_action(ExportFormat::Csv) {
            Action::ExportData { records, .. } => assert!(records.is_empty()),
            other => panic!("unexpected action {other:?}"),
        }
    }
}
