//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Apply API results to per-screen state (discarding stale list responses)
//! - Apply navigation, theme, toast and popup actions
//!
//! Does NOT handle:
//! - Does NOT perform async operations (handled by the runtime's side effects)
//! - Does NOT translate keys (see `input`)

use lap_client::{ClientError, Relatorio};
use lap_config::Theme;

use crate::action::{Action, ApiResult};
use crate::app::App;
use crate::ui::toast::{Toast, ToastLevel};

/// Blocking message for a failed write.
fn write_error(context: &str, error: &ClientError) -> String {
    match error {
        ClientError::Validation(message) => format!("{context}: {message}"),
        other => format!("{context}: {}", other.user_message()),
    }
}

impl App {
    /// Apply an action to the state. Side effects run separately in the runtime.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Tick => {
                if self.loading {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                self.toasts.retain(|t| !t.is_expired());
            }
            Action::NavigateTo(screen) => {
                self.current_screen = screen;
                self.show_help = false;
            }
            Action::CycleTheme => {
                self.color_theme = self.color_theme.cycle_next();
                self.theme = Theme::from_color_theme(self.color_theme);
                self.push_toast(Toast::info(format!(
                    "Tema: {}",
                    self.color_theme.display_name()
                )));
            }
            Action::Loading(loading) => self.loading = loading,
            Action::Notify(level, message) => self.push_toast(Toast::new(message, level)),
            Action::ShowError(message) => self.error_popup = Some(message),
            Action::DismissError => self.error_popup = None,

            Action::LoadDashboard => self.dashboard.data.start(),
            Action::LoadAnomaliasResumo => self.anomalias.resumo.start(),

            Action::DashboardLoaded(result) => self.dashboard.data.resolve(result),
            Action::LicitacoesLoaded { seq, result } => {
                self.licitacoes.list.accept(seq, result);
            }
            Action::AnomaliasLoaded { seq, result } => {
                self.anomalias.list.accept(seq, result);
            }
            Action::AnomaliasResumoLoaded(result) => self.anomalias.resumo.resolve(result),
            Action::FornecedoresLoaded { seq, result } => {
                if self.fornecedores.fetch.accept(seq, result) {
                    let len = self.fornecedores.visible().len();
                    self.fornecedores.table.select((len > 0).then_some(0));
                }
            }
            Action::MunicipiosLoaded { seq, result } => {
                if self.municipios.fetch.accept(seq, result) {
                    let len = self.municipios.visible().len();
                    self.municipios.table.select((len > 0).then_some(0));
                }
            }
            Action::HistoricoPrecosLoaded { seq, result } => {
                self.itens.fetch.accept(seq, result);
            }
            Action::AlertasLoaded { seq, result } => {
                if self.alertas.fetch.accept(seq, result) {
                    let len = self.alertas.items().len();
                    let keep = self.alertas.table.selected().filter(|idx| *idx < len);
                    self.alertas.table.select(keep.or((len > 0).then_some(0)));
                }
            }
            Action::EmpresasImpedidasLoaded { seq, result } => {
                if self.ceis.fetch.accept(seq, result) {
                    let len = self.ceis.items().len();
                    self.ceis.table.select((len > 0).then_some(0));
                }
            }
            Action::GovernancaLoaded { seq, result } => {
                if self.governanca.fetch.accept(seq, result) {
                    let len = self.governanca.items().len();
                    self.governanca.table.select((len > 0).then_some(0));
                }
            }
            Action::RelatoriosLoaded { seq, result } => {
                if self.relatorios.fetch.accept(seq, result) {
                    let len = self.relatorios.items().len();
                    self.relatorios.table.select((len > 0).then_some(0));
                }
            }

            Action::AlertaCreated(result) => self.on_alerta_created(result),
            Action::CnpjChecked { seq, cnpj, check } => {
                self.ceis.accept_check(seq, cnpj, check);
            }
            Action::RelatorioGenerated(result) => self.on_relatorio_generated(result),

            // Handled by the runtime or side effects only.
            Action::Quit
            | Action::Input(_)
            | Action::Resize(..)
            | Action::Refresh
            | Action::Reload(_)
            | Action::LoadLicitacoes { .. }
            | Action::LoadAnomalias { .. }
            | Action::LoadFornecedores { .. }
            | Action::LoadMunicipios { .. }
            | Action::LoadHistoricoPrecos { .. }
            | Action::LoadAlertas { .. }
            | Action::LoadEmpresasImpedidas { .. }
            | Action::LoadGovernanca { .. }
            | Action::LoadRelatorios { .. }
            | Action::CheckCnpj { .. }
            | Action::CreateAlerta(_)
            | Action::ToggleAlerta { .. }
            | Action::RefreshCeis
            | Action::GenerateRelatorio(_)
            | Action::ExportData { .. } => {}
        }
    }

    fn on_alerta_created(&mut self, result: ApiResult<()>) {
        match result {
            Ok(()) => {
                self.alertas.form = None;
                self.push_toast(Toast::success("Alerta criado com sucesso."));
            }
            Err(e) => {
                if let Some(form) = self.alertas.form.as_mut() {
                    form.submitting = false;
                }
                self.error_popup = Some(write_error("Erro ao criar alerta", &e));
            }
        }
    }

    fn on_relatorio_generated(&mut self, result: ApiResult<Option<Relatorio>>) {
        match result {
            Ok(relatorio) => {
                self.relatorios.form = None;
                let message = match relatorio {
                    Some(r) => format!(
                        "Relatório gerado: {}",
                        r.filename.as_deref().unwrap_or(r.id.as_str())
                    ),
                    None => "Relatório solicitado.".to_string(),
                };
                self.push_toast(Toast::new(message, ToastLevel::Success));
            }
            Err(e) => {
                if let Some(form) = self.relatorios.form.as_mut() {
                    form.submitting = false;
                }
                self.error_popup = Some(write_error("Erro ao gerar relatório", &e));
            }
        }
    }
}
