//! Action protocol for async TUI event handling.
//!
//! Actions represent both user inputs and async API operation results.
//!
//! # Module Structure
//!
//! - `variants`: the `Action` enum and its payload types
//! - `redaction`: logging wrapper that hides personal data (`RedactedAction`)
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by the app state machine in `App`)
//! - Async task execution (handled by the runtime module)
//! - UI rendering (handled by the ui module)

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::{Action, ApiResult, DashboardData};

impl Action {
    /// Stable variant name used as the `action_type` span field.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Quit => "Quit",
            Action::Tick => "Tick",
            Action::Input(_) => "Input",
            Action::Resize(..) => "Resize",
            Action::NavigateTo(_) => "NavigateTo",
            Action::Refresh => "Refresh",
            Action::Reload(_) => "Reload",
            Action::CycleTheme => "CycleTheme",
            Action::Loading(_) => "Loading",
            Action::Notify(..) => "Notify",
            Action::ShowError(_) => "ShowError",
            Action::DismissError => "DismissError",
            Action::LoadDashboard => "LoadDashboard",
            Action::LoadLicitacoes { .. } => "LoadLicitacoes",
            Action::LoadAnomalias { .. } => "LoadAnomalias",
            Action::LoadAnomaliasResumo => "LoadAnomaliasResumo",
            Action::LoadFornecedores { .. } => "LoadFornecedores",
            Action::LoadMunicipios { .. } => "LoadMunicipios",
            Action::LoadHistoricoPrecos { .. } => "LoadHistoricoPrecos",
            Action::LoadAlertas { .. } => "LoadAlertas",
            Action::LoadEmpresasImpedidas { .. } => "LoadEmpresasImpedidas",
            Action::LoadGovernanca { .. } => "LoadGovernanca",
            Action::LoadRelatorios { .. } => "LoadRelatorios",
            Action::DashboardLoaded(_) => "DashboardLoaded",
            Action::LicitacoesLoaded { .. } => "LicitacoesLoaded",
            Action::AnomaliasLoaded { .. } => "AnomaliasLoaded",
            Action::AnomaliasResumoLoaded(_) => "AnomaliasResumoLoaded",
            Action::FornecedoresLoaded { .. } => "FornecedoresLoaded",
            Action::MunicipiosLoaded { .. } => "MunicipiosLoaded",
            Action::HistoricoPrecosLoaded { .. } => "HistoricoPrecosLoaded",
            Action::AlertasLoaded { .. } => "AlertasLoaded",
            Action::EmpresasImpedidasLoaded { .. } => "EmpresasImpedidasLoaded",
            Action::GovernancaLoaded { .. } => "GovernancaLoaded",
            Action::RelatoriosLoaded { .. } => "RelatoriosLoaded",
            Action::CreateAlerta(_) => "CreateAlerta",
            Action::AlertaCreated(_) => "AlertaCreated",
            Action::ToggleAlerta { .. } => "ToggleAlerta",
            Action::CheckCnpj { .. } => "CheckCnpj",
            Action::CnpjChecked { .. } => "CnpjChecked",
            Action::RefreshCeis => "RefreshCeis",
            Action::GenerateRelatorio(_) => "GenerateRelatorio",
            Action::RelatorioGenerated(_) => "RelatorioGenerated",
            Action::ExportData { .. } => "ExportData",
        }
    }
}
