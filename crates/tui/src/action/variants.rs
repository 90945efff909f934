//! Action enum definitions for the TUI event system.
//!
//! # Action Categories
//!
//! - **Lifecycle**: quit, ticks, raw terminal input
//! - **Navigation**: screen switching, refresh, theme
//! - **Feedback**: loading flag, toasts, blocking errors
//! - **API Triggers**: commands to load data or run a mutation
//! - **API Results**: async responses from the LAP API
//! - **Export**: writing the current screen's records to disk

use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use lap_client::models::{CnpjCheck, HistoricoPrecos, Kpis, SerieMensal};
use lap_client::{
    Alerta, Anomalia, AnomaliaResumo, ClientError, EmpresaImpedida, ExportFormat, Fornecedor,
    Licitacao, ListQuery, Municipio, NovoAlerta, Page, PedidoRelatorio, RankingGovernanca,
    Relatorio,
};
use serde_json::Value;

use crate::app::CurrentScreen;
use crate::ui::ToastLevel;

/// Result of an API call as carried by an action.
///
/// `ClientError` is not `Clone`, so it travels behind an `Arc`.
pub type ApiResult<T> = Result<T, Arc<ClientError>>;

/// Dashboard payload: KPI cards plus the monthly series.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub kpis: Kpis,
    pub por_mes: SerieMensal,
}

/// Unified action type for async TUI event handling.
///
/// Actions flow through a channel from input handlers and async tasks
/// to the main app state, where they trigger state mutations.
#[derive(Debug, Clone)]
pub enum Action {
    // Lifecycle
    /// Quit the application
    Quit,
    /// Periodic tick: spinner, toast expiry, search debounce
    Tick,
    /// Raw keyboard input
    Input(KeyEvent),
    /// Terminal resized to (width, height)
    Resize(u16, u16),

    // Navigation
    /// Switch to a screen
    NavigateTo(CurrentScreen),
    /// Drop cached responses and reload the current screen
    Refresh,
    /// Reload a screen's data with its current filters
    ///
    /// Translated into the screen's `Load*` action by the runtime.
    Reload(CurrentScreen),
    /// Cycle through the color themes
    CycleTheme,

    // Feedback
    /// Set the global loading indicator
    Loading(bool),
    /// Show a toast notification
    Notify(ToastLevel, String),
    /// Show a blocking error popup
    ShowError(String),
    /// Close the error popup
    DismissError,

    // API Triggers
    /// Load KPIs and the monthly series
    LoadDashboard,
    /// Load one page of procurement notices
    LoadLicitacoes { seq: u64, query: ListQuery },
    /// Load one page of anomalies
    LoadAnomalias { seq: u64, query: ListQuery },
    /// Load anomaly summary statistics
    LoadAnomaliasResumo,
    /// Load the supplier ranking
    LoadFornecedores { seq: u64, limite: u32 },
    /// Load municipalities, optionally for one state
    LoadMunicipios { seq: u64, uf: Option<String> },
    /// Load the price history of an item description
    LoadHistoricoPrecos {
        seq: u64,
        descricao: String,
        meses: u32,
    },
    /// Load alert subscriptions
    LoadAlertas { seq: u64 },
    /// Load debarred companies
    LoadEmpresasImpedidas {
        seq: u64,
        fonte: Option<String>,
        uf: Option<String>,
    },
    /// Load the governance ranking
    LoadGovernanca { seq: u64 },
    /// Load generated reports
    LoadRelatorios { seq: u64 },

    // API Results
    DashboardLoaded(ApiResult<DashboardData>),
    LicitacoesLoaded {
        seq: u64,
        result: ApiResult<Page<Licitacao>>,
    },
    AnomaliasLoaded {
        seq: u64,
        result: ApiResult<Page<Anomalia>>,
    },
    AnomaliasResumoLoaded(ApiResult<AnomaliaResumo>),
    FornecedoresLoaded {
        seq: u64,
        result: ApiResult<Page<Fornecedor>>,
    },
    MunicipiosLoaded {
        seq: u64,
        result: ApiResult<Page<Municipio>>,
    },
    HistoricoPrecosLoaded {
        seq: u64,
        result: ApiResult<HistoricoPrecos>,
    },
    AlertasLoaded {
        seq: u64,
        result: ApiResult<Page<Alerta>>,
    },
    EmpresasImpedidasLoaded {
        seq: u64,
        result: ApiResult<Page<EmpresaImpedida>>,
    },
    GovernancaLoaded {
        seq: u64,
        result: ApiResult<Page<RankingGovernanca>>,
    },
    RelatoriosLoaded {
        seq: u64,
        result: ApiResult<Page<Relatorio>>,
    },

    // Mutations
    /// Submit the alert form
    CreateAlerta(NovoAlerta),
    /// Alert creation acknowledged (or failed)
    AlertaCreated(ApiResult<()>),
    /// Flip an alert's active flag; `ativo` is the current value
    ToggleAlerta { id: String, ativo: bool },
    /// Check a CNPJ (digits only) against the debarment registry
    CheckCnpj { seq: u64, cnpj: String },
    /// Result of a CNPJ check; never an error
    CnpjChecked {
        seq: u64,
        cnpj: String,
        check: CnpjCheck,
    },
    /// Ask the backend to reload the CEIS/CNEP registry
    RefreshCeis,
    /// Submit the report form
    GenerateRelatorio(PedidoRelatorio),
    /// Report generation acknowledged (or failed)
    RelatorioGenerated(ApiResult<Option<Relatorio>>),

    // Export
    /// Write records to `{dir}/{filename}.{format}`
    ExportData {
        records: Vec<Value>,
        dir: PathBuf,
        filename: String,
        format: ExportFormat,
    },
}
