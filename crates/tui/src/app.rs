//! Application state and rendering.
//!
//! This module contains the main application state, input handling,
//! and rendering logic for the TUI.
//!
//! The module is organized into submodules:
//! - `state`: Core state types (CurrentScreen, Remote, Tracked, PagedList)
//! - `pages`: Per-screen state and client-side filters
//! - `forms`: Alert and report forms
//! - `input`: Key handling
//! - `actions`: Action handling
//! - `export`: Export payloads per screen
//! - `render`: Rendering logic

pub mod forms;
pub mod pages;
pub mod state;

mod actions;
mod export;
mod input;
mod render;

pub use state::{CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT};

use std::path::PathBuf;
use std::time::{Duration, Instant};

use lap_config::constants::{DEFAULT_PER_PAGE, DEFAULT_SEARCH_DEBOUNCE_MS, DEFAULT_TOP_FORNECEDORES};
use lap_config::{ColorTheme, PersistedState, Theme};

use crate::action::Action;
use crate::app::pages::{
    AlertasState, AnomaliasState, CeisState, DashboardState, FornecedoresState, GovernancaState,
    ItensState, LicitacoesState, MunicipiosState, RelatoriosState,
};
use crate::ui::toast::Toast;

/// Main application state.
pub struct App {
    pub current_screen: CurrentScreen,
    pub color_theme: ColorTheme,
    pub theme: Theme,

    pub dashboard: DashboardState,
    pub licitacoes: LicitacoesState,
    pub fornecedores: FornecedoresState,
    pub municipios: MunicipiosState,
    pub itens: ItensState,
    pub anomalias: AnomaliasState,
    pub alertas: AlertasState,
    pub ceis: CeisState,
    pub governanca: GovernancaState,
    pub relatorios: RelatoriosState,

    /// Any request in flight (drives the footer spinner).
    pub loading: bool,
    pub spinner_frame: u8,
    pub toasts: Vec<Toast>,
    /// Blocking error message; dismissed with Esc or Enter.
    pub error_popup: Option<String>,
    pub show_help: bool,
    pub export_dir: PathBuf,
    pub search_debounce: Duration,
    /// Shown in the header; empty hides it.
    pub api_base_url: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new(None, CurrentScreen::Dashboard)
    }
}

impl App {
    /// Create the app on `initial`, restoring the persisted theme if any.
    pub fn new(persisted: Option<PersistedState>, initial: CurrentScreen) -> Self {
        Self::with_per_page(persisted, initial, DEFAULT_PER_PAGE)
    }

    pub fn with_per_page(
        persisted: Option<PersistedState>,
        initial: CurrentScreen,
        per_page: u32,
    ) -> Self {
        let color_theme = persisted.map(|p| p.color_theme).unwrap_or_default();
        Self {
            current_screen: initial,
            color_theme,
            theme: Theme::from_color_theme(color_theme),
            dashboard: DashboardState::default(),
            licitacoes: LicitacoesState::new(per_page),
            fornecedores: FornecedoresState::default(),
            municipios: MunicipiosState::default(),
            itens: ItensState::default(),
            anomalias: AnomaliasState::new(per_page),
            alertas: AlertasState::default(),
            ceis: CeisState::default(),
            governanca: GovernancaState::default(),
            relatorios: RelatoriosState::default(),
            loading: false,
            spinner_frame: 0,
            toasts: Vec::new(),
            error_popup: None,
            show_help: false,
            export_dir: PathBuf::from("."),
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            api_base_url: String::new(),
        }
    }

    /// State to write on exit.
    pub fn persisted_state(&self) -> PersistedState {
        PersistedState {
            color_theme: self.color_theme,
            last_route: Some(self.current_screen.route().to_string()),
        }
    }

    /// Requests that populate the current screen.
    pub fn load_actions_for_screen(&mut self) -> Vec<Action> {
        self.reload_actions(self.current_screen)
    }

    /// Requests that re-fetch `screen`, each list request with a fresh sequence.
    pub fn reload_actions(&mut self, screen: CurrentScreen) -> Vec<Action> {
        match screen {
            CurrentScreen::Dashboard => vec![Action::LoadDashboard],
            CurrentScreen::Licitacoes => {
                let seq = self.licitacoes.list.reload();
                vec![Action::LoadLicitacoes {
                    seq,
                    query: self.licitacoes.list.query.clone(),
                }]
            }
            CurrentScreen::Fornecedores => vec![Action::LoadFornecedores {
                seq: self.fornecedores.fetch.issue(),
                limite: DEFAULT_TOP_FORNECEDORES,
            }],
            CurrentScreen::Municipios => vec![self.load_municipios()],
            CurrentScreen::Itens => self.load_historico().into_iter().collect(),
            CurrentScreen::Anomalias => {
                let seq = self.anomalias.list.reload();
                vec![
                    Action::LoadAnomalias {
                        seq,
                        query: self.anomalias.list.query.clone(),
                    },
                    Action::LoadAnomaliasResumo,
                ]
            }
            CurrentScreen::Alertas => vec![Action::LoadAlertas {
                seq: self.alertas.fetch.issue(),
            }],
            CurrentScreen::Ceis => vec![self.load_empresas_impedidas()],
            CurrentScreen::Governanca => vec![Action::LoadGovernanca {
                seq: self.governanca.fetch.issue(),
            }],
            CurrentScreen::Relatorios => vec![Action::LoadRelatorios {
                seq: self.relatorios.fetch.issue(),
            }],
        }
    }

    pub(crate) fn load_municipios(&mut self) -> Action {
        let seq = self.municipios.fetch.issue();
        Action::LoadMunicipios {
            seq,
            uf: self.municipios.uf_filter(),
        }
    }

    /// Price history request; nothing is fetched until a description is typed.
    pub(crate) fn load_historico(&mut self) -> Option<Action> {
        let descricao = self.itens.descricao.trimmed()?.to_string();
        let seq = self.itens.fetch.issue();
        Some(Action::LoadHistoricoPrecos {
            seq,
            descricao,
            meses: self.itens.meses,
        })
    }

    pub(crate) fn load_empresas_impedidas(&mut self) -> Action {
        let seq = self.ceis.fetch.issue();
        Action::LoadEmpresasImpedidas {
            seq,
            fonte: self.ceis.fonte.map(|f| f.as_str().to_string()),
            uf: self.ceis.uf_filter(),
        }
    }

    /// Periodic work: applies the pending Licitações search once the debounce elapses.
    pub fn handle_tick(&mut self) -> Option<Action> {
        self.handle_tick_at(Instant::now())
    }

    pub fn handle_tick_at(&mut self, now: Instant) -> Option<Action> {
        let deadline = self.licitacoes.search_deadline?;
        if now < deadline {
            return None;
        }
        let seq = self.licitacoes.commit_search()?;
        Some(Action::LoadLicitacoes {
            seq,
            query: self.licitacoes.list.query.clone(),
        })
    }

    pub(crate) fn push_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// Whether a text field or form currently captures typed characters.
    pub fn is_editing(&self) -> bool {
        self.alertas.form.is_some()
            || self.relatorios.form.is_some()
            || self.licitacoes.search.focused
            || self.municipios.uf.focused
            || self.itens.descricao.focused
            || self.ceis.uf.focused
            || self.ceis.cnpj.focused
    }
}
