//! Per-screen state.
//!
//! Each screen keeps its own filters, fetch state and table selection.
//! Client-side filters (porte, distance) are applied at read time through
//! the `visible()` helpers so a filter change never needs a new request.

use std::time::Instant;

use lap_client::listing::{ListEvent, RequestSequence};
use lap_client::models::{
    AnomaliaStatus, CnpjCheck, Fonte, HistoricoPrecos, Porte, snap_distance_km,
};
use lap_client::{
    Alerta, Anomalia, AnomaliaResumo, EmpresaImpedida, Fornecedor, Licitacao, Municipio, Page,
    RankingGovernanca, Relatorio,
};
use lap_config::constants::{DEFAULT_PRICE_HISTORY_MONTHS, DISTANCE_STEP_KM, MAX_DISTANCE_KM};
use ratatui::widgets::TableState;

use crate::action::DashboardData;
use crate::app::forms::{AlertaForm, RelatorioForm};
use crate::app::state::{PagedList, Remote, TextInput, Tracked};

#[derive(Debug, Default)]
pub struct DashboardState {
    pub data: Remote<DashboardData>,
}

#[derive(Debug)]
pub struct LicitacoesState {
    pub list: PagedList<Licitacao>,
    pub search: TextInput,
    /// When the pending search text should be applied.
    pub search_deadline: Option<Instant>,
}

impl LicitacoesState {
    pub fn new(per_page: u32) -> Self {
        Self {
            list: PagedList::new(per_page),
            search: TextInput::default(),
            search_deadline: None,
        }
    }

    /// Apply the typed search text as the `search` filter.
    pub fn commit_search(&mut self) -> Option<u64> {
        self.search_deadline = None;
        self.list
            .apply(ListEvent::set_filter("search", self.search.value.clone()))
    }
}

#[derive(Debug)]
pub struct AnomaliasState {
    pub list: PagedList<Anomalia>,
    pub resumo: Remote<AnomaliaResumo>,
}

impl AnomaliasState {
    pub fn new(per_page: u32) -> Self {
        Self {
            list: PagedList::new(per_page),
            resumo: Remote::default(),
        }
    }

    pub fn status(&self) -> Option<AnomaliaStatus> {
        self.list.query.filter("status").and_then(|s| s.parse().ok())
    }

    /// Cycle the status filter: all, pendente, analisada, descartada, all.
    pub fn cycle_status(&mut self) -> Option<u64> {
        let next = match self.status() {
            None => Some(AnomaliaStatus::ALL[0]),
            Some(current) => AnomaliaStatus::ALL
                .iter()
                .position(|s| *s == current)
                .and_then(|idx| AnomaliaStatus::ALL.get(idx + 1).copied()),
        };
        let event = match next {
            Some(status) => ListEvent::set_filter("status", status.as_str()),
            None => ListEvent::ClearFilter("status".to_string()),
        };
        self.list.apply(event)
    }
}

#[derive(Debug, Default)]
pub struct FornecedoresState {
    pub fetch: Tracked<Page<Fornecedor>>,
    pub porte: Option<Porte>,
    pub table: TableState,
}

impl FornecedoresState {
    pub fn all(&self) -> &[Fornecedor] {
        self.fetch.data().map(|p| p.items.as_slice()).unwrap_or(&[])
    }

    pub fn visible(&self) -> Vec<&Fornecedor> {
        self.all()
            .iter()
            .filter(|f| self.porte.is_none_or(|porte| f.porte_class() == porte))
            .collect()
    }

    pub fn cycle_porte(&mut self) {
        self.porte = match self.porte {
            None => Some(Porte::ALL[0]),
            Some(current) => Porte::ALL
                .iter()
                .position(|p| *p == current)
                .and_then(|idx| Porte::ALL.get(idx + 1).copied()),
        };
        self.table.select((!self.visible().is_empty()).then_some(0));
    }
}

#[derive(Debug)]
pub struct MunicipiosState {
    pub fetch: Tracked<Page<Municipio>>,
    pub uf: TextInput,
    pub max_distance_km: u32,
    pub table: TableState,
}

impl Default for MunicipiosState {
    fn default() -> Self {
        Self {
            fetch: Tracked::default(),
            uf: TextInput::default(),
            max_distance_km: MAX_DISTANCE_KM,
            table: TableState::default(),
        }
    }
}

impl MunicipiosState {
    pub fn visible(&self) -> Vec<&Municipio> {
        self.fetch
            .data()
            .map(|p| {
                p.items
                    .iter()
                    .filter(|m| m.within_km(self.max_distance_km))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Move the distance slider one step; returns whether it moved.
    pub fn step_distance(&mut self, up: bool) -> bool {
        let target = if up {
            self.max_distance_km.saturating_add(DISTANCE_STEP_KM)
        } else {
            self.max_distance_km.saturating_sub(DISTANCE_STEP_KM)
        };
        let snapped = snap_distance_km(target);
        let moved = snapped != self.max_distance_km;
        self.max_distance_km = snapped;
        if moved {
            self.table.select((!self.visible().is_empty()).then_some(0));
        }
        moved
    }

    /// UF filter sent to the API, upper-cased.
    pub fn uf_filter(&self) -> Option<String> {
        self.uf.trimmed().map(str::to_uppercase)
    }
}

#[derive(Debug)]
pub struct ItensState {
    pub descricao: TextInput,
    pub meses: u32,
    pub fetch: Tracked<HistoricoPrecos>,
}

impl Default for ItensState {
    fn default() -> Self {
        Self {
            descricao: TextInput::default(),
            meses: DEFAULT_PRICE_HISTORY_MONTHS,
            fetch: Tracked::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct AlertasState {
    pub fetch: Tracked<Page<Alerta>>,
    pub table: TableState,
    pub form: Option<AlertaForm>,
}

impl AlertasState {
    pub fn items(&self) -> &[Alerta] {
        self.fetch.data().map(|p| p.items.as_slice()).unwrap_or(&[])
    }

    pub fn selected(&self) -> Option<&Alerta> {
        self.table.selected().and_then(|idx| self.items().get(idx))
    }
}

#[derive(Debug, Default)]
pub struct CeisState {
    pub fetch: Tracked<Page<EmpresaImpedida>>,
    pub fonte: Option<Fonte>,
    pub uf: TextInput,
    pub cnpj: TextInput,
    /// Last verdict, with the CNPJ it answers.
    pub check: Option<(String, CnpjCheck)>,
    pub checking: bool,
    check_seq: RequestSequence,
    pub table: TableState,
}

impl CeisState {
    pub fn items(&self) -> &[EmpresaImpedida] {
        self.fetch.data().map(|p| p.items.as_slice()).unwrap_or(&[])
    }

    pub fn cycle_fonte(&mut self) {
        self.fonte = match self.fonte {
            None => Some(Fonte::ALL[0]),
            Some(current) => Fonte::ALL
                .iter()
                .position(|f| *f == current)
                .and_then(|idx| Fonte::ALL.get(idx + 1).copied()),
        };
    }

    pub fn uf_filter(&self) -> Option<String> {
        self.uf.trimmed().map(str::to_uppercase)
    }

    /// Start a CNPJ check; verdicts for earlier checks are dropped.
    pub fn start_check(&mut self) -> u64 {
        self.checking = true;
        self.check = None;
        self.check_seq.issue()
    }

    /// Apply a verdict if it answers the latest check. Returns whether it was applied.
    pub fn accept_check(&mut self, seq: u64, cnpj: String, check: CnpjCheck) -> bool {
        if !self.check_seq.is_current(seq) {
            tracing::debug!(seq, latest = self.check_seq.latest(), "discarding stale CNPJ verdict");
            return false;
        }
        self.checking = false;
        self.check = Some((cnpj, check));
        true
    }
}

#[derive(Debug, Default)]
pub struct GovernancaState {
    pub fetch: Tracked<Page<RankingGovernanca>>,
    pub table: TableState,
}

impl GovernancaState {
    pub fn items(&self) -> &[RankingGovernanca] {
        self.fetch.data().map(|p| p.items.as_slice()).unwrap_or(&[])
    }
}

#[derive(Debug, Default)]
pub struct RelatoriosState {
    pub fetch: Tracked<Page<Relatorio>>,
    pub table: TableState,
    pub form: Option<RelatorioForm>,
}

impl RelatoriosState {
    pub fn items(&self) -> &[Relatorio] {
        self.fetch.data().map(|p| p.items.as_slice()).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fornecedor(porte: &str) -> Fornecedor {
        Fornecedor {
            id: porte.to_string(),
            razao_social: format!("Empresa {porte}"),
            cnpj: None,
            porte: Some(porte.to_string()),
            total_vitorias: 1,
            valor_total_ganho: 10.0,
            impedida: false,
        }
    }

    #[test]
    fn status_cycle_returns_to_all() {
        let mut state = AnomaliasState::new(20);
        let mut seen = Vec::new();
        for _ in 0..4 {
            assert!(state.cycle_status().is_some());
            seen.push(state.status());
        }
        assert_eq!(
            seen,
            vec![
                Some(AnomaliaStatus::Pendente),
                Some(AnomaliaStatus::Analisada),
                Some(AnomaliaStatus::Descartada),
                None,
            ]
        );
    }

    #[test]
    fn porte_filter_is_local() {
        let mut state = FornecedoresState::default();
        let seq = state.fetch.issue();
        state.fetch.accept(
            seq,
            Ok(Page::single(vec![
                fornecedor("ME"),
                fornecedor("EPP"),
                fornecedor("Demais"),
            ])),
        );
        assert_eq!(state.visible().len(), 3);
        state.cycle_porte();
        assert_eq!(state.porte, Some(Porte::Me));
        assert_eq!(state.visible().len(), 1);
        state.cycle_porte();
        state.cycle_porte();
        state.cycle_porte();
        assert_eq!(state.porte, None);
    }

    #[test]
    fn distance_stays_in_range() {
        let mut state = MunicipiosState::default();
        assert!(!state.step_distance(true));
        assert_eq!(state.max_distance_km, 200);
        for _ in 0..30 {
            state.step_distance(false);
        }
        assert_eq!(state.max_distance_km, 50);
    }

    #[test]
    fn only_latest_cnpj_verdict_applies() {
        let mut state = CeisState::default();
        let first = state.start_check();
        let second = state.start_check();

        assert!(state.accept_check(second, "22".to_string(), CnpjCheck::Clear));
        assert!(!state.accept_check(
            first,
            "11".to_string(),
            CnpjCheck::CheckFailed {
                reason: "timeout".to_string()
            }
        ));
        assert!(!state.checking);
        assert!(matches!(state.check, Some((ref cnpj, CnpjCheck::Clear)) if cnpj == "22"));
    }

    #[test]
    fn fonte_cycle() {
        let mut state = CeisState::default();
        state.cycle_fonte();
        assert_eq!(state.fonte, Some(Fonte::Ceis));
        state.cycle_fonte();
        assert_eq!(state.fonte, Some(Fonte::Cnep));
        state.cycle_fonte();
        assert_eq!(state.fonte, None);
    }
}
