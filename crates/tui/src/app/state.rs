//! Application state types and enums.
//!
//! Responsibilities:
//! - Define screen navigation enum (CurrentScreen) and its route table
//! - Define the generic fetch state used by every screen (Remote, Tracked, PagedList)
//! - Define the single-line text input used by filters
//!
//! Does NOT handle:
//! - Does NOT handle per-screen semantics (see `app::pages`)
//! - Does NOT define the main App struct

use lap_client::listing::{ListEvent, ListQuery, Pager, RequestSequence};
use lap_client::Page;
use ratatui::widgets::TableState;

use crate::action::ApiResult;

/// Layout constants for UI components.
/// The header holds the title line and the navigation line.
pub const HEADER_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 3;

/// Current active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrentScreen {
    Dashboard,
    Licitacoes,
    Fornecedores,
    Municipios,
    Itens,
    Anomalias,
    Alertas,
    Ceis,
    Governanca,
    Relatorios,
}

impl CurrentScreen {
    /// Navigation order, which is also the order of the number-key shortcuts.
    pub const ALL: [CurrentScreen; 10] = [
        Self::Dashboard,
        Self::Licitacoes,
        Self::Fornecedores,
        Self::Municipios,
        Self::Itens,
        Self::Anomalias,
        Self::Alertas,
        Self::Ceis,
        Self::Governanca,
        Self::Relatorios,
    ];

    pub fn route(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Licitacoes => "/licitacoes",
            Self::Fornecedores => "/fornecedores",
            Self::Municipios => "/municipios",
            Self::Itens => "/itens",
            Self::Anomalias => "/anomalias",
            Self::Alertas => "/alertas",
            Self::Ceis => "/ceis",
            Self::Governanca => "/governanca",
            Self::Relatorios => "/relatorios",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Licitacoes => "Licitações",
            Self::Fornecedores => "Fornecedores",
            Self::Municipios => "Municípios",
            Self::Itens => "Itens",
            Self::Anomalias => "Anomalias",
            Self::Alertas => "Alertas",
            Self::Ceis => "CEIS/CNEP",
            Self::Governanca => "Governança",
            Self::Relatorios => "Relatórios",
        }
    }

    /// Resolve a route path. Unknown routes open the Dashboard.
    ///
    /// ```
    /// use lap_tui::CurrentScreen;
    ///
    /// assert_eq!(CurrentScreen::from_route("/ceis/"), CurrentScreen::Ceis);
    /// assert_eq!(CurrentScreen::from_route("/nope"), CurrentScreen::Dashboard);
    /// ```
    pub fn from_route(route: &str) -> Self {
        let trimmed = route.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|screen| screen.route() == normalized)
            .unwrap_or(Self::Dashboard)
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|screen| *screen == self)
            .unwrap_or_default()
    }

    /// Returns the next screen in cyclic navigation order.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Returns the previous screen in cyclic navigation order.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Number-key shortcut: `1`..`9` then `0` for the tenth screen.
    pub fn from_digit(digit: char) -> Option<Self> {
        let idx = match digit {
            '1'..='9' => digit as usize - '1' as usize,
            '0' => 9,
            _ => return None,
        };
        Self::ALL.get(idx).copied()
    }

    pub fn shortcut(self) -> char {
        match self.index() {
            9 => '0',
            idx => char::from(b'1' + idx as u8),
        }
    }
}

/// Loading/data/error triple for one remote resource.
#[derive(Debug)]
pub struct Remote<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub loading: bool,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            loading: false,
        }
    }
}

impl<T> Remote<T> {
    /// Mark a request in flight. Existing data stays visible until it resolves.
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a response. A failed read replaces the data with an error state.
    pub fn resolve(&mut self, result: ApiResult<T>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                self.data = None;
                self.error = Some(e.user_message());
            }
        }
    }
}

/// A [`Remote`] whose responses are tagged with request sequence numbers.
#[derive(Debug)]
pub struct Tracked<T> {
    pub remote: Remote<T>,
    seq: RequestSequence,
}

impl<T> Default for Tracked<T> {
    fn default() -> Self {
        Self {
            remote: Remote::default(),
            seq: RequestSequence::default(),
        }
    }
}

impl<T> Tracked<T> {
    /// Issue a request; earlier in-flight requests become stale.
    pub fn issue(&mut self) -> u64 {
        self.remote.start();
        self.seq.issue()
    }

    /// Apply a response if it answers the latest request. Returns whether it was applied.
    pub fn accept(&mut self, seq: u64, result: ApiResult<T>) -> bool {
        if !self.seq.is_current(seq) {
            tracing::debug!(seq, latest = self.seq.latest(), "discarding stale response");
            return false;
        }
        self.remote.resolve(result);
        true
    }

    pub fn latest_seq(&self) -> u64 {
        self.seq.latest()
    }

    pub fn data(&self) -> Option<&T> {
        self.remote.data.as_ref()
    }
}

/// Server-paginated list: query, last response and table selection.
#[derive(Debug)]
pub struct PagedList<T> {
    pub query: ListQuery,
    pub fetch: Tracked<Page<T>>,
    pub table: TableState,
}

impl<T> PagedList<T> {
    pub fn new(per_page: u32) -> Self {
        Self {
            query: ListQuery::new(per_page),
            fetch: Tracked::default(),
            table: TableState::default(),
        }
    }

    /// Apply a list event. Returns the sequence of the request to issue, if any.
    pub fn apply(&mut self, event: ListEvent) -> Option<u64> {
        self.query.apply(event).then(|| self.fetch.issue())
    }

    /// Re-fetch the current query.
    pub fn reload(&mut self) -> u64 {
        self.fetch.issue()
    }

    pub fn accept(&mut self, seq: u64, result: ApiResult<Page<T>>) -> bool {
        let applied = self.fetch.accept(seq, result);
        if applied {
            let len = self.items().len();
            self.table.select((len > 0).then_some(0));
        }
        applied
    }

    pub fn items(&self) -> &[T] {
        self.fetch.data().map(|p| p.items.as_slice()).unwrap_or(&[])
    }

    /// Pager for the last applied response.
    pub fn pager(&self) -> Option<Pager> {
        self.fetch
            .data()
            .map(|page| self.query.pager(page.pages, page.total))
    }

    pub fn next_page(&mut self) -> Option<u64> {
        let pages = self.fetch.data().map(|p| p.pages).unwrap_or(1);
        self.apply(ListEvent::NextPage { pages })
    }

    pub fn prev_page(&mut self) -> Option<u64> {
        self.apply(ListEvent::PrevPage)
    }
}

/// Move a table selection by `delta` rows, clamped to `0..len`.
pub fn step_selection(table: &mut TableState, len: usize, delta: isize) {
    if len == 0 {
        table.select(None);
        return;
    }
    let current = table.selected().unwrap_or(0) as isize;
    let next = (current + delta).clamp(0, len as isize - 1);
    table.select(Some(next as usize));
}

/// Single-line text input used by filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub focused: bool,
}

impl TextInput {
    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Trimmed value, `None` when blank.
    pub fn trimmed(&self) -> Option<&str> {
        let trimmed = self.value.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
