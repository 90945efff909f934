//! Paginated list query protocol.
//!
//! Responsibilities:
//! - Hold the `(page, per_page, filters)` triple behind every list screen.
//! - Apply user events through one reducer ([`ListQuery::apply`]).
//! - Emit query parameters in a deterministic order.
//! - Derive pager state and track which request is the latest ([`RequestSequence`]).
//!
//! Invariants:
//! - Any effective filter change resets `page` to 1.
//! - `page >= 1` and `1 <= per_page <= 100` at all times.
//! - Filters never hold blank values; setting one removes the key.
//! - Parameters are `page`, `per_page`, then filters sorted by key.

use std::collections::BTreeMap;

use lap_config::constants::{DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// An event that may change a list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    SetFilter { key: String, value: String },
    ClearFilter(String),
    /// Advance one page; `pages` is the total reported by the last response.
    NextPage { pages: u32 },
    PrevPage,
    GoToPage(u32),
    SetPerPage(u32),
}

impl ListEvent {
    pub fn set_filter(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetFilter {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Query state of one list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    page: u32,
    per_page: u32,
    filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl ListQuery {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            filters: BTreeMap::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    /// Apply an event. Returns `true` when the query changed and must be re-fetched.
    pub fn apply(&mut self, event: ListEvent) -> bool {
        match event {
            ListEvent::SetFilter { key, value } => {
                let value = value.trim();
                if value.is_empty() {
                    return self.clear_filter(&key);
                }
                if self.filters.get(&key).map(String::as_str) == Some(value) {
                    return false;
                }
                self.filters.insert(key, value.to_string());
                self.page = 1;
                true
            }
            ListEvent::ClearFilter(key) => self.clear_filter(&key),
            ListEvent::NextPage { pages } => {
                if self.page < pages {
                    self.page += 1;
                    true
                } else {
                    false
                }
            }
            ListEvent::PrevPage => {
                if self.page > 1 {
                    self.page -= 1;
                    true
                } else {
                    false
                }
            }
            ListEvent::GoToPage(page) => {
                let page = page.max(1);
                let changed = page != self.page;
                self.page = page;
                changed
            }
            ListEvent::SetPerPage(per_page) => {
                let per_page = per_page.clamp(1, MAX_PER_PAGE);
                if per_page == self.per_page {
                    return false;
                }
                self.per_page = per_page;
                self.page = 1;
                true
            }
        }
    }

    fn clear_filter(&mut self, key: &str) -> bool {
        if self.filters.remove(key).is_some() {
            self.page = 1;
            true
        } else {
            false
        }
    }

    /// Query parameters in wire order.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(2 + self.filters.len());
        params.push(("page".to_string(), self.page.to_string()));
        params.push(("per_page".to_string(), self.per_page.to_string()));
        params.extend(self.filters.iter().map(|(k, v)| (k.clone(), v.clone())));
        params
    }

    /// Pager state for the response that answered this query.
    pub fn pager(&self, pages: u32, total: u64) -> Pager {
        Pager {
            page: self.page,
            pages: pages.max(1),
            total,
        }
    }
}

/// Pagination controls state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub pages: u32,
    pub total: u64,
}

impl Pager {
    pub fn prev_enabled(&self) -> bool {
        self.page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.page < self.pages
    }

    pub fn label(&self) -> String {
        format!("Página {} de {}", self.page, self.pages)
    }
}

/// Monotonic request counter enforcing "last request wins".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Issue a new sequence number, superseding all earlier ones.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    /// Whether a response tagged with `seq` should be applied.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_change_resets_page() {
        let mut q = ListQuery::default();
        q.apply(ListEvent::GoToPage(4));
        assert!(q.apply(ListEvent::set_filter("search", "pregão")));
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn same_filter_value_is_a_no_op() {
        let mut q = ListQuery::default();
        q.apply(ListEvent::set_filter("status", "pendente"));
        q.apply(ListEvent::GoToPage(3));
        assert!(!q.apply(ListEvent::set_filter("status", "pendente")));
        assert_eq!(q.page(), 3);
    }

    #[test]
    fn blank_filter_removes_key() {
        let mut q = ListQuery::default();
        q.apply(ListEvent::set_filter("search", "obra"));
        assert!(q.apply(ListEvent::set_filter("search", "   ")));
        assert_eq!(q.filter("search"), None);
        assert!(!q.apply(ListEvent::ClearFilter("search".to_string())));
    }

    #[test]
    fn params_are_ordered() {
        let mut q = ListQuery::default();
        q.apply(ListEvent::set_filter("uf", "GO"));
        q.apply(ListEvent::set_filter("fonte", "CEIS"));
        let keys: Vec<_> = q.params().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["page", "per_page", "fonte", "uf"]);
    }

    #[test]
    fn next_stops_at_last_page() {
        let mut q = ListQuery::default();
        assert!(q.apply(ListEvent::NextPage { pages: 2 }));
        assert!(!q.apply(ListEvent::NextPage { pages: 2 }));
        assert_eq!(q.page(), 2);
        assert!(!q.pager(2, 40).next_enabled());
        assert!(q.pager(2, 40).prev_enabled());
    }

    #[test]
    fn prev_and_goto_never_go_below_one() {
        let mut q = ListQuery::default();
        assert!(!q.apply(ListEvent::PrevPage));
        q.apply(ListEvent::GoToPage(0));
        assert_eq!(q.page(), 1);
    }

    #[test]
    fn per_page_is_clamped() {
        let mut q = ListQuery::new(0);
        assert_eq!(q.per_page(), 1);
        q.apply(ListEvent::SetPerPage(500));
        assert_eq!(q.per_page(), 100);
    }

    #[test]
    fn only_latest_sequence_is_current() {
        let mut seq = RequestSequence::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
