//! Typed client for the LAP procurement API.
//!
//! This crate provides:
//! - `LapClient`, a reqwest-based client for every endpoint the dashboards consume.
//! - Models for the API responses, with every list shape normalized into [`Page`].
//! - The list-query protocol shared by all paginated pages ([`listing`]).
//! - Presentation helpers used by both front ends: status badges, chart adapters,
//!   threshold levels, value formatting, and record export.

pub mod badge;
pub mod charts;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod export;
pub mod format;
pub mod levels;
pub mod listing;
pub mod metrics;
pub mod models;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use badge::{BadgeKind, BadgeStyle, classify_status};
pub use client::{LapClient, LapClientBuilder};
pub use error::{ClientError, Result};
pub use export::{ExportError, ExportFormat, export_records};
pub use listing::{ListEvent, ListQuery, Pager, RequestSequence};
pub use metrics::MetricsCollector;
pub use models::{
    Alerta, Anomalia, AnomaliaResumo, CnpjCheck, EmpresaImpedida, Fornecedor, HistoricoPrecos,
    Kpis, Licitacao, Municipio, NovoAlerta, Page, PedidoRelatorio, RankingGovernanca, Relatorio,
    SerieMensal,
};
