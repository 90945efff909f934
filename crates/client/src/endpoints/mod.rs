//! REST API endpoint implementations.
//!
//! One submodule per API resource. Each function takes a [`RequestContext`] and
//! returns typed models; list endpoints always return a normalized [`Page`].
//!
//! [`Page`]: crate::models::Page

mod alertas;
mod anomalias;
mod ceis;
mod estatisticas;
mod governanca;
mod licitacoes;
mod municipios;
mod precos;
mod relatorios;
pub mod request;

pub use alertas::{ALERTAS_PATH, create_alerta, list_alertas, toggle_alerta};
pub use anomalias::{ANOMALIAS_PATH, anomalias_resumo, list_anomalias};
pub use ceis::{CEIS_PATH, check_cnpj, list_empresas_impedidas, refresh_ceis};
pub use estatisticas::{ESTATISTICAS_PATH, get_kpis, get_por_mes, top_fornecedores};
pub use governanca::{GOVERNANCA_PATH, ranking_governanca};
pub use licitacoes::{LICITACOES_PATH, list_licitacoes};
pub use municipios::{MUNICIPIOS_LIMIT, MUNICIPIOS_PATH, list_municipios};
pub use precos::{PRECOS_PATH, historico_precos};
pub use relatorios::{RELATORIOS_PATH, generate_relatorio, list_relatorios};
pub use request::{RequestContext, RetryPolicy, send_request_with_retry};
