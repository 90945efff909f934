//! Data models for LAP API responses.
//!
//! Types are organized by resource in submodules and re-exported here.
//! List responses are always exposed as [`Page`] regardless of the wire shape.

pub mod alerta;
pub mod anomalia;
pub mod ceis;
pub mod envelope;
pub mod estatisticas;
pub mod fornecedor;
pub mod governanca;
pub mod licitacao;
pub mod municipio;
pub mod precos;
pub mod relatorio;

pub use alerta::{Alerta, AlertaToggle, Canal, NovoAlerta, TipoAlerta};
pub use anomalia::{Anomalia, AnomaliaResumo, AnomaliaStatus};
pub use ceis::{CnpjCheck, EmpresaImpedida, Fonte, VerificacaoCnpj, normalize_cnpj};
pub use envelope::Page;
pub use estatisticas::{EconomiaGerada, Kpis, PontoMensal, SerieMensal};
pub use fornecedor::{Fornecedor, FornecedorStats, Porte};
pub use governanca::{GOVERNANCA_PESOS, RankingGovernanca};
pub use licitacao::Licitacao;
pub use municipio::{Municipio, snap_distance_km};
pub use precos::{HistoricoPrecos, PontoPreco};
pub use relatorio::{
    FormatoRelatorio, PedidoRelatorio, Relatorio, TipoRelatorio, parse_report_date,
};
