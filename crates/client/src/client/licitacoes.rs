//! Notice and anomaly methods for [`LapClient`].
//!
//! Both lists are paginated and driven by a [`ListQuery`].

use crate::client::LapClient;
use crate::endpoints;
use crate::error::Result;
use crate::listing::ListQuery;
use crate::models::{Anomalia, AnomaliaResumo, Licitacao, Page};

impl LapClient {
    pub async fn list_licitacoes(&self, query: &ListQuery) -> Result<Page<Licitacao>> {
        endpoints::list_licitacoes(&self.ctx(), query).await
    }

    pub async fn list_anomalias(&self, query: &ListQuery) -> Result<Page<Anomalia>> {
        endpoints::list_anomalias(&self.ctx(), query).await
    }

    /// Anomaly totals by type and status.
    pub async fn anomalias_resumo(&self) -> Result<AnomaliaResumo> {
        endpoints::anomalias_resumo(&self.ctx()).await
    }
}
