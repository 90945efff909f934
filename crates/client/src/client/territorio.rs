use crate::client::LapClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{HistoricoPrecos, Municipio, Page};

impl LapClient {
    /// Municipalities with coordinates and distances, optionally for one state.
    pub async fn list_municipios(&self, uf: Option<&str>) -> Result<Page<Municipio>> {
        endpoints::list_municipios(&self.ctx(), uf).await
    }

    /// Price history for an item description over the last `periodo_meses` months.
    pub async fn historico_precos(
        &self,
        descricao: &str,
        periodo_meses: u32,
    ) -> Result<HistoricoPrecos> {
        endpoints::historico_precos(&self.ctx(), descricao, periodo_meses).await
    }
}
