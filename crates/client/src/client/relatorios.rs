//! Report methods for [`LapClient`].

use crate::client::LapClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Page, PedidoRelatorio, Relatorio};

impl LapClient {
    pub async fn list_relatorios(&self) -> Result<Page<Relatorio>> {
        endpoints::list_relatorios(&self.ctx()).await
    }

    /// Request a report. Returns the created entry when the API echoes it back.
    pub async fn generate_relatorio(&self, pedido: &PedidoRelatorio) -> Result<Option<Relatorio>> {
        endpoints::generate_relatorio(&self.ctx(), pedido).await
    }

    /// Absolute download link for a generated report.
    pub fn download_url(&self, relatorio: &Relatorio) -> Option<String> {
        relatorio
            .download_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|url| self.absolute_url(url))
    }
}
