//! Dashboard statistics and governance ranking methods for [`LapClient`].

use crate::client::LapClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Fornecedor, Kpis, Page, RankingGovernanca, SerieMensal};

impl LapClient {
    /// Headline indicators for the dashboard cards.
    pub async fn get_kpis(&self) -> Result<Kpis> {
        endpoints::get_kpis(&self.ctx()).await
    }

    /// Notice count and value per month.
    pub async fn get_por_mes(&self) -> Result<SerieMensal> {
        endpoints::get_por_mes(&self.ctx()).await
    }

    /// Suppliers ranked by amount won, at most `limite` rows.
    pub async fn top_fornecedores(&self, limite: u32) -> Result<Page<Fornecedor>> {
        endpoints::top_fornecedores(&self.ctx(), limite).await
    }

    pub async fn ranking_governanca(&self) -> Result<Page<RankingGovernanca>> {
        endpoints::ranking_governanca(&self.ctx()).await
    }
}
