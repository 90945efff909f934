//! Debarment registry (CEIS/CNEP) methods for [`LapClient`].

use crate::client::LapClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CnpjCheck, EmpresaImpedida, Page};

impl LapClient {
    pub async fn list_empresas_impedidas(
        &self,
        fonte: Option<&str>,
        uf: Option<&str>,
    ) -> Result<Page<EmpresaImpedida>> {
        endpoints::list_empresas_impedidas(&self.ctx(), fonte, uf).await
    }

    /// Check one tax id against the registry.
    ///
    /// Transport and API failures are reported as [`CnpjCheck::CheckFailed`], never
    /// as an error, so callers cannot mistake a failed check for a clear company.
    pub async fn check_cnpj(&self, cnpj: &str) -> CnpjCheck {
        endpoints::check_cnpj(&self.ctx(), cnpj).await
    }

    pub async fn refresh_ceis(&self) -> Result<()> {
        endpoints::refresh_ceis(&self.ctx()).await
    }
}
