//! Alert rule methods for [`LapClient`].
//!
//! # What this module does NOT handle:
//! - Form validation rules (in [`crate::models::NovoAlerta::validate`])

use crate::client::LapClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Alerta, NovoAlerta, Page};

impl LapClient {
    pub async fn list_alertas(&self) -> Result<Page<Alerta>> {
        endpoints::list_alertas(&self.ctx()).await
    }

    /// Create an alert rule. The form is validated before anything is sent.
    pub async fn create_alerta(&self, form: &NovoAlerta) -> Result<()> {
        endpoints::create_alerta(&self.ctx(), form).await
    }

    /// Flip an alert's active flag. `ativo` is the current state.
    pub async fn toggle_alerta(&self, id: &str, ativo: bool) -> Result<()> {
        endpoints::toggle_alerta(&self.ctx(), id, ativo).await
    }
}
