//! LAP client creation for the TUI.
//!
//! Construction is shared with the CLI through `LapClient::from_config`; this
//! module only wraps the result for the async tasks.

use std::sync::Arc;

use anyhow::{Context, Result};
use lap_client::LapClient;
use lap_config::Config;

use crate::runtime::side_effects::SharedClient;

pub fn create_client(config: &Config) -> Result<SharedClient> {
    let client = LapClient::from_config(config).context("failed to build the API client")?;
    tracing::info!(base_url = %client.base_url(), "API client ready");
    Ok(Arc::new(client))
}
