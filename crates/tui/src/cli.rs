//! Command-line argument parsing for lap-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `lap_config`).

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for lap-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --base-url)
/// 2. Environment variables (e.g., LAP_API_URL), including `.env`
/// 3. Default values
#[derive(Debug, Parser)]
#[command(
    name = "lap-tui",
    about = "Painel de terminal para licitações públicas (LAP - Licitações Aparecida Plus)",
    version,
    after_help = "Examples:\n  lap-tui\n  lap-tui --route /licitacoes\n  lap-tui --base-url http://localhost:8000 --per-page 50\n  lap-tui --export-dir ~/exports --fresh\n"
)]
pub struct Cli {
    /// Screen to open on start (e.g. /licitacoes); unknown routes open the Dashboard
    #[arg(long)]
    pub route: Option<String>,

    /// Base URL of the LAP API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Retries after a failed request
    #[arg(long)]
    pub max_retries: Option<usize>,

    /// Page size of the paginated screens
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Directory where exports are written
    #[arg(long, default_value = ".")]
    pub export_dir: PathBuf,

    /// Directory for log files (defaults to the platform data directory)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Start with fresh state, ignoring any persisted state
    #[arg(long)]
    pub fresh: bool,
}
