//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Declare the global connection, output, and export flags.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration values (see `lap_config::ConfigLoader`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "lap-cli")]
#[command(
    about = "LAP - Licitações Aparecida Plus: consulte licitações, anomalias e fornecedores pela linha de comando",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  lap-cli dashboard\n  lap-cli licitacoes list --search pregão --page 2\n  lap-cli anomalias list --status pendente -o json\n  lap-cli ceis check 12.345.678/0001-90\n  lap-cli fornecedores list --porte ME --export fornecedores\n"
)]
pub struct Cli {
    /// Base URL of the LAP API (e.g., http://localhost:8000)
    #[arg(short, long, global = true, env = "LAP_API_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Maximum number of retries for failed requests
    #[arg(long, global = true)]
    pub max_retries: Option<usize>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Also export the listed records to `<FILENAME>.<format>`
    #[arg(long, global = true, value_name = "FILENAME")]
    pub export: Option<String>,

    /// Format of the export file (csv, json)
    #[arg(long, global = true, default_value = "csv")]
    pub export_format: String,

    /// Directory the export file is written to
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub export_dir: PathBuf,

    /// Suppress informational messages on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show dashboard KPIs and the monthly series
    Dashboard,

    /// Browse procurement notices
    Licitacoes {
        #[command(subcommand)]
        command: commands::licitacoes::LicitacoesCommand,
    },

    /// Browse detected anomalies
    Anomalias {
        #[command(subcommand)]
        command: commands::anomalias::AnomaliasCommand,
    },

    /// Show the supplier ranking
    Fornecedores {
        #[command(subcommand)]
        command: commands::fornecedores::FornecedoresCommand,
    },

    /// List municipalities
    Municipios {
        #[command(subcommand)]
        command: commands::municipios::MunicipiosCommand,
    },

    /// Inspect item price history
    Itens {
        #[command(subcommand)]
        command: commands::itens::ItensCommand,
    },

    /// Manage alert subscriptions
    Alertas {
        #[command(subcommand)]
        command: commands::alertas::AlertasCommand,
    },

    /// Query the CEIS/CNEP debarment registry
    Ceis {
        #[command(subcommand)]
        command: commands::ceis::CeisCommand,
    },

    /// Show municipal governance scores
    Governanca {
        #[command(subcommand)]
        command: commands::governanca::GovernancaCommand,
    },

    /// List and generate reports
    Relatorios {
        #[command(subcommand)]
        command: commands::relatorios::RelatoriosCommand,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
