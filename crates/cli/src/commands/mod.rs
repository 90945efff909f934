//! CLI command implementations.
//!
//! Every command builds a client from the loaded configuration, races its API
//! calls against the cancellation token, renders the result with the selected
//! formatter, and optionally exports the listed records.

pub mod alertas;
pub mod anomalias;
pub mod ceis;
pub mod completions;
pub mod dashboard;
pub mod fornecedores;
pub mod governanca;
pub mod itens;
pub mod licitacoes;
pub mod municipios;
pub mod relatorios;

use std::path::PathBuf;

use anyhow::{Context, Result};
use lap_client::export::{export_records, to_records};
use lap_client::{ExportFormat, LapClient};
use lap_config::Config;
use serde::Serialize;

use crate::args::Cli;
use crate::error::UsageError;
use crate::formatters::{Formatter, OutputFormat, get_formatter, output_result};

/// Where an `--export` run writes its records.
#[derive(Debug, Clone)]
pub struct ExportTarget {
    pub filename: String,
    pub format: ExportFormat,
    pub dir: PathBuf,
}

/// Output settings shared by every command.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub output_file: Option<PathBuf>,
    pub export: Option<ExportTarget>,
    pub quiet: bool,
}

impl OutputOptions {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let format = cli.output.parse::<OutputFormat>().map_err(|e| UsageError(e.to_string()))?;
        let export = match &cli.export {
            Some(filename) => Some(ExportTarget {
                filename: filename.clone(),
                format: cli.export_format.parse::<ExportFormat>().map_err(UsageError)?,
                dir: cli.export_dir.clone(),
            }),
            None => None,
        };
        Ok(Self {
            format,
            output_file: cli.output_file.clone(),
            export,
            quiet: cli.quiet,
        })
    }

    pub fn formatter(&self) -> Box<dyn Formatter> {
        get_formatter(self.format)
    }

    /// Print or write rendered output.
    pub fn emit(&self, rendered: &str) -> Result<()> {
        output_result(rendered, self.format, self.output_file.as_ref(), self.quiet)
    }

    /// Status line on stderr, silenced by `--quiet`.
    pub fn note(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Export `items` when `--export` was given.
    pub async fn export<T: Serialize>(&self, items: &[T]) -> Result<()> {
        let Some(target) = &self.export else {
            return Ok(());
        };
        let records = to_records(items).context("Failed to prepare export records")?;
        let written = export_records(&records, &target.dir, &target.filename, target.format)
            .await
            .map_err(|e| match e {
                lap_client::ExportError::InvalidFilename(name) => {
                    anyhow::Error::new(UsageError(format!("nome de arquivo inválido '{name}'")))
                }
                other => anyhow::Error::new(other),
            })?;
        match written {
            Some(path) => self.note(&format!("Exportado para {}", path.display())),
            None => self.note("Nada para exportar."),
        }
        Ok(())
    }
}

pub fn build_client_from_config(config: &Config) -> Result<LapClient> {
    Ok(LapClient::from_config(config)?)
}
