//! Alert subscription commands.
//!
//! Responsibilities:
//! - List alert rules.
//! - Create a rule from flags (validated by the client before sending).
//! - Flip a rule's active flag by id.
//!
//! Invariants:
//! - `toggle` reads the current state from the API; it never assumes it.

use anyhow::Result;
use clap::Subcommand;
use lap_client::ClientError;
use lap_client::models::{Canal, NovoAlerta, TipoAlerta};
use lap_config::Config;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::commands::{OutputOptions, build_client_from_config};
use crate::error::UsageError;

#[derive(Debug, Subcommand)]
pub enum AlertasCommand {
    /// List alert subscriptions
    List,
    /// Create an alert subscription
    Create {
        /// Alert name
        #[arg(long)]
        nome: String,

        /// What triggers the alert (licitacao, anomalia)
        #[arg(long, default_value = "licitacao")]
        tipo: String,

        /// Comma-separated keywords
        #[arg(long, default_value = "")]
        palavras_chave: String,

        /// Minimum estimated value in BRL
        #[arg(long, default_value = "")]
        valor_minimo: String,

        /// Delivery channel (email, telegram, webhook)
        #[arg(long, default_value = "email")]
        canal: String,

        /// E-mail address, Telegram chat id, or webhook URL
        #[arg(long)]
        destinatario: String,
    },
    /// Activate or deactivate an alert subscription
    Toggle {
        /// Alert id
        #[arg(value_name = "ID")]
        id: String,
    },
}

pub async fn run(
    config: &Config,
    command: AlertasCommand,
    out: &OutputOptions,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client_from_config(config)?;

    match command {
        AlertasCommand::List => {
            info!("Listing alertas");
            let page = cancel.run(client.list_alertas()).await?;
            out.emit(&out.formatter().format_alertas(&page.items)?)?;
            out.export(&page.items).await
        }
        AlertasCommand::Create {
            nome,
            tipo,
            palavras_chave,
            valor_minimo,
            canal,
            destinatario,
        } => {
            let tipo = tipo.parse::<TipoAlerta>().map_err(UsageError)?;
            let canal = canal.parse::<Canal>().map_err(UsageError)?;
            let form = NovoAlerta {
                nome,
                tipo: tipo.as_str().to_string(),
                palavras_chave,
                valor_minimo,
                canal: canal.as_str().to_string(),
                destinatario,
            };
            info!(nome = %form.nome, tipo = %form.tipo, canal = %form.canal, "Creating alerta");

            cancel.run(client.create_alerta(&form)).await?;
            out.note(&format!("Alerta \"{}\" criado.", form.nome.trim()));
            Ok(())
        }
        AlertasCommand::Toggle { id } => {
            info!(id, "Toggling alerta");
            let page = cancel.run(client.list_alertas()).await?;
            let alerta = page
                .items
                .into_iter()
                .find(|a| a.id == id)
                .ok_or_else(|| ClientError::NotFound(format!("alerta {id}")))?;

            cancel.run(client.toggle_alerta(&alerta.id, alerta.ativo)).await?;
            let estado = if alerta.ativo { "desativado" } else { "ativado" };
            out.note(&format!("Alerta \"{}\" {estado}.", alerta.nome));
            Ok(())
        }
    }
}
