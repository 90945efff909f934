//! Alert subscription models.
//!
//! Responsibilities:
//! - Decode alert subscriptions from `/alertas`.
//! - Model the creation form ([`NovoAlerta`]) that is posted verbatim.
//!
//! Invariants:
//! - `NovoAlerta` serializes text fields as typed; `valor_minimo` goes out as a
//!   number, or `null` when left blank.
//! - Only `nome` and `destinatario` are required client-side.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::ClientError;
use crate::serde_helpers::{opt_f64_lenient, string_from_number_or_string, string_list_lenient};

fn default_true() -> bool {
    true
}

/// An alert subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alerta {
    #[serde(deserialize_with = "string_from_number_or_string")]
    pub id: String,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub tipo: String,
    #[serde(default, alias = "canal_notificacao")]
    pub canal: String,
    #[serde(default)]
    pub destinatario: Option<String>,
    #[serde(default, deserialize_with = "string_list_lenient")]
    pub palavras_chave: Vec<String>,
    #[serde(default, deserialize_with = "opt_f64_lenient")]
    pub valor_minimo: Option<f64>,
    #[serde(default = "default_true")]
    pub ativo: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// What an alert watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TipoAlerta {
    #[default]
    Licitacao,
    Anomalia,
}

impl TipoAlerta {
    pub const ALL: [TipoAlerta; 2] = [Self::Licitacao, Self::Anomalia];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Licitacao => "licitacao",
            Self::Anomalia => "anomalia",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Licitacao => "Nova Licitação",
            Self::Anomalia => "Anomalia Detectada",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Licitacao => Self::Anomalia,
            Self::Anomalia => Self::Licitacao,
        }
    }
}

impl FromStr for TipoAlerta {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "licitacao" | "licitação" => Ok(Self::Licitacao),
            "anomalia" => Ok(Self::Anomalia),
            other => Err(format!("tipo inválido '{other}' (esperado: licitacao, anomalia)")),
        }
    }
}

/// Notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Canal {
    #[default]
    Email,
    Telegram,
    Webhook,
}

impl Canal {
    pub const ALL: [Canal; 3] = [Self::Email, Self::Telegram, Self::Webhook];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Telegram => "telegram",
            Self::Webhook => "webhook",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Telegram => "Telegram",
            Self::Webhook => "Webhook",
        }
    }

    /// Hint for the recipient field, which depends on the channel.
    pub fn destinatario_hint(self) -> &'static str {
        match self {
            Self::Email => "email@exemplo.com",
            Self::Telegram => "Chat ID",
            Self::Webhook => "https://...",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Email => Self::Telegram,
            Self::Telegram => Self::Webhook,
            Self::Webhook => Self::Email,
        }
    }
}

impl fmt::Display for Canal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Canal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" | "e-mail" => Ok(Self::Email),
            "telegram" => Ok(Self::Telegram),
            "webhook" => Ok(Self::Webhook),
            other => Err(format!(
                "canal inválido '{other}' (esperado: email, telegram, webhook)"
            )),
        }
    }
}

/// Parse a typed amount; a decimal comma is accepted.
pub fn parse_valor(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn serialize_valor_minimo<S: Serializer>(raw: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if raw.trim().is_empty() {
        return serializer.serialize_none();
    }
    match parse_valor(raw) {
        Some(valor) => serializer.serialize_some(&valor),
        // validate() rejects this; left for the backend when validation is skipped.
        None => serializer.serialize_str(raw),
    }
}

/// Alert creation form, posted to `POST /alertas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NovoAlerta {
    pub nome: String,
    pub tipo: String,
    pub palavras_chave: String,
    #[serde(serialize_with = "serialize_valor_minimo")]
    pub valor_minimo: String,
    pub canal: String,
    pub destinatario: String,
}

impl Default for NovoAlerta {
    fn default() -> Self {
        Self {
            nome: String::new(),
            tipo: TipoAlerta::default().as_str().to_string(),
            palavras_chave: String::new(),
            valor_minimo: String::new(),
            canal: Canal::default().as_str().to_string(),
            destinatario: String::new(),
        }
    }
}

impl NovoAlerta {
    /// Check the required fields and the optional amount.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.nome.trim().is_empty() {
            return Err(ClientError::Validation("o nome do alerta é obrigatório".to_string()));
        }
        if self.destinatario.trim().is_empty() {
            return Err(ClientError::Validation("o destinatário é obrigatório".to_string()));
        }
        if !self.valor_minimo.trim().is_empty() && parse_valor(&self.valor_minimo).is_none() {
            return Err(ClientError::Validation(format!(
                "valor mínimo inválido: '{}'",
                self.valor_minimo.trim()
            )));
        }
        Ok(())
    }
}

/// Body of `PATCH /alertas/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertaToggle {
    pub ativo: bool,
}

impl AlertaToggle {
    /// Flip the current state.
    pub fn flip(current: bool) -> Self {
        Self { ativo: !current }
    }
}
