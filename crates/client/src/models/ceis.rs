//! Debarment (CEIS/CNEP) models.
//!
//! The tax-id check is fail-open: any failure to reach a verdict yields
//! [`CnpjCheck::CheckFailed`], which still reports `impedida() == false` so callers
//! that only want the boolean never block on an unreachable registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// A debarred company entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpresaImpedida {
    #[serde(default)]
    pub cnpj: String,
    #[serde(default)]
    pub razao_social: String,
    #[serde(default)]
    pub fonte: String,
    #[serde(default, alias = "uf_orgao")]
    pub uf: Option<String>,
    #[serde(default, alias = "tipo_sancao")]
    pub motivo: Option<String>,
    #[serde(default, alias = "data_inicio_sancao")]
    pub data_inicio: Option<String>,
}

/// Registry a debarment comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fonte {
    Ceis,
    Cnep,
}

impl Fonte {
    pub const ALL: [Fonte; 2] = [Self::Ceis, Self::Cnep];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ceis => "CEIS",
            Self::Cnep => "CNEP",
        }
    }
}

impl fmt::Display for Fonte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fonte {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CEIS" => Ok(Self::Ceis),
            "CNEP" => Ok(Self::Cnep),
            other => Err(format!("fonte inválida '{other}' (esperado: CEIS, CNEP)")),
        }
    }
}

/// Raw body of `/ceis-cnep/verificar/{cnpj}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerificacaoCnpj {
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default, alias = "impedido")]
    pub impedida: bool,
    #[serde(default)]
    pub fonte: Option<String>,
    #[serde(default)]
    pub motivo: Option<String>,
    #[serde(default)]
    pub razao_social: Option<String>,
}

/// Outcome of a debarment check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "resultado", rename_all = "snake_case")]
pub enum CnpjCheck {
    /// The registry answered and the company has no restriction.
    Clear,
    Impedida {
        fonte: Option<String>,
        motivo: Option<String>,
    },
    /// No verdict could be obtained.
    CheckFailed { reason: String },
}

impl CnpjCheck {
    /// Legacy boolean view; a failed check is reported as not debarred.
    pub fn impedida(&self) -> bool {
        matches!(self, Self::Impedida { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "sem restrições",
            Self::Impedida { .. } => "empresa impedida",
            Self::CheckFailed { .. } => "verificação falhou",
        }
    }

    pub fn from_response(result: Result<VerificacaoCnpj, ClientError>) -> Self {
        match result {
            Ok(body) if body.impedida => Self::Impedida {
                fonte: body.fonte,
                motivo: body.motivo,
            },
            Ok(_) => Self::Clear,
            Err(err) => Self::CheckFailed {
                reason: err.user_message(),
            },
        }
    }
}

/// Digits of a tax id, ignoring punctuation.
pub fn normalize_cnpj(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
