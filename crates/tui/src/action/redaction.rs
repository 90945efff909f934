//! Redaction wrapper for Action logging.
//!
//! `RedactedAction` implements `Debug` without writing personal data or bulk
//! payloads to the log file. Use it instead of `?action` when logging.
//!
//! Redacted:
//! - Alert recipients (e-mail addresses, chat ids, webhook URLs)
//! - CNPJs under verification
//! - Loaded pages and exported records (only sizes are logged)

use std::fmt;

use crate::action::variants::Action;

/// Show a CNPJ as its last two digits only.
fn mask_cnpj(cnpj: &str) -> String {
    let tail: String = cnpj
        .chars()
        .rev()
        .take(2)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("<{} digits, ..{tail}>", cnpj.len())
}

fn outcome<T>(result: &Result<T, impl fmt::Display>, describe: impl Fn(&T) -> String) -> String {
    match result {
        Ok(value) => format!("Ok({})", describe(value)),
        Err(e) => format!("Err({e})"),
    }
}

/// Redacted wrapper for Action that keeps sensitive payloads out of logs.
///
/// ```ignore
/// tracing::debug!("Handling action: {:?}", RedactedAction(&action));
/// ```
pub struct RedactedAction<'a>(pub &'a Action);

impl fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Action::CreateAlerta(form) => write!(
                f,
                "CreateAlerta(nome={:?}, canal={}, destinatario=<{} chars>)",
                form.nome,
                form.canal,
                form.destinatario.len()
            ),
            Action::CheckCnpj { seq, cnpj } => {
                write!(f, "CheckCnpj(seq={seq}, {})", mask_cnpj(cnpj))
            }
            Action::CnpjChecked { seq, cnpj, check } => write!(
                f,
                "CnpjChecked(seq={seq}, {}, {})",
                mask_cnpj(cnpj),
                check.label()
            ),
            Action::ExportData {
                records,
                filename,
                format,
                ..
            } => write!(
                f,
                "ExportData({filename}.{}, {} records)",
                format.extension(),
                records.len()
            ),
            Action::LicitacoesLoaded { seq, result } => write!(
                f,
                "LicitacoesLoaded(seq={seq}, {})",
                outcome(result, |p| format!("{} items", p.len()))
            ),
            Action::AnomaliasLoaded { seq, result } => write!(
                f,
                "AnomaliasLoaded(seq={seq}, {})",
                outcome(result, |p| format!("{} items", p.len()))
            ),
            Action::MunicipiosLoaded { seq, result } => write!(
                f,
                "MunicipiosLoaded(seq={seq}, {})",
                outcome(result, |p| format!("{} items", p.len()))
            ),
            Action::EmpresasImpedidasLoaded { seq, result } => write!(
                f,
                "EmpresasImpedidasLoaded(seq={seq}, {})",
                outcome(result, |p| format!("{} items", p.len()))
            ),
            Action::HistoricoPrecosLoaded { seq, result } => write!(
                f,
                "HistoricoPrecosLoaded(seq={seq}, {})",
                outcome(result, |h| format!("{} points", h.historico.len()))
            ),
            Action::FornecedoresLoaded { seq, result } => write!(
                f,
                "FornecedoresLoaded(seq={seq}, {})",
                outcome(result, |p| format!("{} items", p.len()))
            ),
            Action::AlertasLoaded { seq, result } => write!(
                f,
                "AlertasLoaded(seq={seq}, {})",
                outcome(result, |p| format!("{} items", p.len()))
            ),
            Action::GovernancaLoaded { seq, result } => write!(
                f,
                "GovernancaLoaded(seq={seq}, {})",
                outcome(result, |p| format!("{} items", p.len()))
            ),
            Action::RelatoriosLoaded { seq, result } => write!(
                f,
                "RelatoriosLoaded(seq={seq}, {})",
                outcome(result, |p| format!("{} items", p.len()))
            ),
            Action::DashboardLoaded(result) => write!(
                f,
                "DashboardLoaded({})",
                outcome(result, |d| format!("{} months", d.por_mes.series.len()))
            ),
            other => fmt::Debug::fmt(other, f),
        }
    }
}
