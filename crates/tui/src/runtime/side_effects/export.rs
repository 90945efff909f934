//! Export side effect handler.

use std::path::PathBuf;

use lap_client::{ExportFormat, export_records};
use serde_json::Value;
use tokio::sync::mpsc::Sender;

use crate::action::Action;
use crate::ui::ToastLevel;

/// Write the records and report the outcome as a toast.
pub async fn handle_export_data(
    records: Vec<Value>,
    dir: PathBuf,
    filename: String,
    format: ExportFormat,
    tx: Sender<Action>,
) {
    let notice = match export_records(&records, &dir, &filename, format).await {
        Ok(Some(path)) => (
            ToastLevel::Success,
            format!("Exportado para {}", path.display()),
        ),
        Ok(None) => (ToastLevel::Info, "Nada para exportar.".to_string()),
        Err(e) => (ToastLevel::Error, format!("Falha ao exportar: {e}")),
    };
    let _ = tx.send(Action::Notify(notice.0, notice.1)).await;
}
