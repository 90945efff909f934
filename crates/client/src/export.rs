//! Record export to CSV or JSON files.
//!
//! Responsibilities:
//! - Turn any serializable list into flat JSON records.
//! - Render records as CSV text or pretty JSON.
//! - Write `{filename}.{format}` into a target directory.
//!
//! Does NOT handle:
//! - Choosing the directory (callers pass it in).
//! - Streaming; records are rendered in memory.
//!
//! Invariants:
//! - The CSV header is the key list of the first record; later records are rendered
//!   against it and missing keys become empty cells.
//! - A cell is quoted only when it contains a comma; `"` is always doubled.
//! - Exporting zero records writes nothing and is not an error.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Csv => Self::Json,
            Self::Json => Self::Csv,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("formato de exportação inválido '{other}' (csv ou json)")),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize export data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid export filename '{0}'")]
    InvalidFilename(String),
}

/// Serialize a list into JSON records.
pub fn to_records<T: Serialize>(items: &[T]) -> Result<Vec<Value>, ExportError> {
    items
        .iter()
        .map(|item| serde_json::to_value(item).map_err(ExportError::from))
        .collect()
}

/// Text of one CSV cell before quoting.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn escape_cell(raw: &str) -> String {
    let escaped = raw.replace('"', "\"\"");
    if escaped.contains(',') {
        format!("\"{escaped}\"")
    } else {
        escaped
    }
}

/// Render records as CSV text. Empty input yields an empty string.
pub fn records_to_csv(records: &[Value]) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };

    let Some(first_obj) = first.as_object() else {
        let mut lines = vec!["value".to_string()];
        lines.extend(records.iter().map(|r| escape_cell(&stringify(r))));
        return lines.join("\n");
    };

    let headers: Vec<&String> = first_obj.keys().collect();
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| escape_cell(h))
            .collect::<Vec<_>>()
            .join(","),
    );

    for record in records {
        let row = headers
            .iter()
            .map(|key| {
                record
                    .get(key.as_str())
                    .map(|v| escape_cell(&stringify(v)))
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    lines.join("\n")
}

/// Render records as pretty JSON with two-space indentation.
pub fn records_to_json(records: &[Value]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Destination of an export: `{dir}/{filename}.{ext}`.
pub fn export_path(dir: &Path, filename: &str, format: ExportFormat) -> Result<PathBuf, ExportError> {
    let trimmed = filename.trim();
    if trimmed.is_empty() || trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
        return Err(ExportError::InvalidFilename(filename.to_string()));
    }
    Ok(dir.join(format!("{trimmed}.{}", format.extension())))
}

/// Write records to `{dir}/{filename}.{format}`.
///
/// Returns the written path, or `None` when there was nothing to export.
pub async fn export_records(
    records: &[Value],
    dir: &Path,
    filename: &str,
    format: ExportFormat,
) -> Result<Option<PathBuf>, ExportError> {
    if records.is_empty() {
        tracing::debug!(filename, "nothing to export");
        return Ok(None);
    }

    let path = export_path(dir, filename, format)?;
    let body = match format {
        ExportFormat::Csv => records_to_csv(records),
        ExportFormat::Json => records_to_json(records)?,
    };

    let io_err = |source| ExportError::Io {
        path: path.clone(),
        source,
    };
    let mut file = tokio::fs::File::create(&path).await.map_err(io_err)?;
    file.write_all(body.as_bytes()).await.map_err(io_err)?;
    file.flush().await.map_err(io_err)?;

    tracing::info!(path = %path.display(), rows = records.len(), %format, "exported records");
    Ok(Some(path))
}
