//! Common utilities for formatters.
//!
//! Responsibilities:
//! - Fixed-width table layout.
//! - Printing or atomically writing formatted output.
//!
//! Does NOT handle:
//! - Format-specific logic (lives in the respective formatter modules).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::formatters::OutputFormat;

/// Placeholder for missing values in tables.
pub const MISSING: &str = "-";

pub fn or_missing(value: Option<&str>) -> String {
    value.map_or_else(|| MISSING.to_string(), str::to_string)
}

/// Lay out rows under a header with columns padded to their widest cell.
///
/// Columns are separated by two spaces, the header is underlined with `-`,
/// and trailing whitespace is removed from every line.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut output = String::new();
    output.push_str(&pad_line(headers, &widths));
    output.push('\n');
    let underline: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&underline.join("  "));
    output.push('\n');
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        output.push_str(&pad_line(&cells, &widths));
        output.push('\n');
    }
    output
}

fn pad_line(cells: &[&str], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

/// Print formatted output, or write it to `output_file` when given.
pub fn output_result(
    output: &str,
    format: OutputFormat,
    output_file: Option<&PathBuf>,
    quiet: bool,
) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        if !quiet {
            eprintln!("Results written to {} ({:?} format)", path.display(), format);
        }
    } else {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

/// Write content to a file atomically.
///
/// Creates parent directories if needed and writes to a temp file in the same
/// directory before renaming it into place.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if parent_dir != Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_columns_align_to_widest_cell() {
        let table = render_table(
            &["ID", "Nome"],
            &[
                vec!["1".to_string(), "Goiânia".to_string()],
                vec!["100".to_string(), "Anápolis".to_string()],
            ],
        );
        insta::assert_snapshot!(table, @r"
        ID   Nome
        ---  --------
        1    Goiânia
        100  Anápolis
        ");
    }

    #[test]
    fn write_to_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/result.json");
        write_to_file("[]", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn write_to_file_replaces_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        write_to_file("old", &path).unwrap();
        write_to_file("new", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
