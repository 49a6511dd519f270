//! Per-file normalization pipeline.
//!
//! Reads a CSV file, resolves which columns to normalize (explicit names or
//! auto-detected address lines), rewrites each cell through the normalizer,
//! inserts every normalized column immediately after its source under an
//! `n_`-prefixed name, and writes `<stem>_proc.csv` beside the input.
//! Everything except the target columns round-trips verbatim.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, info_span, warn};

use addr_ingest::{CsvTable, read_csv_table, write_csv_table};
use addr_map::address_line_columns;
use addr_normalize::AddressNormalizer;

use crate::logging::redact_value;

/// Prefix for inserted normalized columns.
pub const NORMALIZED_PREFIX: &str = "n_";

/// One file-processing request.
#[derive(Debug, Clone)]
pub struct FileOptions {
    /// Input CSV path.
    pub path: PathBuf,
    /// Columns to normalize; empty means auto-detect address lines.
    pub columns: Vec<String>,
    /// Output path; `<stem>_proc.csv` beside the input when unset.
    pub output: Option<PathBuf>,
    /// Report without writing the output file.
    pub dry_run: bool,
}

/// Per-column outcome counts.
#[derive(Debug, Clone)]
pub struct ColumnReport {
    pub column: String,
    pub normalized_column: String,
    pub cells: usize,
    pub changed: usize,
    pub blank: usize,
}

/// Outcome of processing one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub rows: usize,
    pub columns: Vec<ColumnReport>,
}

/// Normalizes the address columns of one CSV file.
pub fn process_file(options: &FileOptions) -> Result<FileReport> {
    let span = info_span!("normalize", file = %options.path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut table = read_csv_table(&options.path)
        .with_context(|| format!("read {}", options.path.display()))?;
    let rows = table.rows.len();

    let targets = resolve_target_columns(&table, &options.columns);
    if targets.is_empty() {
        info!(rows, "no address columns detected, nothing to do");
        return Ok(FileReport {
            input: options.path.clone(),
            output: None,
            rows,
            columns: Vec::new(),
        });
    }
    info!(rows, columns = targets.len(), "normalizing address columns");

    let normalizer = AddressNormalizer::new();
    let bar = progress_bar((rows * targets.len()) as u64);
    let mut reports = Vec::with_capacity(targets.len());
    for column in &targets {
        reports.push(normalize_column(&mut table, column, &normalizer, &bar));
    }
    bar.finish_and_clear();

    let output = if options.dry_run {
        None
    } else {
        let path = options
            .output
            .clone()
            .unwrap_or_else(|| derive_output_path(&options.path));
        write_csv_table(&table, &path).with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    info!(
        rows,
        columns = reports.len(),
        duration_ms = start.elapsed().as_millis(),
        "file complete"
    );
    Ok(FileReport {
        input: options.path.clone(),
        output,
        rows,
        columns: reports,
    })
}

fn resolve_target_columns(table: &CsvTable, requested: &[String]) -> Vec<String> {
    if requested.is_empty() {
        return address_line_columns(&table.headers);
    }
    let mut targets = Vec::with_capacity(requested.len());
    for name in requested {
        if table.column_index(name).is_some() {
            targets.push(name.clone());
        } else {
            warn!(column = %name, "column not found in file, skipping");
        }
    }
    targets
}

fn normalize_column(
    table: &mut CsvTable,
    column: &str,
    normalizer: &AddressNormalizer,
    bar: &ProgressBar,
) -> ColumnReport {
    let normalized_column = format!("{NORMALIZED_PREFIX}{column}");
    let mut report = ColumnReport {
        column: column.to_string(),
        normalized_column: normalized_column.clone(),
        cells: 0,
        changed: 0,
        blank: 0,
    };
    // Re-resolve per column: each insertion shifts the columns after it.
    let Some(index) = table.column_index(column) else {
        return report;
    };

    let mut values = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let raw = row.get(index).map_or("", String::as_str);
        report.cells += 1;
        if raw.trim().is_empty() {
            report.blank += 1;
            values.push(raw.to_string());
        } else {
            let normalized = normalizer.normalize(raw);
            if normalized != raw {
                report.changed += 1;
                debug!(
                    column,
                    raw = redact_value(raw),
                    normalized = redact_value(&normalized),
                    "rewrote cell"
                );
            }
            values.push(normalized);
        }
        bar.inc(1);
    }

    table.insert_column(index + 1, normalized_column, values);
    report
}

fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_proc.csv"))
}

fn progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template("{msg} {wide_bar:.cyan/dim} {pos}/{len} cells")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    bar.set_message("normalizing");
    bar
}

#[cfg(test)]
mod tests {
    use super::derive_output_path;
    use std::path::Path;

    #[test]
    fn output_path_gets_the_proc_suffix() {
        assert_eq!(
            derive_output_path(Path::new("/data/donors.csv")),
            Path::new("/data/donors_proc.csv")
        );
    }
}
