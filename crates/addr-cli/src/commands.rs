//! Command handlers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use dialoguer::Select;
use tracing::info;

use addr_cli::pipeline::{FileOptions, FileReport, process_file};
use addr_ingest::list_csv_files;
use addr_normalize::AddressNormalizer;

use crate::cli::FileArgs;
use crate::summary::{apply_table_style, header_cell};

pub fn run_file(args: &FileArgs) -> Result<FileReport> {
    let path = match &args.file {
        Some(path) => path.clone(),
        None => pick_csv_file(&args.dir)?,
    };
    let options = FileOptions {
        path,
        columns: args.columns.clone(),
        output: args.output.clone(),
        dry_run: args.dry_run,
    };
    process_file(&options)
}

/// Interactive fallback when no file argument was given: offer the CSV
/// files discovered in the working directory.
fn pick_csv_file(dir: &Path) -> Result<PathBuf> {
    let files =
        list_csv_files(dir).with_context(|| format!("list CSV files in {}", dir.display()))?;
    if files.is_empty() {
        bail!("no CSV files found in {}", dir.display());
    }

    let labels: Vec<String> = files
        .iter()
        .map(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default()
                .to_string()
        })
        .collect();
    let index = Select::new()
        .with_prompt("Select a file to normalize")
        .items(&labels)
        .default(0)
        .interact()
        .context("file selection cancelled")?;

    info!(file = %labels[index], "selected file");
    Ok(files[index].clone())
}

pub fn run_tables() -> Result<()> {
    let normalizer = AddressNormalizer::new();
    let tables = normalizer.tables();

    let mut suffixes = Table::new();
    suffixes.set_header(vec![header_cell("Full form"), header_cell("Abbreviation")]);
    apply_table_style(&mut suffixes);
    for (full, abbr) in tables.suffix_pairs() {
        suffixes.add_row(vec![full, abbr]);
    }
    println!("Street suffixes:");
    println!("{suffixes}");

    println!();
    println!(
        "Directionals: {}",
        tables.directional_tokens().collect::<Vec<_>>().join(", ")
    );
    println!(
        "Unit designators: {}",
        tables.unit_designator_words().collect::<Vec<_>>().join(", ")
    );
    Ok(())
}
