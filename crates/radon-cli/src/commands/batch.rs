//! Batch processing command for directories of voucher PDFs.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use radon_core::{DocumentRegistry, InvoiceRecord};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Write successful records to an xlsx workbook
    #[arg(long)]
    export: Option<PathBuf>,

    /// Write a per-file summary CSV
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Append successful records to the record store
    #[arg(long)]
    save: bool,

    /// Abort on the first failed file instead of continuing
    #[arg(long)]
    fail_fast: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    file_name: String,
    record: Option<InvoiceRecord>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::config::load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching PDF files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // The registry owns the ingested blobs for the duration of the run;
    // failed files are released immediately.
    let mut registry = DocumentRegistry::new();
    let mut results = Vec::with_capacity(files.len());

    for path in &files {
        let file_start = Instant::now();
        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("document.pdf")
            .to_string();

        let outcome = match fs::read(path) {
            Ok(data) => {
                registry.register(file_name.clone(), data);
                let data = registry.fetch(&file_name).unwrap_or_default();
                super::process::extract_from_bytes(data, &file_name, &config)
            }
            Err(e) => Err(e.into()),
        };

        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match outcome {
            Ok(result) => {
                for warning in &result.warnings {
                    debug!("{}: {}", file_name, warning);
                }
                results.push(ProcessResult {
                    file_name,
                    record: Some(result.record),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                registry.release(&file_name);
                let message = e.to_string();
                if args.fail_fast {
                    pb.abandon();
                    anyhow::bail!("Processing failed for {}: {}", file_name, message);
                }
                warn!("failed to process {}: {}", file_name, message);
                results.push(ProcessResult {
                    file_name,
                    record: None,
                    error: Some(message),
                    processing_time_ms,
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let records: Vec<InvoiceRecord> = results
        .iter()
        .filter_map(|r| r.record.clone())
        .collect();
    let failed: Vec<&ProcessResult> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(export_path) = &args.export {
        radon_core::sheet::write_workbook(&records, export_path)?;
        println!(
            "{} Exported {} records to {}",
            style("✓").green(),
            records.len(),
            export_path.display()
        );
    }

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    if args.save {
        let store = super::store_handle(&config);
        let total = store.append(records.clone())?;
        println!(
            "{} Store now holds {} records ({})",
            style("✓").green(),
            total,
            store.path().display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(records.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.file_name,
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    registry.clear();

    Ok(())
}

fn write_summary(path: &PathBuf, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "voucher_type",
        "invoice_number",
        "date",
        "client_name",
        "amount",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        if let Some(record) = &result.record {
            wtr.write_record([
                result.file_name.as_str(),
                "success",
                record.voucher_type.as_str(),
                record.invoice_number.as_str(),
                record.date.as_str(),
                record.client_name.as_str(),
                &record.amount.to_string(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                result.file_name.as_str(),
                "error",
                "",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
