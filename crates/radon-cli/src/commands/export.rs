//! Export command - write the record store to a spreadsheet.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use console::style;

use radon_core::{sheet, InvoiceRecord, VoucherType};

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Output path (default: <stem>_<YYYY-MM-DD>.xlsx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only export records of one voucher type (Sales, CN, RMA)
    #[arg(long)]
    voucher_type: Option<String>,

    /// Case-insensitive filter over client name, number, date, invoice
    /// number, and sold-by
    #[arg(long)]
    search: Option<String>,
}

pub async fn run(args: ExportArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::config::load_config(config_path)?;
    let store = super::store_handle(&config);

    let filter = match args.voucher_type.as_deref() {
        Some(label) => Some(VoucherType::from_str(label).ok_or_else(|| {
            anyhow::anyhow!("Unknown voucher type: {} (expected Sales, CN, or RMA)", label)
        })?),
        None => None,
    };

    let mut records = store.load()?;
    if let Some(vt) = filter {
        records.retain(|r| r.voucher_type == vt);
    }
    if let Some(search) = &args.search {
        let needle = search.to_lowercase();
        records.retain(|r| matches_search(r, &needle));
    }

    if records.is_empty() {
        println!("No records matched; nothing to export.");
        return Ok(());
    }

    let output = args.output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}_{}.xlsx",
            config.export.default_file_stem,
            Local::now().format("%Y-%m-%d")
        ))
    });

    sheet::write_workbook(&records, &output)?;
    println!(
        "{} Exported {} records to {}",
        style("✓").green(),
        records.len(),
        output.display()
    );

    Ok(())
}

fn matches_search(record: &InvoiceRecord, needle: &str) -> bool {
    record.client_name.to_lowercase().contains(needle)
        || record.number.contains(needle)
        || record.date.contains(needle)
        || record.invoice_number.to_lowercase().contains(needle)
        || record.sold_by.to_lowercase().contains(needle)
}
