//! Import command - read records from a spreadsheet into the store.

use std::path::PathBuf;

use clap::Args;
use console::style;

use radon_core::sheet;

/// Arguments for the import command.
#[derive(Args)]
pub struct ImportArgs {
    /// Input xlsx workbook in the export column layout
    #[arg(required = true)]
    input: PathBuf,
}

pub async fn run(args: ImportArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::config::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let records = sheet::read_workbook(&args.input)?;
    if records.is_empty() {
        println!("No records found in {}", args.input.display());
        return Ok(());
    }

    let imported = records.len();
    let store = super::store_handle(&config);
    let total = store.append(records)?;

    println!(
        "{} Imported {} records, store now holds {} ({})",
        style("✓").green(),
        imported,
        total,
        store.path().display()
    );

    Ok(())
}
