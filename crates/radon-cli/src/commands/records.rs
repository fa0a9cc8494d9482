//! Records command - list and edit the stored record collection.

use clap::{Args, Subcommand};
use console::style;

use radon_core::{RecordEdit, VoucherType};

/// Arguments for the records command.
#[derive(Args)]
pub struct RecordsArgs {
    #[command(subcommand)]
    command: RecordsCommand,
}

#[derive(Subcommand)]
enum RecordsCommand {
    /// List stored records
    List {
        /// Only show records of one voucher type (Sales, CN, RMA)
        #[arg(long)]
        voucher_type: Option<String>,
    },

    /// Replace editable fields on a record
    Edit {
        /// Record id
        id: String,

        #[arg(long)]
        sold_by: Option<String>,

        #[arg(long)]
        source: Option<String>,

        #[arg(long)]
        source_name: Option<String>,

        #[arg(long)]
        sale_type: Option<String>,
    },

    /// Delete a record by id
    Delete {
        /// Record id
        id: String,
    },

    /// Delete all stored records
    Clear {
        /// Skip the confirmation requirement
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(args: RecordsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::config::load_config(config_path)?;
    let store = super::store_handle(&config);

    match args.command {
        RecordsCommand::List { voucher_type } => {
            let filter = match voucher_type.as_deref() {
                Some(label) => Some(
                    VoucherType::from_str(label)
                        .ok_or_else(|| anyhow::anyhow!("Unknown voucher type: {} (expected Sales, CN, or RMA)", label))?,
                ),
                None => None,
            };

            let records = store.load()?;
            let shown: Vec<_> = records
                .iter()
                .filter(|r| filter.is_none_or(|vt| r.voucher_type == vt))
                .collect();

            if shown.is_empty() {
                println!("No records stored.");
                return Ok(());
            }

            println!(
                "{}",
                style(format!(
                    "{:<36}  {:<10}  {:<5}  {:<24}  {:<26}  {:>9}",
                    "ID", "DATE", "TYPE", "INVOICE NUMBER", "CLIENT", "AMOUNT"
                ))
                .bold()
            );
            for record in &shown {
                println!(
                    "{:<36}  {:<10}  {:<5}  {:<24}  {:<26}  {:>9}",
                    record.id,
                    record.date,
                    record.voucher_type.as_str(),
                    record.invoice_number,
                    record.client_name,
                    record.amount
                );
            }
            println!();
            println!("{} records", shown.len());
        }

        RecordsCommand::Edit {
            id,
            sold_by,
            source,
            source_name,
            sale_type,
        } => {
            let edit = RecordEdit {
                sold_by,
                source,
                source_name,
                sale_type,
            };
            if edit.is_empty() {
                anyhow::bail!(
                    "Nothing to edit. Pass at least one of --sold-by, --source, --source-name, --sale-type."
                );
            }

            let patched = store.patch(&id, &edit)?;
            println!(
                "{} Updated {} ({})",
                style("✓").green(),
                patched.invoice_number,
                patched.id
            );
        }

        RecordsCommand::Delete { id } => {
            store.delete(&id)?;
            println!("{} Deleted record {}", style("✓").green(), id);
        }

        RecordsCommand::Clear { yes } => {
            if !yes {
                anyhow::bail!("Refusing to clear the store without --yes");
            }
            store.clear()?;
            println!("{} Cleared all stored records", style("✓").green());
        }
    }

    Ok(())
}
