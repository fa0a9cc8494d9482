//! Workbook reader mapping named columns back onto invoice records.

use std::collections::HashMap;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use tracing::{info, warn};

use super::Result;
use crate::error::SheetError;
use crate::models::record::{InvoiceRecord, VoucherType};

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn cell_amount(cell: &Data) -> i64 {
    match cell {
        Data::Float(f) => f.round() as i64,
        Data::Int(i) => *i,
        Data::String(s) => s
            .trim()
            .replace(',', "")
            .parse::<f64>()
            .map(|f| f.round() as i64)
            .unwrap_or(0),
        _ => 0,
    }
}

/// Read records from the first worksheet of an xlsx workbook.
///
/// Columns are matched by header name, so the sheet may carry them in any
/// order. Every imported record gets a fresh identifier and a provenance
/// file name; rows whose voucher type is not one of the three known labels
/// are skipped.
pub fn read_workbook(path: &Path) -> Result<Vec<InvoiceRecord>> {
    let mut workbook: Xlsx<std::io::BufReader<std::fs::File>> =
        open_workbook(path).map_err(|e: calamine::XlsxError| SheetError::Read(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(SheetError::NoWorksheet)?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| SheetError::Read(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows.next().ok_or(SheetError::NoHeader)?;
    let columns: HashMap<String, usize> = header
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| match cell {
            Data::String(s) => Some((s.trim().to_string(), i)),
            _ => None,
        })
        .collect();

    let source_name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("workbook");

    let mut records = Vec::new();
    for row in rows {
        let text = |name: &str| -> String {
            columns
                .get(name)
                .and_then(|&i| row.get(i))
                .map(cell_text)
                .unwrap_or_default()
        };

        let voucher_label = text("Voucher Type");
        if voucher_label.is_empty() {
            continue;
        }
        let voucher_type = match VoucherType::from_str(&voucher_label) {
            Some(vt) => vt,
            None => {
                warn!("skipping row with unrecognized voucher type {:?}", voucher_label);
                continue;
            }
        };

        records.push(InvoiceRecord {
            id: InvoiceRecord::generate_id(),
            date: text("Date"),
            client_name: text("Client Name"),
            number: text("Number"),
            product_line: text("Product Line"),
            disc_offered: text("Disc Offered %"),
            voucher_type,
            invoice_number: text("Invoice Number"),
            amount: columns
                .get("AMOUNT")
                .and_then(|&i| row.get(i))
                .map(cell_amount)
                .unwrap_or(0),
            sold_by: text("Sold By"),
            source: text("Source"),
            source_name: text("Source NAME"),
            sale_type: text("Sale Type"),
            file_name: format!("Imported from {}", source_name),
        });
    }

    info!("imported {} records from {}", records.len(), path.display());
    Ok(records)
}
