//! Workbook writer for the fixed invoice-data column contract.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::info;

use super::{Result, COLUMNS, SHEET_NAME};
use crate::error::SheetError;
use crate::models::record::InvoiceRecord;

/// Column widths matching the established export layout.
const COLUMN_WIDTHS: [f64; 12] = [
    12.0, 20.0, 30.0, 15.0, 15.0, 20.0, 20.0, 12.0, 15.0, 15.0, 20.0, 15.0,
];

fn write_err(e: XlsxError) -> SheetError {
    SheetError::Write(e.to_string())
}

/// Write records to an xlsx workbook, one row per record, `AMOUNT` as a
/// number and every other column as text.
pub fn write_workbook(records: &[InvoiceRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME).map_err(write_err)?;

    let header = Format::new().set_bold();
    for (col, name) in COLUMNS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *name, &header)
            .map_err(write_err)?;
    }
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width).map_err(write_err)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        let text_cells = [
            record.date.as_str(),
            record.sold_by.as_str(),
            record.client_name.as_str(),
            record.number.as_str(),
            record.source.as_str(),
            record.source_name.as_str(),
            record.product_line.as_str(),
            record.sale_type.as_str(),
            record.disc_offered.as_str(),
            record.voucher_type.as_str(),
            record.invoice_number.as_str(),
        ];
        for (col, value) in text_cells.iter().enumerate() {
            sheet.write_string(row, col as u16, *value).map_err(write_err)?;
        }
        sheet
            .write_number(row, 11, record.amount as f64)
            .map_err(write_err)?;
    }

    workbook.save(path).map_err(write_err)?;
    info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}
