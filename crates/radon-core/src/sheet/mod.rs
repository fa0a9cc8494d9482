//! Spreadsheet export and import of invoice records.

mod export;
mod import;

pub use export::write_workbook;
pub use import::read_workbook;

use crate::error::SheetError;

/// Result type for spreadsheet operations.
pub type Result<T> = std::result::Result<T, SheetError>;

/// Column order of the export contract. Import maps the same names back
/// regardless of column position.
pub const COLUMNS: [&str; 12] = [
    "Date",
    "Sold By",
    "Client Name",
    "Number",
    "Source",
    "Source NAME",
    "Product Line",
    "Sale Type",
    "Disc Offered %",
    "Voucher Type",
    "Invoice Number",
    "AMOUNT",
];

/// Worksheet name used for exports.
pub const SHEET_NAME: &str = "Invoice Data";
