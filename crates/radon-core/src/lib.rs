//! Core library for radon voucher extraction.
//!
//! This crate provides:
//! - PDF text-layer access (the engine itself never opens files)
//! - Document classification (Sales / Credit Note / RMA)
//! - Regex-chain field extraction into [`InvoiceRecord`]
//! - Spreadsheet export/import, the record store, and the document registry

pub mod error;
pub mod models;
pub mod pdf;
pub mod registry;
pub mod sheet;
pub mod store;
pub mod voucher;

pub use error::{ExtractionError, PdfError, RadonError, Result, SheetError, StoreError};
pub use models::config::RadonConfig;
pub use models::record::{InvoiceRecord, RecordEdit, VoucherType};
pub use pdf::{PdfSource, PdfTextExtractor};
pub use registry::DocumentRegistry;
pub use store::RecordStore;
pub use voucher::{classify, normalize, ExtractionResult, RecordParser, VoucherParser};
