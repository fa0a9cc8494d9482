//! Voucher classification and field extraction.

pub mod classifier;
mod parser;
pub mod rules;

pub use classifier::classify;
pub use parser::{normalize, ExtractionResult, RecordParser, VoucherParser};

pub use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
