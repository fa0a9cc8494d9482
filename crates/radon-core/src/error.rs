//! Error types for the radon-core library.

use thiserror::Error;

/// Main error type for the radon library.
#[derive(Error, Debug)]
pub enum RadonError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Voucher extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Spreadsheet read/write error.
    #[error("spreadsheet error: {0}")]
    Sheet(#[from] SheetError),

    /// Record store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract the text layer.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to voucher field extraction.
///
/// A missing individual field is never an error: it defaults to an empty
/// string or zero and surfaces as a warning on the extraction result.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No document-type marker matched the text.
    #[error("unrecognized document")]
    Unrecognized,
}

/// Errors related to spreadsheet export/import.
#[derive(Error, Debug)]
pub enum SheetError {
    /// Failed to write the workbook.
    #[error("failed to write workbook: {0}")]
    Write(String),

    /// Failed to open or read the workbook.
    #[error("failed to read workbook: {0}")]
    Read(String),

    /// The workbook has no worksheets.
    #[error("workbook has no worksheets")]
    NoWorksheet,

    /// The worksheet has no header row.
    #[error("worksheet has no header row")]
    NoHeader,
}

/// Errors related to the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read the store file.
    #[error("failed to read store: {0}")]
    Read(String),

    /// Failed to write the store file.
    #[error("failed to write store: {0}")]
    Write(String),

    /// No record exists with the given id.
    #[error("no record with id {0}")]
    UnknownId(String),
}

/// Result type for the radon library.
pub type Result<T> = std::result::Result<T, RadonError>;
