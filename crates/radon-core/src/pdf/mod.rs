//! PDF text-layer access.
//!
//! The extraction engine never opens files itself; it consumes text handed
//! over by this collaborator. Scanned (image-only) documents are out of
//! scope, so only the embedded text layer is read.

mod extractor;

pub use extractor::PdfTextExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text sources.
pub trait PdfSource {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Number of pages in the loaded document.
    fn page_count(&self) -> u32;

    /// Extract the text layer of the entire document.
    fn extract_text(&self) -> Result<String>;
}
