//! Document-type classification from discriminating markers.

use crate::models::record::VoucherType;

/// Markers checked in fixed priority order. Returns and credit notes often
/// quote the original invoice number, so their markers must win over the
/// sales markers.
const RMA_MARKERS: [&str; 3] = ["SALES RETURN", "RMA#", "RMA-"];
const CREDIT_NOTE_MARKERS: [&str; 2] = ["CREDIT NOTE", "CN-"];
const SALES_MARKERS: [&str; 4] = ["Tax Invoice", "Invoice#", "Sales Order", "Sales Order#"];

/// Classify normalized document text, `None` when no marker matches.
pub fn classify(text: &str) -> Option<VoucherType> {
    if RMA_MARKERS.iter().any(|m| text.contains(m)) {
        return Some(VoucherType::Rma);
    }
    if CREDIT_NOTE_MARKERS.iter().any(|m| text.contains(m)) {
        return Some(VoucherType::CreditNote);
    }
    if SALES_MARKERS.iter().any(|m| text.contains(m)) {
        return Some(VoucherType::Sales);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_markers() {
        assert_eq!(classify("Tax Invoice Invoice# : INV-1"), Some(VoucherType::Sales));
        assert_eq!(classify("Sales Order# : SO-9"), Some(VoucherType::Sales));
    }

    #[test]
    fn test_credit_note_markers() {
        assert_eq!(classify("CREDIT NOTE # : CN-0001"), Some(VoucherType::CreditNote));
        assert_eq!(classify("ref CN-0001"), Some(VoucherType::CreditNote));
    }

    #[test]
    fn test_rma_markers() {
        assert_eq!(classify("SALES RETURN"), Some(VoucherType::Rma));
        assert_eq!(classify("RMA# RMA-00169"), Some(VoucherType::Rma));
    }

    #[test]
    fn test_rma_wins_over_co_occurring_markers() {
        let text = "Tax Invoice CREDIT NOTE RMA# RMA-00169 Invoice# : INV-5";
        assert_eq!(classify(text), Some(VoucherType::Rma));
    }

    #[test]
    fn test_credit_note_wins_over_sales_markers() {
        let text = "CREDIT NOTE against Tax Invoice Invoice# : INV-5";
        assert_eq!(classify(text), Some(VoucherType::CreditNote));
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(classify("monthly statement of account"), None);
    }
}
