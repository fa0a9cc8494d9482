//! Voucher parser: normalize, classify, and run the matching document
//! profile.
//!
//! The three document types share the same post-processing pipeline
//! (discount, shipping subtraction, rounding); what differs between them is
//! the pattern set locating each field. A [`DocumentProfile`] captures that
//! pattern set so the pipeline itself exists once.

use std::time::Instant;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::record::{InvoiceRecord, VoucherType};

use super::classifier::classify;
use super::rules::amounts::{first_capture, parse_amount, parse_discount, round_whole, settle};
use super::rules::client::extract_client;
use super::rules::patterns::{
    ANY_DATE, CREDIT_DATE, HASH_NUMBER, INVOICE_DATE, INVOICE_NUMBER, ORDER_DATE, PO_NUMBER,
    RMA_NUMBER, SALES_ORDER_NUMBER, SUB_TOTAL, TOTAL, WHITESPACE_RUN,
};
use super::rules::shipping::extract_shipping_charge;
use super::{ExtractionError, Result};

/// Collapse whitespace runs to single spaces. All pattern searches run on
/// this uniform form.
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Result of a successful extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The extracted record.
    pub record: InvoiceRecord,
    /// Fields that fell back to their defaults.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for voucher parsing.
pub trait RecordParser {
    /// Parse one document's text into a record.
    fn parse(&self, text: &str, file_name: &str) -> Result<ExtractionResult>;
}

/// How the invoice number is assembled for a document type.
enum NumberRule {
    /// `"<primary> / <secondary>"`; a missing half renders empty.
    Composite {
        left: Vec<&'static Regex>,
        right: &'static Regex,
        strip: Option<&'static str>,
    },
    /// The matched token alone.
    Single(&'static Regex),
}

/// How the settled amount is derived for a document type.
enum AmountRule {
    /// Subtotal with the discount applied.
    Discounted,
    /// Subtotal taken as-is when present; otherwise the total with the
    /// discount applied.
    PreferSubtotal,
}

/// Per-variant pattern set driving the shared extraction pipeline.
struct DocumentProfile {
    kind: VoucherType,
    dates: Vec<&'static Regex>,
    number: NumberRule,
    amount: AmountRule,
}

impl DocumentProfile {
    fn for_kind(kind: VoucherType) -> Self {
        match kind {
            VoucherType::Sales => Self {
                kind,
                dates: vec![&INVOICE_DATE, &ORDER_DATE],
                number: NumberRule::Composite {
                    left: vec![&PO_NUMBER, &SALES_ORDER_NUMBER],
                    right: &INVOICE_NUMBER,
                    strip: None,
                },
                amount: AmountRule::Discounted,
            },
            VoucherType::CreditNote => Self {
                kind,
                dates: vec![&CREDIT_DATE],
                number: NumberRule::Composite {
                    left: vec![&HASH_NUMBER],
                    right: &INVOICE_NUMBER,
                    strip: Some("/JGT"),
                },
                amount: AmountRule::Discounted,
            },
            VoucherType::Rma => Self {
                kind,
                dates: vec![&ANY_DATE],
                number: NumberRule::Single(&RMA_NUMBER),
                amount: AmountRule::PreferSubtotal,
            },
        }
    }
}

/// Regex-chain voucher parser.
pub struct VoucherParser {
    /// Product line stamped on every record.
    product_line: String,
}

impl VoucherParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            product_line: "TILES".to_string(),
        }
    }

    /// Set the product line stamped on extracted records.
    pub fn with_product_line(mut self, product_line: impl Into<String>) -> Self {
        self.product_line = product_line.into();
        self
    }

    fn run_profile(
        &self,
        profile: &DocumentProfile,
        text: &str,
        file_name: &str,
        warnings: &mut Vec<String>,
    ) -> InvoiceRecord {
        let date = first_capture(text, &profile.dates).unwrap_or_default();
        if date.is_empty() {
            warnings.push("could not extract a document date".to_string());
        }

        let invoice_number = match &profile.number {
            NumberRule::Composite { left, right, strip } => {
                let mut primary = first_capture(text, left).unwrap_or_default();
                if let Some(suffix) = strip {
                    primary = primary.replace(suffix, "");
                }
                let secondary = right
                    .captures(text)
                    .map(|caps| caps[1].to_string())
                    .unwrap_or_default();
                format!("{} / {}", primary, secondary)
            }
            NumberRule::Single(re) => re
                .captures(text)
                .map(|caps| caps[1].to_string())
                .unwrap_or_default(),
        };

        let client = extract_client(text);
        if client.name.is_empty() {
            warnings.push("could not extract a client name".to_string());
        }
        if client.phone.is_empty() {
            warnings.push("could not extract a phone number".to_string());
        }

        let discount = parse_discount(text);
        let shipping = extract_shipping_charge(text);

        let subtotal = SUB_TOTAL.captures(text).and_then(|caps| parse_amount(&caps[1]));
        let amount = match profile.amount {
            AmountRule::Discounted => {
                if subtotal.is_none() {
                    warnings.push("no subtotal found, amount defaults to 0".to_string());
                }
                settle(subtotal.unwrap_or_default(), discount.percent, shipping)
            }
            AmountRule::PreferSubtotal => match subtotal {
                Some(sub) => round_whole(sub - shipping),
                None => {
                    let total = TOTAL
                        .captures(text)
                        .and_then(|caps| parse_amount(&caps[1]))
                        .unwrap_or(Decimal::ZERO);
                    settle(total, discount.percent, shipping)
                }
            },
        };

        InvoiceRecord {
            id: InvoiceRecord::generate_id(),
            date,
            client_name: client.name,
            number: client.phone,
            product_line: self.product_line.clone(),
            disc_offered: discount.text,
            voucher_type: profile.kind,
            invoice_number,
            amount,
            sold_by: String::new(),
            source: String::new(),
            source_name: String::new(),
            sale_type: String::new(),
            file_name: file_name.to_string(),
        }
    }
}

impl Default for VoucherParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordParser for VoucherParser {
    fn parse(&self, text: &str, file_name: &str) -> Result<ExtractionResult> {
        let start = Instant::now();

        info!("parsing {} characters of text from {}", text.len(), file_name);

        let text = normalize(text);
        let kind = classify(&text).ok_or(ExtractionError::Unrecognized)?;
        debug!("classified {} as {}", file_name, kind.as_str());

        let profile = DocumentProfile::for_kind(kind);
        let mut warnings = Vec::new();
        let record = self.run_profile(&profile, &text, file_name, &mut warnings);

        debug!(
            "extracted {} voucher {} amount {}",
            record.voucher_type.as_str(),
            record.invoice_number,
            record.amount
        );

        Ok(ExtractionResult {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> ExtractionResult {
        VoucherParser::new().parse(text, "test.pdf").unwrap()
    }

    #[test]
    fn test_sales_order() {
        let text = "Tax Invoice Invoice Date : 05/03/2024 P.O.# : PO123 \
                    Invoice# : INV55 Bill To Mr. Ramesh Kumar 9876543210 Plot 12 Jaipur \
                    Sub Total 1,000.00 Discount(10%)";
        let result = parse(text);
        let record = &result.record;

        assert_eq!(record.voucher_type, VoucherType::Sales);
        assert_eq!(record.date, "05/03/2024");
        assert_eq!(record.invoice_number, "PO123 / INV55");
        assert_eq!(record.client_name, "MR. RAMESH KUMAR");
        assert_eq!(record.number, "9876543210");
        assert_eq!(record.product_line, "TILES");
        assert_eq!(record.disc_offered, "10%");
        assert_eq!(record.amount, 900);
        assert_eq!(record.file_name, "test.pdf");
    }

    #[test]
    fn test_sales_order_with_shipping_charge() {
        let text = "Tax Invoice Invoice Date : 05/03/2024 P.O.# : PO123 \
                    Invoice# : INV55 Sub Total 1000 Discount(10%) \
                    Shipping Charge SAC: 9965 50.00";
        let result = parse(text);
        assert_eq!(result.record.amount, 850);
    }

    #[test]
    fn test_sales_date_falls_back_to_order_date() {
        let text = "Sales Order# : SO-77 Order Date : 11/02/2024 Sub Total 250";
        let result = parse(text);

        assert_eq!(result.record.date, "11/02/2024");
        assert_eq!(result.record.invoice_number, "SO-77 / ");
        assert_eq!(result.record.amount, 250);
    }

    #[test]
    fn test_credit_note() {
        let text = "CREDIT NOTE Credit Note# : CN-00012/JGT Credit Date : 01/02/2024 \
                    Invoice# : INV-9 Bill To Ms. Asha Jain 9000000001 Sector 4 \
                    Sub Total 2,000 Discount(5%)";
        let result = parse(text);
        let record = &result.record;

        assert_eq!(record.voucher_type, VoucherType::CreditNote);
        assert_eq!(record.date, "01/02/2024");
        assert_eq!(record.invoice_number, "CN-00012 / INV-9");
        assert_eq!(record.client_name, "MS. ASHA JAIN");
        assert_eq!(record.amount, 1900);
    }

    #[test]
    fn test_rma_uses_subtotal_without_discount() {
        let text = "SALES RETURN RMA# RMA-00169 Date : 12/04/2024 \
                    Ship To Smt. Asha Devi 9123456780 Sector 5 Jaipur Sub Total 500";
        let result = parse(text);
        let record = &result.record;

        assert_eq!(record.voucher_type, VoucherType::Rma);
        assert_eq!(record.date, "12/04/2024");
        assert_eq!(record.invoice_number, "RMA-00169");
        assert_eq!(record.client_name, "SMT. ASHA DEVI");
        assert_eq!(record.disc_offered, "0%");
        assert_eq!(record.amount, 500);
    }

    #[test]
    fn test_rma_falls_back_to_discounted_total() {
        let text = "RMA# RMA-00170 Date : 12/04/2024 Total 400 Discount(25%)";
        let result = parse(text);
        assert_eq!(result.record.amount, 300);
    }

    #[test]
    fn test_rma_classification_beats_sales_markers() {
        let text = "Tax Invoice Invoice# : INV-5 RMA# RMA-00171 Sub Total 100";
        let result = parse(text);
        assert_eq!(result.record.voucher_type, VoucherType::Rma);
        assert_eq!(result.record.invoice_number, "RMA-00171");
    }

    #[test]
    fn test_unrecognized_document() {
        let parser = VoucherParser::new();
        let err = parser.parse("monthly account statement", "x.pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Unrecognized));
    }

    #[test]
    fn test_missing_fields_default_with_warnings() {
        let text = "Tax Invoice Invoice# : INV-1";
        let result = parse(text);
        let record = &result.record;

        assert_eq!(record.date, "");
        assert_eq!(record.client_name, "");
        assert_eq!(record.number, "");
        assert_eq!(record.disc_offered, "0%");
        assert_eq!(record.amount, 0);
        assert_eq!(record.invoice_number, " / INV-1");
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_multiline_input_is_normalized() {
        let text = "Tax Invoice\nInvoice Date :\n05/03/2024\n\nSub   Total\t1000";
        let result = parse(text);
        assert_eq!(result.record.date, "05/03/2024");
        assert_eq!(result.record.amount, 1000);
    }

    #[test]
    fn test_custom_product_line() {
        let parser = VoucherParser::new().with_product_line("MARBLE");
        let result = parser.parse("Tax Invoice Sub Total 10", "y.pdf").unwrap();
        assert_eq!(result.record.product_line, "MARBLE");
    }
}
