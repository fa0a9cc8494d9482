//! Invoice record data model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Business document category, set once by the extractor that produced the
/// record and never inferred after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoucherType {
    /// Sales order / tax invoice.
    #[serde(rename = "Sales")]
    Sales,

    /// Credit note.
    #[serde(rename = "CN")]
    CreditNote,

    /// RMA sales return.
    #[serde(rename = "RMA")]
    Rma,
}

impl VoucherType {
    /// Parse a voucher type from its spreadsheet/display form.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Sales" => Some(VoucherType::Sales),
            "CN" => Some(VoucherType::CreditNote),
            "RMA" => Some(VoucherType::Rma),
            _ => None,
        }
    }

    /// Spreadsheet/display form.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoucherType::Sales => "Sales",
            VoucherType::CreditNote => "CN",
            VoucherType::Rma => "RMA",
        }
    }
}

impl std::fmt::Display for VoucherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted voucher. Each source document yields at most one record,
/// and records carry no relationships to each other.
///
/// After creation a record is a value object: only the editable subset
/// (`sold_by`, `source`, `source_name`, `sale_type`) may change, through
/// whole-field replacement via [`RecordEdit`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    /// Opaque unique identifier, no business meaning.
    pub id: String,

    /// Document date as `DD/MM/YYYY`, or empty. Not validated as a real
    /// calendar date.
    pub date: String,

    /// Uppercased client name, possibly with an honorific prefix.
    pub client_name: String,

    /// 10-digit phone token, or empty.
    pub number: String,

    /// Product line label.
    pub product_line: String,

    /// Discount percentage text, e.g. `"12%"` or `"0%"`.
    pub disc_offered: String,

    /// Document category that produced this record.
    pub voucher_type: VoucherType,

    /// Composite `"<primary> / <secondary>"` for sales and credit notes,
    /// the bare RMA number for returns.
    pub invoice_number: String,

    /// Settled amount after discount and shipping adjustment, rounded to a
    /// whole value.
    pub amount: i64,

    /// Editable field, never extracted from the document.
    pub sold_by: String,
    /// Editable field, never extracted from the document.
    pub source: String,
    /// Editable field, never extracted from the document.
    pub source_name: String,
    /// Editable field, never extracted from the document.
    pub sale_type: String,

    /// Original upload name, or an `"Imported from <name>"` marker for
    /// records sourced from a spreadsheet.
    pub file_name: String,
}

impl InvoiceRecord {
    /// Generate a fresh record identifier.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Replace the editable fields present in the patch.
    pub fn apply_edit(&mut self, edit: &RecordEdit) {
        if let Some(sold_by) = &edit.sold_by {
            self.sold_by = sold_by.clone();
        }
        if let Some(source) = &edit.source {
            self.source = source.clone();
        }
        if let Some(source_name) = &edit.source_name {
            self.source_name = source_name.clone();
        }
        if let Some(sale_type) = &edit.sale_type {
            self.sale_type = sale_type.clone();
        }
    }
}

/// Patch over the editable subset of a record. Absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordEdit {
    pub sold_by: Option<String>,
    pub source: Option<String>,
    pub source_name: Option<String>,
    pub sale_type: Option<String>,
}

impl RecordEdit {
    /// True when the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.sold_by.is_none()
            && self.source.is_none()
            && self.source_name.is_none()
            && self.sale_type.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> InvoiceRecord {
        InvoiceRecord {
            id: InvoiceRecord::generate_id(),
            date: "05/03/2024".to_string(),
            client_name: "MR. RAMESH KUMAR".to_string(),
            number: "9876543210".to_string(),
            product_line: "TILES".to_string(),
            disc_offered: "10%".to_string(),
            voucher_type: VoucherType::Sales,
            invoice_number: "PO123 / INV55".to_string(),
            amount: 900,
            sold_by: String::new(),
            source: String::new(),
            source_name: String::new(),
            sale_type: String::new(),
            file_name: "order.pdf".to_string(),
        }
    }

    #[test]
    fn test_voucher_type_round_trip() {
        for vt in [VoucherType::Sales, VoucherType::CreditNote, VoucherType::Rma] {
            assert_eq!(VoucherType::from_str(vt.as_str()), Some(vt));
        }
        assert_eq!(VoucherType::from_str("Proforma"), None);
    }

    #[test]
    fn test_record_serde_round_trip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: InvoiceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_voucher_type_serializes_to_display_form() {
        let json = serde_json::to_string(&VoucherType::CreditNote).unwrap();
        assert_eq!(json, "\"CN\"");
    }

    #[test]
    fn test_apply_edit_replaces_only_present_fields() {
        let mut record = sample();
        record.source = "walk-in".to_string();

        let edit = RecordEdit {
            sold_by: Some("Anita".to_string()),
            sale_type: Some("retail".to_string()),
            ..RecordEdit::default()
        };
        record.apply_edit(&edit);

        assert_eq!(record.sold_by, "Anita");
        assert_eq!(record.sale_type, "retail");
        assert_eq!(record.source, "walk-in");
        assert_eq!(record.amount, 900);
    }
}
