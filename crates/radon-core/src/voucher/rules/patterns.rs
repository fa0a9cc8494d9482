//! Regex patterns for voucher field extraction.
//!
//! All patterns run against normalized text (whitespace runs collapsed to
//! single spaces), so none of them needs to tolerate line breaks.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Whitespace normalization
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Labeled dates, DD/MM/YYYY only
    pub static ref INVOICE_DATE: Regex =
        Regex::new(r"Invoice Date\s*:\s*(\d{2}/\d{2}/\d{4})").unwrap();

    pub static ref ORDER_DATE: Regex =
        Regex::new(r"Order Date\s*:\s*(\d{2}/\d{2}/\d{4})").unwrap();

    pub static ref CREDIT_DATE: Regex =
        Regex::new(r"Credit Date\s*:\s*(\d{2}/\d{2}/\d{4})").unwrap();

    pub static ref ANY_DATE: Regex =
        Regex::new(r"Date\s*:\s*(\d{2}/\d{2}/\d{4})").unwrap();

    // Document numbers
    pub static ref PO_NUMBER: Regex = Regex::new(r"P\.O\.#\s*:\s*(\S+)").unwrap();

    pub static ref SALES_ORDER_NUMBER: Regex =
        Regex::new(r"Sales Order#\s*:\s*(\S+)").unwrap();

    pub static ref INVOICE_NUMBER: Regex = Regex::new(r"Invoice#\s*:\s*(\S+)").unwrap();

    // Generic "# :" token; on credit notes the first occurrence is the
    // credit-note number itself.
    pub static ref HASH_NUMBER: Regex = Regex::new(r"#\s*:\s*(\S+)").unwrap();

    pub static ref RMA_NUMBER: Regex = Regex::new(r"RMA#\s*(RMA-\d+)").unwrap();

    // Amounts
    pub static ref DISCOUNT_PERCENT: Regex =
        Regex::new(r"Discount\((\d+\.?\d*)%\)").unwrap();

    pub static ref SUB_TOTAL: Regex = Regex::new(r"Sub Total\s+([\d,]+\.?\d*)").unwrap();

    pub static ref TOTAL: Regex = Regex::new(r"Total\s+([\d,]+\.?\d*)").unwrap();

    pub static ref DECIMAL_NUMBER: Regex = Regex::new(r"[\d,]+\.?\d*").unwrap();

    // Shipping charge line, amount anchored on the SAC tax code
    pub static ref SHIPPING_CHARGE: Regex = Regex::new(r"(?i)shipping charge").unwrap();

    pub static ref SAC_AMOUNT: Regex =
        Regex::new(r"(?i)SAC[: ]\s*\d+\s+([\d,]+\.?\d*)").unwrap();

    // Bill To / Ship To block
    pub static ref BILL_TO: Regex = Regex::new(r"(?i)bill to").unwrap();

    pub static ref SHIP_TO: Regex = Regex::new(r"(?i)ship to").unwrap();

    // Stray "ship"/"to" words leaking into the block from layout artifacts
    pub static ref SHIP_TO_LEAK: Regex = Regex::new(r"(?i)\b(?:ship|to)\b").unwrap();

    pub static ref PHONE_10: Regex = Regex::new(r"\d{10}").unwrap();

    pub static ref HONORIFIC: Regex = Regex::new(r"(?i)^(mr|mrs|ms|shri|smt)\.?").unwrap();
}
