//! Amount parsing and the settlement pipeline shared by all voucher types.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::patterns::DISCOUNT_PERCENT;

/// Parse a comma-grouped decimal like `"1,234.56"`. Returns `None` when
/// nothing numeric remains after stripping separators.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.replace(',', "");
    let cleaned = cleaned.trim_end_matches('.');
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(cleaned).ok()
}

/// First capture group of the first matching pattern, tried in order.
pub fn first_capture(text: &str, patterns: &[&Regex]) -> Option<String> {
    patterns
        .iter()
        .find_map(|re| re.captures(text).map(|caps| caps[1].to_string()))
}

/// Discount pulled from a `Discount(NN%)` marker. The percentage is kept
/// numeric for arithmetic; the text form exists only for the record
/// boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discount {
    /// Numeric percentage, e.g. `12` or `12.5`.
    pub percent: Decimal,
    /// Boundary form, e.g. `"12%"` or `"0%"`.
    pub text: String,
}

impl Default for Discount {
    fn default() -> Self {
        Self {
            percent: Decimal::ZERO,
            text: "0%".to_string(),
        }
    }
}

/// Extract the discount marker, defaulting to zero percent.
pub fn parse_discount(text: &str) -> Discount {
    match DISCOUNT_PERCENT.captures(text) {
        Some(caps) => Discount {
            percent: Decimal::from_str(&caps[1]).unwrap_or_default(),
            text: format!("{}%", &caps[1]),
        },
        None => Discount::default(),
    }
}

/// Apply the discount to a gross amount, subtract the shipping charge, and
/// round to a whole settled amount.
pub fn settle(gross: Decimal, discount_pct: Decimal, shipping: Decimal) -> i64 {
    let discounted = (gross * (Decimal::ONE - discount_pct / Decimal::ONE_HUNDRED))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    round_whole(discounted - shipping)
}

/// Round a shipping-adjusted amount to a whole value.
pub fn round_whole(amount: Decimal) -> i64 {
    amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount_strips_commas() {
        assert_eq!(parse_amount("1,234.56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("500"), Some(dec("500")));
        assert_eq!(parse_amount("12,00,000"), Some(dec("1200000")));
        assert_eq!(parse_amount("800."), Some(dec("800")));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount(",."), None);
    }

    #[test]
    fn test_parse_discount() {
        let d = parse_discount("Sub Total 1000 Discount(12%) Total 880");
        assert_eq!(d.percent, dec("12"));
        assert_eq!(d.text, "12%");

        let d = parse_discount("Sub Total 1000");
        assert_eq!(d.percent, Decimal::ZERO);
        assert_eq!(d.text, "0%");

        let d = parse_discount("Discount(12.5%)");
        assert_eq!(d.percent, dec("12.5"));
        assert_eq!(d.text, "12.5%");
    }

    #[test]
    fn test_settle_applies_discount_then_shipping() {
        assert_eq!(settle(dec("1000"), dec("10"), Decimal::ZERO), 900);
        assert_eq!(settle(dec("1000"), dec("10"), dec("50")), 850);
        assert_eq!(settle(dec("1000"), Decimal::ZERO, Decimal::ZERO), 1000);
    }

    #[test]
    fn test_settled_amount_is_integral() {
        // 999.99 * 0.88 = 879.9912 -> 879.99 -> 880
        assert_eq!(settle(dec("999.99"), dec("12"), Decimal::ZERO), 880);
        // midpoint rounds away from zero
        assert_eq!(round_whole(dec("99.5")), 100);
        assert_eq!(round_whole(dec("99.4")), 99);
    }

    #[test]
    fn test_first_capture_order() {
        use super::super::patterns::{INVOICE_DATE, ORDER_DATE};

        let text = "Order Date : 01/01/2024 Invoice Date : 02/01/2024";
        let got = first_capture(text, &[&INVOICE_DATE, &ORDER_DATE]);
        assert_eq!(got.as_deref(), Some("02/01/2024"));

        let text = "Order Date : 01/01/2024";
        let got = first_capture(text, &[&INVOICE_DATE, &ORDER_DATE]);
        assert_eq!(got.as_deref(), Some("01/01/2024"));
    }
}
