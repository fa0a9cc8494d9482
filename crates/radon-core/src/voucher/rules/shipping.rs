//! Shipping-charge extraction anchored on the SAC tax code.

use rust_decimal::Decimal;

use super::amounts::parse_amount;
use super::patterns::{DECIMAL_NUMBER, SAC_AMOUNT, SHIPPING_CHARGE};
use super::window;

/// Characters examined after the shipping-charge label.
const FRAGMENT_WINDOW: usize = 200;

/// Extract the shipping charge billed on the document, zero when absent.
///
/// The charge is normally printed right after its SAC tax code, so that
/// marker is the preferred anchor. When the code is missing the last
/// decimal-looking number in the fragment is taken instead.
pub fn extract_shipping_charge(text: &str) -> Decimal {
    let label = match SHIPPING_CHARGE.find(text) {
        Some(m) => m,
        None => return Decimal::ZERO,
    };
    let fragment = window(text, label.start(), FRAGMENT_WINDOW);

    if let Some(caps) = SAC_AMOUNT.captures(fragment) {
        if let Some(amount) = parse_amount(&caps[1]) {
            return amount;
        }
    }

    DECIMAL_NUMBER
        .find_iter(fragment)
        .last()
        .and_then(|m| parse_amount(m.as_str()))
        .unwrap_or(Decimal::ZERO)
}
