//! Client name and phone extraction from the Bill To / Ship To block.
//!
//! The address region of these documents has no reliable layout, so the
//! name boundary is a best-effort heuristic over a fixed character window,
//! not a grammar.

use super::patterns::{BILL_TO, HONORIFIC, PHONE_10, SHIP_TO, SHIP_TO_LEAK};
use super::window;

/// Name and phone carved out of the address block, both possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    /// Uppercased name, honorific prefix included when one was detected.
    pub name: String,
    /// 10-digit phone token.
    pub phone: String,
}

/// Characters of address block examined after the label.
const BLOCK_WINDOW: usize = 200;

/// Name accumulation stops after this many tokens.
const NAME_TOKEN_LIMIT: usize = 3;

/// Tokens that mark the start of the street address rather than the name.
const ADDRESS_NOISE: [&str; 11] = [
    "opposite",
    "road",
    "sector",
    "nagar",
    "lane",
    "street",
    "plot",
    "colony",
    "jaipur",
    "rajasthan",
    "india",
];

/// Extract the client name and phone from normalized text.
pub fn extract_client(text: &str) -> ClientInfo {
    let label = match BILL_TO.find(text).or_else(|| SHIP_TO.find(text)) {
        Some(m) => m,
        None => return ClientInfo::default(),
    };
    let mut block = window(text, label.end(), BLOCK_WINDOW).trim().to_string();

    // Layout artifacts can push "Ship To" fragments into the name region.
    block = SHIP_TO_LEAK.replace_all(&block, "").trim().to_string();

    let phone = PHONE_10
        .find(&block)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    if !phone.is_empty() {
        block = block.replacen(&phone, "", 1).trim().to_string();
    }

    block = block.replace(['(', ')'], " ").trim().to_string();

    let mut prefix = String::new();
    let honorific = HONORIFIC
        .captures(&block)
        .map(|caps| (caps[1].to_uppercase(), caps.get(0).map_or(0, |m| m.end())));
    if let Some((title, end)) = honorific {
        prefix = format!("{}.", title);
        block = block[end..].trim().to_string();
    }

    let mut parts: Vec<&str> = Vec::new();
    for token in block.split_whitespace() {
        if token
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
        {
            break;
        }
        if ADDRESS_NOISE.iter().any(|w| token.eq_ignore_ascii_case(w)) {
            break;
        }
        parts.push(token);
        if parts.len() >= NAME_TOKEN_LIMIT {
            break;
        }
    }

    let mut name = parts.join(" ");
    if !prefix.is_empty() {
        name = format!("{} {}", prefix, name);
    }

    ClientInfo {
        name: name.trim().to_uppercase(),
        phone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_address_block_yields_empty() {
        assert_eq!(extract_client("Sub Total 1000"), ClientInfo::default());
    }

    #[test]
    fn test_bill_to_with_honorific_and_phone() {
        let info =
            extract_client("Bill To Mr. Ramesh Kumar 9876543210 Plot 12 Jaipur Rajasthan");
        assert_eq!(info.name, "MR. RAMESH KUMAR");
        assert_eq!(info.phone, "9876543210");
    }

    #[test]
    fn test_ship_to_fallback_without_phone() {
        let info = extract_client("Ship To Rekha Sharma Jaipur 302001");
        assert_eq!(info.name, "REKHA SHARMA");
        assert_eq!(info.phone, "");
    }

    #[test]
    fn test_leaked_ship_to_words_are_stripped() {
        let info = extract_client("Bill To Ship To Mr. Anand 9876543210 Nagar Road");
        assert_eq!(info.name, "MR. ANAND");
        assert_eq!(info.phone, "9876543210");
    }

    #[test]
    fn test_phone_inside_parentheses() {
        let info = extract_client("Bill To Mr. Sunil Verma (8661234567) Sector 5");
        assert_eq!(info.name, "MR. SUNIL VERMA");
        assert_eq!(info.phone, "8661234567");
    }

    #[test]
    fn test_name_capped_at_three_tokens() {
        let info = extract_client("Bill To Anand Kumar Singh Chauhan");
        assert_eq!(info.name, "ANAND KUMAR SINGH");
    }

    #[test]
    fn test_digit_leading_token_ends_name() {
        let info = extract_client("Bill To Anand 12B Street");
        assert_eq!(info.name, "ANAND");
    }

    #[test]
    fn test_noise_vocabulary_ends_name() {
        let info = extract_client("Bill To Shri Mohan Opposite City Mall");
        assert_eq!(info.name, "SHRI. MOHAN");
    }
}
