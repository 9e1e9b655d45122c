//! Phone normalization and `wa.me` deep links.

use crate::error::InquiryError;

/// Base URL of WhatsApp click-to-chat links
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Shortest accepted international number (country code included)
const MIN_PHONE_DIGITS: usize = 8;

/// E.164 upper bound
const MAX_PHONE_DIGITS: usize = 15;

/// Normalize a phone number to the digits-only international form `wa.me`
/// expects.
///
/// Spaces, dashes, dots and parentheses are dropped. A leading `+` marks an
/// international number; a leading `0` is a trunk prefix and is replaced by
/// `default_country_code`.
pub fn normalize_phone(raw: &str, default_country_code: &str) -> Result<String, InquiryError> {
    let trimmed = raw.trim();
    let international = trimmed.starts_with('+');
    let body = trimmed.trim_start_matches('+');

    let mut digits = String::with_capacity(body.len());
    for c in body.chars() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return Err(InquiryError::InvalidPhone(raw.to_string())),
        }
    }

    if !international {
        if let Some(local) = digits.strip_prefix('0') {
            let country: String = default_country_code
                .chars()
                .filter(char::is_ascii_digit)
                .collect();
            digits = format!("{country}{local}");
            tracing::debug!("Replaced trunk prefix with country code {}", country);
        }
    }

    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        return Err(InquiryError::InvalidPhone(raw.to_string()));
    }

    Ok(digits)
}

/// Build `https://wa.me/<digits>?text=<urlencoded text>`.
///
/// `phone` must already be normalized with [`normalize_phone`].
pub fn whatsapp_link(phone: &str, text: &str) -> Result<String, InquiryError> {
    if phone.is_empty() || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(InquiryError::InvalidPhone(phone.to_string()));
    }
    if text.trim().is_empty() {
        return Err(InquiryError::EmptyMessage);
    }

    Ok(format!(
        "{WHATSAPP_BASE_URL}/{phone}?text={}",
        urlencoding::encode(text)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_international() {
        assert_eq!(normalize_phone("+62 812-3456-7890", "62").unwrap(), "6281234567890");
        assert_eq!(normalize_phone("+1 (415) 555.0100", "62").unwrap(), "14155550100");
    }

    #[test]
    fn test_normalize_trunk_prefix() {
        assert_eq!(normalize_phone("0812 3456 7890", "62").unwrap(), "6281234567890");
        assert_eq!(normalize_phone("0812 3456 7890", "+62").unwrap(), "6281234567890");
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(matches!(normalize_phone("call me", "62"), Err(InquiryError::InvalidPhone(_))));
        assert!(matches!(normalize_phone("+123", "62"), Err(InquiryError::InvalidPhone(_))));
        assert!(matches!(
            normalize_phone("+1234567890123456", "62"),
            Err(InquiryError::InvalidPhone(_))
        ));
        assert!(matches!(normalize_phone("", "62"), Err(InquiryError::InvalidPhone(_))));
    }

    #[test]
    fn test_link_encodes_text() {
        let link = whatsapp_link("6281234567890", "Hi! Villa #3 & pool?\nThanks").unwrap();
        assert_eq!(
            link,
            "https://wa.me/6281234567890?text=Hi%21%20Villa%20%233%20%26%20pool%3F%0AThanks"
        );
    }

    #[test]
    fn test_link_errors() {
        assert_eq!(whatsapp_link("6281234567890", "  \n"), Err(InquiryError::EmptyMessage));
        assert!(matches!(whatsapp_link("+62812", "hi"), Err(InquiryError::InvalidPhone(_))));
    }
}
