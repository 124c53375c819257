//! Storefront helpers shared by the server catalog and the legacy catalog:
//! BRL price formatting and prefilled `wa.me` order links.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const WHATSAPP_BASE: &str = "https://wa.me";

/// Characters `encodeURIComponent` leaves as-is besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "{WHATSAPP_BASE}/{}?text={}",
        phone_digits(phone),
        encode_uri_component(message)
    )
}

/// Formats minor units as Brazilian reais, e.g. `R$ 1.234,56`.
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let reais = (abs / 100).to_string();
    let minor = abs % 100;

    let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
    for (i, ch) in reais.chars().enumerate() {
        if i > 0 && (reais.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{sign}R$ {grouped},{minor:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_reais_with_grouping() {
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(5), "R$ 0,05");
        assert_eq!(format_brl(12990), "R$ 129,90");
        assert_eq!(format_brl(123456), "R$ 1.234,56");
        assert_eq!(format_brl(100000000), "R$ 1.000.000,00");
        assert_eq!(format_brl(-250), "-R$ 2,50");
    }

    #[test]
    fn encodes_like_uri_component() {
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("(ok)!*'~"), "(ok)!*'~");
        assert_eq!(encode_uri_component("Preço\n"), "Pre%C3%A7o%0A");
    }

    #[test]
    fn link_strips_phone_formatting() {
        assert_eq!(
            whatsapp_link("+55 (11) 98765-4321", "Hi there"),
            "https://wa.me/5511987654321?text=Hi%20there"
        );
    }
}
