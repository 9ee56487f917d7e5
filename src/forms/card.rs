//! Card number helpers for the quote form's card subform.

use chrono::{Datelike, NaiveDate};

const MAX_CARD_DIGITS: usize = 19;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    Discover,
}

impl CardType {
    pub fn label(self) -> &'static str {
        match self {
            CardType::Visa => "Visa",
            CardType::Mastercard => "Mastercard",
            CardType::Amex => "American Express",
            CardType::Discover => "Discover",
        }
    }

    pub fn logo(self) -> &'static str {
        match self {
            CardType::Visa => "/images/cards/visa.svg",
            CardType::Mastercard => "/images/cards/mastercard.svg",
            CardType::Amex => "/images/cards/amex.svg",
            CardType::Discover => "/images/cards/discover.svg",
        }
    }

    pub fn cvv_len(self) -> usize {
        match self {
            CardType::Amex => 4,
            _ => 3,
        }
    }
}

fn digits_of(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Guesses the card brand from its leading digits. Display only.
pub fn detect_card_type(number: &str) -> Option<CardType> {
    let digits = digits_of(number);
    let prefix2 = digits.get(..2).and_then(|p| p.parse::<u8>().ok());

    if digits.starts_with('4') {
        Some(CardType::Visa)
    } else if matches!(prefix2, Some(51..=55)) {
        Some(CardType::Mastercard)
    } else if matches!(prefix2, Some(34 | 37)) {
        Some(CardType::Amex)
    } else if digits.starts_with("6011") || digits.starts_with("65") {
        Some(CardType::Discover)
    } else {
        None
    }
}

/// Keeps digits only and groups them in blocks of four: "4111 1111 1111 1111".
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = digits_of(input).chars().take(MAX_CARD_DIGITS).collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats free typing into `MM/YY`, inserting the slash after the month.
pub fn format_expiry(input: &str) -> String {
    let digits: String = digits_of(input).chars().take(4).collect();
    if digits.len() > 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Parses `MM/YY` into (month, full year).
pub fn parse_expiry(expiry: &str) -> Option<(u32, i32)> {
    let (mm, yy) = expiry.split_once('/')?;
    if mm.len() != 2 || yy.len() != 2 {
        return None;
    }
    let month: u32 = mm.parse().ok()?;
    let year: i32 = yy.parse().ok()?;
    (1..=12).contains(&month).then_some((month, 2000 + year))
}

/// A card is usable through the last day of its expiry month.
pub fn expiry_error(expiry: &str, today: NaiveDate) -> Option<&'static str> {
    let Some((month, year)) = parse_expiry(expiry) else {
        return Some("Use MM/YY");
    };
    if (year, month) < (today.year(), today.month()) {
        Some("Card has expired")
    } else {
        None
    }
}

pub fn card_number_error(number: &str) -> Option<&'static str> {
    let len = digits_of(number).len();
    (!(13..=MAX_CARD_DIGITS).contains(&len)).then_some("Card number looks too short")
}

pub fn cvv_error(cvv: &str, card_type: Option<CardType>) -> Option<&'static str> {
    let expected = card_type.map(CardType::cvv_len).unwrap_or(3);
    let ok = cvv.len() == expected && cvv.chars().all(|c| c.is_ascii_digit());
    (!ok).then_some(if expected == 4 {
        "CVV must be 4 digits"
    } else {
        "CVV must be 3 digits"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_brands_from_prefix() {
        assert_eq!(detect_card_type("4111111111111111"), Some(CardType::Visa));
        assert_eq!(detect_card_type("5500000000000000"), Some(CardType::Mastercard));
        assert_eq!(detect_card_type("340000000000009"), Some(CardType::Amex));
        assert_eq!(detect_card_type("6011000000000004"), Some(CardType::Discover));
        assert_eq!(detect_card_type("6500 0000 0000 0002"), Some(CardType::Discover));
        assert_eq!(detect_card_type("5600000000000000"), None);
        assert_eq!(detect_card_type("1234"), None);
        assert_eq!(detect_card_type(""), None);
    }

    #[test]
    fn groups_card_number_in_fours() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("4111-11"), "4111 11");
        assert_eq!(format_card_number("41111111111111111111111"), "4111 1111 1111 1111 111");
        assert_eq!(format_card_number("abc"), "");
    }

    #[test]
    fn formats_expiry_while_typing() {
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12"), "12");
        assert_eq!(format_expiry("122"), "12/2");
        assert_eq!(format_expiry("1225"), "12/25");
        assert_eq!(format_expiry("12/256"), "12/25");
        assert_eq!(format_expiry("1a2b"), "12");
    }

    #[test]
    fn expiry_checks_month_and_date() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(expiry_error("10/26", today), None);
        assert_eq!(expiry_error("09/26", today), Some("Card has expired"));
        assert_eq!(expiry_error("13/27", today), Some("Use MM/YY"));
        assert_eq!(expiry_error("1/27", today), Some("Use MM/YY"));
    }

    #[test]
    fn cvv_length_follows_brand() {
        assert_eq!(cvv_error("123", Some(CardType::Visa)), None);
        assert!(cvv_error("123", Some(CardType::Amex)).is_some());
        assert_eq!(cvv_error("1234", Some(CardType::Amex)), None);
        assert!(cvv_error("12a", None).is_some());
    }
}
