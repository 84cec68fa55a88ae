//! Pure transforms from raw input to normalized field values.
//! None of them can fail, the worst case is an empty string.

use crate::consts;

fn ascii_digits(raw: &str, limit: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(limit).collect()
}

/// Keeps up to 16 digits grouped by 4 with a single space, e.g. `4111 1111 1111 1111`
pub fn format_card_number(raw: &str) -> String {
    let digits = ascii_digits(raw, consts::CARD_NUMBER_DIGITS);

    let mut formatted = String::with_capacity(consts::CARD_NUMBER_FORMATTED_LEN);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && i % consts::CARD_NUMBER_GROUP == 0 {
            formatted.push(' ');
        }
        formatted.push(digit);
    }

    formatted
}

/// Renders `MMYY` digits as `MM/YY` with the month clamped to 01..=12.
/// A single digit is left alone, two digits render as `MM/`.
pub fn format_expiry(raw: &str) -> String {
    let digits = ascii_digits(raw, consts::EXPIRY_DIGITS);
    if digits.len() < 2 {
        return digits;
    }

    let (month, year) = digits.split_at(2);
    let month = match month.parse::<u8>() {
        Ok(0) => "01",
        Ok(m) if m > 12 => "12",
        _ => month,
    };

    format!("{month}/{year}")
}

pub fn format_cvv(raw: &str) -> String {
    ascii_digits(raw, consts::CVV_DIGITS)
}

/// Keeps latin letters and whitespace, upper-cased
pub fn format_holder_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
