//! US phone number formatting.

use crate::rfc::vcard::core::{Contact, Field, FieldCategory, FieldValue};

/// Formats a US number as `NPA-NXX-XXXX`.
///
/// Ten digits are formatted directly; eleven digits starting with `1` lose
/// the country code first. Any other digit count is returned unchanged.
#[must_use]
pub fn format_us_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();

    let national = match digits.len() {
        10 => digits.as_str(),
        11 if digits.starts_with('1') => &digits[1..],
        _ => return phone.to_string(),
    };

    format!(
        "{}-{}-{}",
        &national[..3],
        &national[3..6],
        &national[6..]
    )
}

/// Reformats every plain Phone value with [`format_us_phone`].
#[must_use]
pub fn normalize_phone(contact: &Contact) -> Contact {
    let fields = contact
        .fields
        .iter()
        .map(|field| match (&field.category, &field.value) {
            (FieldCategory::Phone, FieldValue::Plain(number)) => Field {
                value: FieldValue::Plain(format_us_phone(number)),
                ..field.clone()
            },
            _ => field.clone(),
        })
        .collect();

    Contact::new(fields)
}
