//! Duplication of preferred fields.

use crate::rfc::vcard::core::{Contact, Field};

/// Appended to the label of a preferred-duplicate.
pub const PREFERRED_SUFFIX: &str = "Preferred";

/// Label of the duplicate made for a preferred field.
#[must_use]
pub fn preferred_label(label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{label} ({PREFERRED_SUFFIX})"),
        None => PREFERRED_SUFFIX.to_string(),
    }
}

/// Inserts a copy of each preferred field right after it.
///
/// The copy keeps category and value and gets a `(Preferred)` label. It is
/// not itself marked preferred.
#[must_use]
pub fn duplicate_preferred(contact: &Contact) -> Contact {
    let mut fields = Vec::with_capacity(contact.fields.len());

    for field in &contact.fields {
        fields.push(field.clone());
        if field.is_preferred {
            fields.push(Field {
                category: field.category,
                label: Some(preferred_label(field.label.as_deref())),
                value: field.value.clone(),
                is_preferred: false,
            });
        }
    }

    Contact::new(fields)
}
