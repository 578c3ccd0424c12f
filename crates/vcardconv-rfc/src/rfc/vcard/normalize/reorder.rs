//! Category reordering.

use crate::rfc::vcard::core::{Contact, Field};

/// Sorts fields into category order (Organization, Name, Phone, Email,
/// Address, Date, Relationship, Other), keeping the relative order within a
/// category. Unknown fields are dropped.
#[must_use]
pub fn reorder(contact: &Contact) -> Contact {
    let mut fields: Vec<Field> = contact.known_fields().cloned().collect();
    fields.sort_by_key(|f| f.category);
    Contact::new(fields)
}
