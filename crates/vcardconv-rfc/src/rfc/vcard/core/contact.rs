//! Assembled contact records.

use super::field::{Field, FieldCategory};

/// One contact, assembled from a `BEGIN:VCARD`…`END:VCARD` record.
///
/// Fields keep source order until the reorderer runs. Unknown fields are
/// kept so diagnostics can reach them, but [`Contact::known_fields`] is what
/// exporters read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub fields: Vec<Field>,
}

impl Contact {
    #[must_use]
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Fields of every category except Unknown, in order.
    pub fn known_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.category.is_known())
    }

    /// Fields of a single category, in order.
    pub fn fields_of(&self, category: FieldCategory) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(move |f| f.category == category)
    }

    /// Returns the first field with the given category and label.
    #[must_use]
    pub fn get(&self, category: FieldCategory, label: &str) -> Option<&Field> {
        self.fields_of(category)
            .find(|f| f.label.as_deref() == Some(label))
    }

    /// Returns the formatted full name (FN), if present.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.get(FieldCategory::Name, "Full")
            .and_then(|f| f.value.as_plain())
    }
}
