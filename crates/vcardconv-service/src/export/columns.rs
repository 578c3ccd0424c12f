use std::collections::HashSet;
use std::fmt;

use vcardconv_rfc::rfc::vcard::{Contact, Field, FieldCategory};

/// One output column: a category and an optional label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    pub category: FieldCategory,
    pub label: Option<String>,
}

impl Column {
    #[must_use]
    pub fn of(field: &Field) -> Self {
        Self {
            category: field.category,
            label: field.label.clone(),
        }
    }

    #[must_use]
    pub fn matches(&self, field: &Field) -> bool {
        field.category == self.category && field.label == self.label
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}: {label}", self.category),
            None => write!(f, "{}", self.category),
        }
    }
}

/// The ordered set of columns found across a list of contacts.
///
/// Columns appear in the order they are first seen. Unknown fields never
/// produce a column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    columns: Vec<Column>,
}

impl ColumnLayout {
    /// ## Summary
    /// Collects the columns of every known field.
    ///
    /// With `group_by_category` the columns are stably sorted by category
    /// order, keeping first-seen order within a category.
    #[must_use]
    pub fn from_contacts(contacts: &[Contact], group_by_category: bool) -> Self {
        let mut seen = HashSet::new();
        let mut columns: Vec<Column> = contacts
            .iter()
            .flat_map(Contact::known_fields)
            .map(Column::of)
            .filter(|column| seen.insert(column.clone()))
            .collect();

        if group_by_category {
            columns.sort_by_key(|column| column.category);
        }

        Self { columns }
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Header row, one name per column.
    #[must_use]
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(ToString::to_string).collect()
    }

    /// Values of `contact` per column, in column order. A column the contact
    /// has no field for yields an empty list.
    #[must_use]
    pub fn values(&self, contact: &Contact) -> Vec<Vec<String>> {
        self.columns
            .iter()
            .map(|column| {
                contact
                    .known_fields()
                    .filter(|field| column.matches(field))
                    .map(|field| field.value.to_text())
                    .collect()
            })
            .collect()
    }
}
