//! Semantic contact fields produced by classification.

use std::fmt;

/// Semantic category of a contact field.
///
/// Declaration order is the order the reorderer sorts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldCategory {
    Organization,
    Name,
    Phone,
    Email,
    Address,
    Date,
    Relationship,
    Other,
    Unknown,
}

impl FieldCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::Date => "Date",
            Self::Relationship => "Relationship",
            Self::Other => "Other",
            Self::Unknown => "Unknown",
        }
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured postal address (ADR).
///
/// Components follow the ADR order; the first two are rarely used by Apple
/// Contacts but are kept so that nothing is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostalAddress {
    /// Post office box.
    pub po_box: String,
    /// Extended address (apartment or suite).
    pub extended: String,
    /// Street address, possibly spanning several lines.
    pub street: String,
    /// City.
    pub locality: String,
    /// State or province.
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl PostalAddress {
    /// Builds an address from ADR components in vCard order.
    #[must_use]
    pub fn from_components<S: AsRef<str>>(parts: &[S]) -> Self {
        let part = |i: usize| {
            parts
                .get(i)
                .map_or_else(String::new, |s| s.as_ref().to_string())
        };
        Self {
            po_box: part(0),
            extended: part(1),
            street: part(2),
            locality: part(3),
            region: part(4),
            postal_code: part(5),
            country: part(6),
        }
    }

    /// Returns whether every component is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components().iter().all(|c| c.is_empty())
    }

    /// Returns the components in vCard order.
    #[must_use]
    pub fn components(&self) -> [&str; 7] {
        [
            &self.po_box,
            &self.extended,
            &self.street,
            &self.locality,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
    }

    /// Renders the address the way it appears in the vCard value,
    /// components separated by `;`.
    #[must_use]
    pub fn to_structured_text(&self) -> String {
        self.components().join(";")
    }
}

/// A field value: plain text, or a structured address awaiting formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Plain(String),
    Structured(PostalAddress),
}

impl FieldValue {
    /// Renders the value as output text.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Plain(s) => s.clone(),
            Self::Structured(addr) => addr.to_structured_text(),
        }
    }

    #[must_use]
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Self::Plain(s) => Some(s),
            Self::Structured(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Plain(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

/// One semantic field of a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub category: FieldCategory,
    /// Sub-label within the category, e.g. "Cell" or "Home".
    pub label: Option<String>,
    pub value: FieldValue,
    pub is_preferred: bool,
}

impl Field {
    #[must_use]
    pub fn new(
        category: FieldCategory,
        label: Option<String>,
        value: impl Into<FieldValue>,
    ) -> Self {
        Self {
            category,
            label,
            value: value.into(),
            is_preferred: false,
        }
    }

    /// Creates a field with a fixed label.
    #[must_use]
    pub fn labeled(
        category: FieldCategory,
        label: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Self {
        Self::new(category, Some(label.into()), value)
    }

    #[must_use]
    pub fn preferred(mut self, is_preferred: bool) -> Self {
        self.is_preferred = is_preferred;
        self
    }

    /// Returns `"<Category>: <label>"`, or just the category when unlabeled.
    #[must_use]
    pub fn qualified_label(&self) -> String {
        match &self.label {
            Some(label) => format!("{}: {label}", self.category),
            None => self.category.as_str().to_string(),
        }
    }
}
