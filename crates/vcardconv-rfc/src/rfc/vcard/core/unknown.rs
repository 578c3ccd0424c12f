//! Run-wide accumulator for properties outside the dialect table.

/// One property that classification did not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntry {
    /// Zero-based index of the contact the property belongs to.
    pub contact_index: usize,
    /// Property name including any group prefix, e.g. `item4.X-CUSTOM`.
    pub raw_property_name: String,
    /// Value as written in the file, escapes intact.
    pub raw_value: String,
}

/// Unknown properties across the whole input, in encounter order.
///
/// Filled once during classification and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownReport {
    entries: Vec<UnknownEntry>,
}

impl UnknownReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        contact_index: usize,
        raw_property_name: impl Into<String>,
        raw_value: impl Into<String>,
    ) {
        self.entries.push(UnknownEntry {
            contact_index,
            raw_property_name: raw_property_name.into(),
            raw_value: raw_value.into(),
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[UnknownEntry] {
        &self.entries
    }

    /// Entries belonging to one contact.
    pub fn for_contact(&self, contact_index: usize) -> impl Iterator<Item = &UnknownEntry> {
        self.entries
            .iter()
            .filter(move |e| e.contact_index == contact_index)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
