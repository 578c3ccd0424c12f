//! Parse-then-normalize orchestration.

use vcardconv_rfc::error::RfcError;
use vcardconv_rfc::rfc::vcard::{Contact, NormalizeOptions, UnknownReport, normalize, parse};

use crate::error::ServiceResult;
use crate::export::ColumnLayout;

/// Contacts of one export after normalization, with the unknowns seen while parsing.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub contacts: Vec<Contact>,
    pub report: UnknownReport,
    /// Columns are grouped by category when the contacts were reordered.
    pub group_columns: bool,
}

impl Conversion {
    /// Column layout for tabular and JSON output.
    #[must_use]
    pub fn layout(&self) -> ColumnLayout {
        ColumnLayout::from_contacts(&self.contacts, self.group_columns)
    }
}

/// ## Summary
/// Parses a raw Apple Contacts export and runs the enabled normalizers.
///
/// ## Errors
/// Returns an error if the input is structurally malformed.
#[tracing::instrument(skip(raw, options), fields(input_len = raw.len()))]
pub fn convert(raw: &str, options: &NormalizeOptions) -> ServiceResult<Conversion> {
    let (contacts, report) = parse(raw).map_err(RfcError::from)?;
    tracing::debug!(
        contacts = contacts.len(),
        unknown = report.len(),
        "Parsed export"
    );

    Ok(Conversion {
        contacts: normalize(&contacts, options),
        report,
        group_columns: options.apply_reorder,
    })
}
