//! Spreadsheet-friendly CSV output.

use std::io;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use vcardconv_rfc::rfc::vcard::Contact;

use super::ColumnLayout;
use crate::error::ServiceResult;

/// Joins several values that land in the same column.
pub const DEFAULT_VALUE_SEPARATOR: &str = ", ";

/// ## Summary
/// Writes a header row and one row per contact. Every cell is quoted and
/// line breaks inside values are written as CRLF.
///
/// Nothing is written when the layout has no columns.
///
/// ## Errors
/// Returns an error if writing to `writer` fails.
#[tracing::instrument(skip_all, fields(contacts = contacts.len(), columns = layout.len()))]
pub fn write_csv<W: io::Write>(
    writer: W,
    contacts: &[Contact],
    layout: &ColumnLayout,
    separator: &str,
) -> ServiceResult<()> {
    if layout.is_empty() {
        tracing::debug!("No columns, skipping CSV output");
        return Ok(());
    }

    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv.write_record(layout.headers())?;
    for contact in contacts {
        let values = layout.values(contact);
        csv.write_record(values.iter().map(|cell| crlf(&cell.join(separator))))?;
    }
    csv.flush()?;

    Ok(())
}

fn crlf(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\n', "\r\n")
}
