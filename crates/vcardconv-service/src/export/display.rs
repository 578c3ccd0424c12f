//! Console output.

use std::io;

use vcardconv_rfc::rfc::vcard::{Contact, UnknownReport};

use super::ColumnLayout;
use crate::error::ServiceResult;

/// ## Summary
/// Prints every contact as a `New vCard Entry:` block with one indented
/// `column: value` line per value, in layout order.
///
/// ## Errors
/// Returns an error if writing to `out` fails.
pub fn write_contacts<W: io::Write>(
    out: &mut W,
    contacts: &[Contact],
    layout: &ColumnLayout,
) -> ServiceResult<()> {
    for contact in contacts {
        writeln!(out, "New vCard Entry:")?;
        for (column, values) in layout.columns().iter().zip(layout.values(contact)) {
            for value in values {
                writeln!(out, "  {column}: {value}")?;
            }
        }
    }
    Ok(())
}

/// ## Summary
/// Prints the unknown report grouped by contact. Each group is headed by the
/// contact's 1-based position and, when known, its full name.
///
/// ## Errors
/// Returns an error if writing to `out` fails.
pub fn write_unknown_report<W: io::Write>(
    out: &mut W,
    contacts: &[Contact],
    report: &UnknownReport,
) -> ServiceResult<()> {
    if report.is_empty() {
        writeln!(out, "No unknown properties found.")?;
        return Ok(());
    }

    let mut current = None;
    for entry in report.entries() {
        if current != Some(entry.contact_index) {
            current = Some(entry.contact_index);
            let number = entry.contact_index + 1;
            match contacts.get(entry.contact_index).and_then(Contact::full_name) {
                Some(name) => writeln!(out, "vCard Entry {number}: {name}")?,
                None => writeln!(out, "vCard Entry {number}:")?,
            }
        }
        writeln!(out, "  {}: {}", entry.raw_property_name, entry.raw_value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcardconv_rfc::rfc::vcard::{Field, FieldCategory};

    #[test]
    fn contact_blocks() {
        let contacts = vec![
            Contact::new(vec![
                Field::labeled(FieldCategory::Name, "Full", "Jane Doe"),
                Field::labeled(FieldCategory::Phone, "Cell", "555-000-1111"),
                Field::labeled(FieldCategory::Unknown, "X-FOO", "bar"),
            ]),
            Contact::new(vec![Field::labeled(FieldCategory::Phone, "Cell", "555-000-2222")]),
        ];
        let layout = ColumnLayout::from_contacts(&contacts, false);
        let mut out = Vec::new();

        write_contacts(&mut out, &contacts, &layout).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "New vCard Entry:\n  Name: Full: Jane Doe\n  Phone: Cell: 555-000-1111\n\
             New vCard Entry:\n  Phone: Cell: 555-000-2222\n"
        );
    }

    #[test]
    fn unknown_report_grouped_by_contact() {
        let contacts = vec![
            Contact::new(vec![Field::labeled(FieldCategory::Name, "Full", "Jane Doe")]),
            Contact::default(),
        ];
        let mut report = UnknownReport::new();
        report.record(0, "X-FOO", "bar");
        report.record(0, "item1.X-BAZ", "qux");
        report.record(1, "X-FOO", "other");
        let mut out = Vec::new();

        write_unknown_report(&mut out, &contacts, &report).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "vCard Entry 1: Jane Doe\n  X-FOO: bar\n  item1.X-BAZ: qux\n\
             vCard Entry 2:\n  X-FOO: other\n"
        );
    }

    #[test]
    fn empty_unknown_report() {
        let mut out = Vec::new();
        write_unknown_report(&mut out, &[], &UnknownReport::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No unknown properties found.\n");
    }
}
