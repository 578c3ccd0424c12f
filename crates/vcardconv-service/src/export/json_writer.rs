//! Nested JSON output: category → label → value.

use std::io;

use serde::Serialize as _;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use vcardconv_rfc::rfc::vcard::Contact;

use super::ColumnLayout;
use crate::error::ServiceResult;

/// Key used for fields without a label.
pub const UNLABELED_KEY: &str = "Value";

const INDENT: &[u8] = b"    ";

/// ## Summary
/// Builds one object per contact, keyed by category and then by label.
///
/// A label with one value maps to a string, a repeated label to an array.
/// Contacts without any known field are left out.
#[must_use]
pub fn contacts_to_json(contacts: &[Contact], layout: &ColumnLayout) -> Value {
    let objects = contacts
        .iter()
        .filter_map(|contact| contact_object(contact, layout))
        .collect();

    Value::Array(objects)
}

fn contact_object(contact: &Contact, layout: &ColumnLayout) -> Option<Value> {
    let mut object = Map::new();

    for (column, mut values) in layout.columns().iter().zip(layout.values(contact)) {
        let value = match values.len() {
            0 => continue,
            1 => Value::String(values.remove(0)),
            _ => Value::Array(values.into_iter().map(Value::String).collect()),
        };

        let label = column.label.as_deref().unwrap_or(UNLABELED_KEY);
        if let Value::Object(category) = object
            .entry(column.category.as_str())
            .or_insert_with(|| Value::Object(Map::new()))
        {
            category.insert(label.to_string(), value);
        }
    }

    (!object.is_empty()).then_some(Value::Object(object))
}

/// ## Summary
/// Writes [`contacts_to_json`] pretty-printed with four-space indentation.
///
/// ## Errors
/// Returns an error if serialization or writing fails.
#[tracing::instrument(skip_all, fields(contacts = contacts.len()))]
pub fn write_json<W: io::Write>(
    mut writer: W,
    contacts: &[Contact],
    layout: &ColumnLayout,
) -> ServiceResult<()> {
    let value = contacts_to_json(contacts, layout);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}
