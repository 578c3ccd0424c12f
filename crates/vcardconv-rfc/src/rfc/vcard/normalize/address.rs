//! Structured address → postal block.

use crate::rfc::vcard::core::{Contact, Field, FieldCategory, FieldValue, PostalAddress};

/// Formats an address as a postal block:
///
/// ```text
/// street
/// locality, region postal_code
/// country
/// ```
///
/// Empty components are left out together with their punctuation, and a
/// line with nothing on it is dropped.
#[must_use]
pub fn format_postal_block(address: &PostalAddress) -> String {
    let region_postal = join_non_empty(
        &[address.region.as_str(), address.postal_code.as_str()],
        " ",
    );
    let locality = address.locality.trim();

    let city_line = match (locality.is_empty(), region_postal.is_empty()) {
        (false, false) => format!("{locality}, {region_postal}"),
        (false, true) => locality.to_string(),
        (true, _) => region_postal,
    };

    let lines = [
        address.po_box.trim(),
        address.extended.trim(),
        address.street.trim(),
        city_line.as_str(),
        address.country.trim(),
    ];

    join_non_empty(&lines, "\n")
}

fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Replaces every structured Address value with its postal block.
///
/// Values that are already plain text are left alone, so applying this
/// twice is the same as applying it once.
#[must_use]
pub fn normalize_address(contact: &Contact) -> Contact {
    let fields = contact
        .fields
        .iter()
        .map(|field| match (&field.category, &field.value) {
            (FieldCategory::Address, FieldValue::Structured(address)) => Field {
                value: FieldValue::Plain(format_postal_block(address)),
                ..field.clone()
            },
            _ => field.clone(),
        })
        .collect();

    Contact::new(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn springfield() -> PostalAddress {
        PostalAddress {
            street: "1 Main St".into(),
            locality: "Springfield".into(),
            region: "IL".into(),
            postal_code: "62704".into(),
            ..PostalAddress::default()
        }
    }

    #[test]
    fn country_line_omitted_when_empty() {
        assert_eq!(
            format_postal_block(&springfield()),
            "1 Main St\nSpringfield, IL 62704"
        );
    }

    #[test]
    fn full_address_with_country() {
        let address = PostalAddress {
            country: "USA".into(),
            ..springfield()
        };
        assert_eq!(
            format_postal_block(&address),
            "1 Main St\nSpringfield, IL 62704\nUSA"
        );
    }

    #[test]
    fn missing_locality_drops_comma() {
        let address = PostalAddress {
            locality: String::new(),
            ..springfield()
        };
        assert_eq!(format_postal_block(&address), "1 Main St\nIL 62704");
    }

    #[test]
    fn missing_region_and_postal_drops_comma() {
        let address = PostalAddress {
            region: String::new(),
            postal_code: String::new(),
            ..springfield()
        };
        assert_eq!(format_postal_block(&address), "1 Main St\nSpringfield");
    }

    #[test]
    fn multi_line_street_and_po_box() {
        let address = PostalAddress {
            po_box: "PO Box 12".into(),
            street: "1 Main St\nUnit 4".into(),
            ..springfield()
        };
        assert_eq!(
            format_postal_block(&address),
            "PO Box 12\n1 Main St\nUnit 4\nSpringfield, IL 62704"
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let contact = Contact::new(vec![
            Field::labeled(
                FieldCategory::Address,
                "Home",
                FieldValue::Structured(springfield()),
            ),
            Field::labeled(FieldCategory::Name, "Full", "Jane"),
        ]);

        let once = normalize_address(&contact);
        let twice = normalize_address(&once);

        assert_eq!(once, twice);
        assert_eq!(
            once.fields[0].value,
            FieldValue::from("1 Main St\nSpringfield, IL 62704")
        );
        assert_eq!(once.fields[1], contact.fields[1]);
    }
}
