//! The Apple Contacts export vocabulary.

use super::dialect::{Dialect, FieldRule, LabelRule, ValueRule};
use crate::rfc::vcard::core::{FieldCategory, VCardProperty, names, types};

const NAME_COMPONENTS: &[&str] = &["Last", "First", "Middle", "Prefix", "Suffix"];
const ORG_COMPONENTS: &[&str] = &["Name", "Department"];

/// TYPE values that never name a field.
const NON_LABEL_TYPES: &[&str] = &[types::PREF, types::INTERNET, types::VOICE];

/// `X-ABShowAs` value that marks a company card.
const SHOW_AS_COMPANY: &str = "COMPANY";

/// Value written for a set marker field.
const FLAG_SET: &str = "X";

/// Apple wraps its built-in labels as `_$!<Label>!$_`.
const BUILTIN_LABEL_OPEN: &str = "_$!<";
const BUILTIN_LABEL_CLOSE: &str = ">!$_";

const fn resolved(from_params: Option<super::dialect::ParamLabelFn>) -> LabelRule {
    LabelRule::Resolved {
        prefix: None,
        from_params,
    }
}

const fn prefixed(prefix: &'static str, from_params: super::dialect::ParamLabelFn) -> LabelRule {
    LabelRule::Resolved {
        prefix: Some(prefix),
        from_params: Some(from_params),
    }
}

pub const APPLE_CONTACTS: Dialect = Dialect {
    name: "Apple Contacts",
    group_label_property: names::AB_LABEL,
    rules: &[
        // Name
        FieldRule::field(
            names::N,
            FieldCategory::Name,
            LabelRule::Components(NAME_COMPONENTS),
            ValueRule::Text,
        ),
        FieldRule::field(
            names::FN,
            FieldCategory::Name,
            LabelRule::Fixed("Full"),
            ValueRule::Text,
        ),
        FieldRule::field(
            names::NICKNAME,
            FieldCategory::Name,
            LabelRule::Fixed("Nickname"),
            ValueRule::Text,
        ),
        FieldRule::field(
            names::MAIDEN_NAME,
            FieldCategory::Name,
            LabelRule::Fixed("Maiden"),
            ValueRule::Text,
        ),
        FieldRule::field(
            names::PHONETIC_FIRST_NAME,
            FieldCategory::Name,
            LabelRule::Fixed("First (Phonetic)"),
            ValueRule::Text,
        ),
        FieldRule::field(
            names::PHONETIC_MIDDLE_NAME,
            FieldCategory::Name,
            LabelRule::Fixed("Middle (Phonetic)"),
            ValueRule::Text,
        ),
        FieldRule::field(
            names::PHONETIC_LAST_NAME,
            FieldCategory::Name,
            LabelRule::Fixed("Last (Phonetic)"),
            ValueRule::Text,
        ),
        // Organization
        FieldRule::field(
            names::ORG,
            FieldCategory::Organization,
            LabelRule::Components(ORG_COMPONENTS),
            ValueRule::Text,
        ),
        FieldRule::field(
            names::PHONETIC_ORG,
            FieldCategory::Organization,
            LabelRule::Fixed("Name (Phonetic)"),
            ValueRule::Text,
        ),
        FieldRule::field(
            names::TITLE,
            FieldCategory::Organization,
            LabelRule::Fixed("Title"),
            ValueRule::Text,
        ),
        FieldRule::field(
            names::SHOW_AS,
            FieldCategory::Organization,
            LabelRule::Fixed("Is Company"),
            ValueRule::Flag {
                when: SHOW_AS_COMPANY,
                flag: FLAG_SET,
            },
        ),
        // Communications
        FieldRule::field(
            names::TEL,
            FieldCategory::Phone,
            resolved(Some(phone_label)),
            ValueRule::Text,
        ),
        FieldRule::field(
            names::EMAIL,
            FieldCategory::Email,
            resolved(Some(type_label)),
            ValueRule::Text,
        ),
        FieldRule::field(
            names::ADR,
            FieldCategory::Address,
            resolved(Some(type_label)),
            ValueRule::Address,
        ),
        // Dates and relations
        FieldRule::field(
            names::BDAY,
            FieldCategory::Date,
            LabelRule::Fixed("Birthday"),
            ValueRule::OmitYear,
        ),
        FieldRule::field(
            names::AB_DATE,
            FieldCategory::Date,
            resolved(None),
            ValueRule::OmitYear,
        ),
        FieldRule::field(
            names::AB_RELATED_NAMES,
            FieldCategory::Relationship,
            resolved(None),
            ValueRule::Text,
        ),
        // Other
        FieldRule::field(
            names::URL,
            FieldCategory::Other,
            prefixed("URL", type_label),
            ValueRule::Text,
        ),
        FieldRule::field(
            names::IMPP,
            FieldCategory::Other,
            prefixed("IMPP", impp_label),
            ValueRule::StripScheme,
        ),
        FieldRule::field(
            names::SOCIAL_PROFILE,
            FieldCategory::Other,
            prefixed("Social", type_label),
            ValueRule::Text,
        ),
        FieldRule::field(
            names::NOTE,
            FieldCategory::Other,
            LabelRule::Fixed("Note"),
            ValueRule::Text,
        ),
        // Companions
        FieldRule::companion(names::AB_LABEL),
        FieldRule::companion(names::AB_ADR),
        FieldRule::companion(names::AIM),
        FieldRule::companion(names::JABBER),
        FieldRule::companion(names::MSN),
        FieldRule::companion(names::YAHOO),
        FieldRule::companion(names::ICQ),
        // Discarded
        FieldRule::discard(names::VERSION),
        FieldRule::discard(names::PRODID),
        FieldRule::discard(names::PHOTO),
        FieldRule::discard(names::SENSITIVE_CONTENT),
    ],
};

/// Unwraps Apple's built-in label marker, leaving custom labels as written.
#[must_use]
pub fn unwrap_label(label: &str) -> &str {
    let label = label.trim();
    label
        .strip_prefix(BUILTIN_LABEL_OPEN)
        .and_then(|rest| rest.strip_suffix(BUILTIN_LABEL_CLOSE))
        .map_or(label, str::trim)
}

/// Uppercases the first character and lowercases the rest.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn label_types(prop: &VCardProperty) -> Vec<String> {
    prop.type_values()
        .map(str::to_ascii_lowercase)
        .filter(|t| !t.is_empty() && !NON_LABEL_TYPES.contains(&t.as_str()))
        .collect()
}

/// First TYPE value that names something, capitalized.
fn type_label(prop: &VCardProperty) -> Option<String> {
    label_types(prop).first().map(|t| capitalize(t))
}

/// Phone label by Apple's precedence: pager, fax, watch, iPhone, cell, then place.
fn phone_label(prop: &VCardProperty) -> Option<String> {
    let types = label_types(prop);
    let has = |t: &str| types.iter().any(|x| x == t);
    let place = [types::HOME, types::WORK, types::OTHER, types::MAIN]
        .into_iter()
        .find(|&t| has(t));

    if has(types::PAGER) {
        Some("Pager".to_string())
    } else if has(types::FAX) {
        Some(place.map_or_else(|| "Fax".to_string(), |p| format!("{} Fax", capitalize(p))))
    } else if has(types::APPLE_WATCH) {
        Some("Apple Watch".to_string())
    } else if has(types::IPHONE) {
        Some("iPhone".to_string())
    } else if has(types::CELL) {
        Some("Cell".to_string())
    } else {
        place
            .map(capitalize)
            .or_else(|| types.first().map(|t| capitalize(t)))
    }
}

/// IMPP falls back to the service name when TYPE says nothing.
fn impp_label(prop: &VCardProperty) -> Option<String> {
    type_label(prop).or_else(|| prop.get_param_value("X-SERVICE-TYPE").map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tel(types: &[&str]) -> VCardProperty {
        let mut prop = VCardProperty::text("TEL", "555-123-4567");
        for t in types {
            prop.add_type(*t);
        }
        prop
    }

    #[test]
    fn unwrap_builtin_and_custom_labels() {
        assert_eq!(unwrap_label("_$!<Anniversary>!$_"), "Anniversary");
        assert_eq!(unwrap_label("Gym locker"), "Gym locker");
    }

    #[test]
    fn capitalize_mixed_case() {
        assert_eq!(capitalize("HOME"), "Home");
        assert_eq!(capitalize("twitter"), "Twitter");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn phone_label_precedence() {
        assert_eq!(phone_label(&tel(&["CELL", "VOICE", "pref"])).as_deref(), Some("Cell"));
        assert_eq!(phone_label(&tel(&["IPHONE", "CELL"])).as_deref(), Some("iPhone"));
        assert_eq!(phone_label(&tel(&["HOME", "FAX"])).as_deref(), Some("Home Fax"));
        assert_eq!(phone_label(&tel(&["PAGER", "WORK"])).as_deref(), Some("Pager"));
        assert_eq!(phone_label(&tel(&["MAIN"])).as_deref(), Some("Main"));
        assert_eq!(phone_label(&tel(&["VOICE"])), None);
    }

    #[test]
    fn email_label_skips_internet() {
        let mut prop = VCardProperty::text("EMAIL", "a@example.com");
        prop.add_type("INTERNET");
        prop.add_type("WORK");
        assert_eq!(type_label(&prop).as_deref(), Some("Work"));
    }

    #[test]
    fn every_rule_name_is_unique() {
        let mut seen = std::collections::HashSet::new();
        for rule in APPLE_CONTACTS.rules {
            assert!(seen.insert(rule.name), "duplicate rule for {}", rule.name);
        }
    }
}
