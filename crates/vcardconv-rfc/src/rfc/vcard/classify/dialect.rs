//! Dialect tables: which properties a producer writes and what they mean.

use crate::rfc::vcard::core::{FieldCategory, VCardProperty};

/// Derives a label from a property's parameters.
pub type ParamLabelFn = fn(&VCardProperty) -> Option<String>;

/// How the label of a classified field is chosen.
#[derive(Debug, Clone, Copy)]
pub enum LabelRule {
    /// Always the same label.
    Fixed(&'static str),
    /// One field per non-empty structured component, labeled by position.
    Components(&'static [&'static str]),
    /// The record's group label (`itemN.X-ABLabel`) if any, then the
    /// parameter-derived label, then [`FALLBACK_LABEL`]. With a prefix the
    /// result is rendered as `prefix (label)`.
    Resolved {
        prefix: Option<&'static str>,
        from_params: Option<ParamLabelFn>,
    },
}

/// How the field value is taken from the property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// Decoded text as is.
    Text,
    /// ADR components as a structured postal address.
    Address,
    /// Date whose placeholder year is named by `X-APPLE-OMIT-YEAR`.
    OmitYear,
    /// URI with its `scheme:` prefix removed.
    StripScheme,
    /// A marker property: the field carries `flag` only when the value
    /// equals `when` (ignoring case). Any other value is unknown.
    Flag {
        when: &'static str,
        flag: &'static str,
    },
}

impl ValueRule {
    /// Whether a property with this rule can be classified at all.
    #[must_use]
    pub fn accepts(self, property: &VCardProperty) -> bool {
        match self {
            Self::Flag { when, .. } => {
                property.value.to_text().trim().eq_ignore_ascii_case(when)
            }
            Self::Text | Self::Address | Self::OmitYear | Self::StripScheme => true,
        }
    }
}

/// What happens to a recognized property.
#[derive(Debug, Clone, Copy)]
pub enum Disposition {
    /// Becomes one or more fields of the category.
    Field {
        category: FieldCategory,
        label: LabelRule,
        value: ValueRule,
    },
    /// Consumed by the properties it accompanies (label or country companions).
    Companion,
    /// Dropped outright: metadata, photos, sensitive-content settings.
    Discard,
}

/// One table entry, keyed by uppercase property name.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub disposition: Disposition,
}

impl FieldRule {
    #[must_use]
    pub const fn field(
        name: &'static str,
        category: FieldCategory,
        label: LabelRule,
        value: ValueRule,
    ) -> Self {
        Self {
            name,
            disposition: Disposition::Field {
                category,
                label,
                value,
            },
        }
    }

    #[must_use]
    pub const fn companion(name: &'static str) -> Self {
        Self {
            name,
            disposition: Disposition::Companion,
        }
    }

    #[must_use]
    pub const fn discard(name: &'static str) -> Self {
        Self {
            name,
            disposition: Disposition::Discard,
        }
    }
}

/// Label used when neither the group nor the parameters name one.
pub const FALLBACK_LABEL: &str = "Other";

/// A producer's vocabulary as a lookup table.
#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    pub name: &'static str,
    /// Property whose value labels the other members of its group.
    pub group_label_property: &'static str,
    pub rules: &'static [FieldRule],
}

impl Dialect {
    /// Looks up the rule for a property name.
    #[must_use]
    pub fn rule(&self, property_name: &str) -> Option<&FieldRule> {
        self.rules
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(property_name))
    }
}

impl Default for Dialect {
    fn default() -> Self {
        super::apple::APPLE_CONTACTS
    }
}
