//! Field classification: property → semantic field.
//!
//! Classification is driven by a [`Dialect`] table. Properties absent from
//! the table become `Unknown` fields and are recorded in the
//! [`UnknownReport`] passed in by the caller.

mod apple;
mod dialect;

use std::collections::HashMap;

pub use apple::{APPLE_CONTACTS, capitalize, unwrap_label};
pub use dialect::{
    Dialect, Disposition, FALLBACK_LABEL, FieldRule, LabelRule, ParamLabelFn, ValueRule,
};

use crate::rfc::vcard::core::{
    Field, FieldCategory, FieldValue, PostalAddress, PropertyValue, UnknownReport, VCardProperty,
};

/// Parameter carrying the placeholder year Apple writes for year-less dates.
const OMIT_YEAR_PARAM: &str = "X-APPLE-OMIT-YEAR";

/// Per-record lookups needed while classifying one contact.
#[derive(Debug, Clone, Default)]
pub struct RecordContext {
    group_labels: HashMap<String, String>,
}

impl RecordContext {
    /// Collects the group labels of one record.
    #[must_use]
    pub fn from_properties(properties: &[VCardProperty], dialect: &Dialect) -> Self {
        let group_labels = properties
            .iter()
            .filter(|p| p.name.eq_ignore_ascii_case(dialect.group_label_property))
            .filter_map(|p| {
                let group = p.group.as_deref()?.to_ascii_lowercase();
                let label = unwrap_label(&p.value.to_text()).to_string();
                (!label.is_empty()).then_some((group, label))
            })
            .collect();

        Self { group_labels }
    }

    /// Returns the label attached to the property's group, if any. Group
    /// names match regardless of case.
    #[must_use]
    pub fn group_label(&self, property: &VCardProperty) -> Option<&str> {
        let group = property.group.as_deref()?.to_ascii_lowercase();
        self.group_labels.get(&group).map(String::as_str)
    }
}

/// Classifies properties against a dialect.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'d> {
    dialect: &'d Dialect,
}

impl<'d> Classifier<'d> {
    #[must_use]
    pub fn new(dialect: &'d Dialect) -> Self {
        Self { dialect }
    }

    /// Classifies every property of one record, in arrival order.
    pub fn classify_record(
        &self,
        properties: &[VCardProperty],
        contact_index: usize,
        report: &mut UnknownReport,
    ) -> Vec<Field> {
        let context = RecordContext::from_properties(properties, self.dialect);
        properties
            .iter()
            .flat_map(|p| self.classify(p, &context, contact_index, report))
            .collect()
    }

    /// Classifies a single property.
    ///
    /// Returns no fields for companions, discarded properties and empty
    /// values; several fields for structured names; an `Unknown` field
    /// (also recorded in `report`) for anything outside the table and for
    /// marker properties with an unexpected value.
    pub fn classify(
        &self,
        property: &VCardProperty,
        context: &RecordContext,
        contact_index: usize,
        report: &mut UnknownReport,
    ) -> Vec<Field> {
        let Some(rule) = self.dialect.rule(&property.name) else {
            return vec![unknown_field(property, contact_index, report)];
        };

        match rule.disposition {
            Disposition::Companion | Disposition::Discard => Vec::new(),
            Disposition::Field { value, .. } if !value.accepts(property) => {
                vec![unknown_field(property, contact_index, report)]
            }
            Disposition::Field {
                category,
                label,
                value,
            } => {
                let is_preferred = property.is_preferred();
                build_fields(property, context, category, label, value)
                    .into_iter()
                    .map(|f| f.preferred(is_preferred))
                    .collect()
            }
        }
    }
}

/// Records `property` as unknown and returns its `Unknown` field.
fn unknown_field(
    property: &VCardProperty,
    contact_index: usize,
    report: &mut UnknownReport,
) -> Field {
    let name = property.qualified_name();
    tracing::trace!(contact_index, property = %name, "Unknown property");
    report.record(contact_index, name.clone(), property.raw_value.clone());
    Field::labeled(FieldCategory::Unknown, name, property.raw_value.as_str())
        .preferred(property.is_preferred())
}

fn build_fields(
    property: &VCardProperty,
    context: &RecordContext,
    category: FieldCategory,
    label: LabelRule,
    value: ValueRule,
) -> Vec<Field> {
    let label = match label {
        LabelRule::Components(labels) => return component_fields(property, category, labels),
        LabelRule::Fixed(fixed) => fixed.to_string(),
        LabelRule::Resolved {
            prefix,
            from_params,
        } => {
            let resolved = context
                .group_label(property)
                .map(str::to_string)
                .or_else(|| from_params.and_then(|f| f(property)))
                .unwrap_or_else(|| FALLBACK_LABEL.to_string());
            match prefix {
                Some(prefix) => format!("{prefix} ({resolved})"),
                None => resolved,
            }
        }
    };

    extract_value(property, value)
        .map(|v| Field::labeled(category, label, v))
        .into_iter()
        .collect()
}

/// One field per non-empty component, e.g. N → Last, First, Middle, ...
fn component_fields(
    property: &VCardProperty,
    category: FieldCategory,
    labels: &[&str],
) -> Vec<Field> {
    labels
        .iter()
        .enumerate()
        .filter_map(|(i, &component_label)| {
            let text = property.value.component(i).trim();
            (!text.is_empty()).then(|| Field::labeled(category, component_label, text))
        })
        .collect()
}

fn extract_value(property: &VCardProperty, rule: ValueRule) -> Option<FieldValue> {
    let value = match rule {
        ValueRule::Address => {
            let address = match &property.value {
                PropertyValue::Components(parts) => PostalAddress::from_components(parts),
                PropertyValue::Text(text) => PostalAddress::from_components(&[text.as_str()]),
            };
            return (!address.is_empty()).then_some(FieldValue::Structured(address));
        }
        ValueRule::Text => property.value.to_text(),
        ValueRule::Flag { flag, .. } => flag.to_string(),
        ValueRule::OmitYear => strip_omitted_year(property),
        ValueRule::StripScheme => {
            let text = property.value.to_text();
            match text.split_once(':') {
                Some((_, rest)) => rest.to_string(),
                None => text,
            }
        }
    };

    let value = value.trim();
    (!value.is_empty()).then(|| FieldValue::Plain(value.to_string()))
}

/// Drops the `YYYY-` placeholder Apple writes for dates without a year.
fn strip_omitted_year(property: &VCardProperty) -> String {
    let text = property.value.to_text();
    property
        .get_param_value(OMIT_YEAR_PARAM)
        .and_then(|year| text.strip_prefix(year))
        .and_then(|rest| rest.strip_prefix('-'))
        .map_or_else(|| text.clone(), str::to_string)
}
