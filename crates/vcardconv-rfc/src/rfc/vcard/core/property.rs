//! vCard property types.

use super::parameter::{VCardParameter, types};

/// A decoded property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// A single text value with escapes decoded.
    Text(String),
    /// Semicolon-separated components (N, ORG, ADR), each with escapes decoded.
    Components(Vec<String>),
}

impl PropertyValue {
    /// Returns the text, joining components with `;` when structured.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Components(parts) => parts.join(";"),
        }
    }

    /// Returns the component at `index`, or `""` when absent.
    ///
    /// A plain text value acts as a single-component value.
    #[must_use]
    pub fn component(&self, index: usize) -> &str {
        match self {
            Self::Text(s) if index == 0 => s,
            Self::Text(_) => "",
            Self::Components(parts) => parts.get(index).map_or("", String::as_str),
        }
    }
}

/// A vCard property.
///
/// Contains the decoded value along with the original raw value, which is
/// what the unknown-field report shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    /// Optional property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of first appearance.
    pub params: Vec<VCardParameter>,
    /// Decoded value.
    pub value: PropertyValue,
    /// Original raw value string.
    pub raw_value: String,
}

impl VCardProperty {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value_str = value.into();
        Self {
            group: None,
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: PropertyValue::Text(value_str.clone()),
            raw_value: value_str,
        }
    }

    /// Returns the name with its group prefix, as written in the source.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.group {
            Some(group) => format!("{group}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.value()
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.get_param("TYPE")
            .is_some_and(|p| p.has_value(type_value))
    }

    /// Returns all TYPE values in order.
    pub fn type_values(&self) -> impl Iterator<Item = &str> {
        self.get_param("TYPE")
            .into_iter()
            .flat_map(|p| p.values.iter().map(String::as_str))
    }

    /// Returns whether the property is marked as the preferred instance,
    /// either by a `PREF` parameter or by `TYPE=pref`.
    #[must_use]
    pub fn is_preferred(&self) -> bool {
        self.get_param("PREF").is_some() || self.has_type(types::PREF)
    }

    /// Adds a parameter value, merging into an existing parameter of the same name.
    pub fn add_param_values(&mut self, name: &str, values: Vec<String>) {
        if let Some(param) = self
            .params
            .iter_mut()
            .find(|p| p.name.eq_ignore_ascii_case(name))
        {
            param.values.extend(values);
        } else {
            self.params.push(VCardParameter::multi(name, values));
        }
    }

    /// Adds a TYPE parameter value.
    pub fn add_type(&mut self, type_value: impl Into<String>) {
        self.add_param_values("TYPE", vec![type_value.into()]);
    }
}

/// Property names of the Apple Contacts export dialect.
pub mod names {
    // Structural
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";
    pub const PRODID: &str = "PRODID";

    // Name
    pub const N: &str = "N";
    pub const FN: &str = "FN";
    pub const NICKNAME: &str = "NICKNAME";
    pub const MAIDEN_NAME: &str = "X-MAIDENNAME";
    pub const PHONETIC_FIRST_NAME: &str = "X-PHONETIC-FIRST-NAME";
    pub const PHONETIC_MIDDLE_NAME: &str = "X-PHONETIC-MIDDLE-NAME";
    pub const PHONETIC_LAST_NAME: &str = "X-PHONETIC-LAST-NAME";

    // Organization
    pub const ORG: &str = "ORG";
    pub const PHONETIC_ORG: &str = "X-PHONETIC-ORG";
    pub const TITLE: &str = "TITLE";
    pub const SHOW_AS: &str = "X-ABSHOWAS";

    // Communications
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const ADR: &str = "ADR";
    pub const IMPP: &str = "IMPP";
    pub const URL: &str = "URL";
    pub const SOCIAL_PROFILE: &str = "X-SOCIALPROFILE";

    // Dates and relations
    pub const BDAY: &str = "BDAY";
    pub const AB_DATE: &str = "X-ABDATE";
    pub const AB_RELATED_NAMES: &str = "X-ABRELATEDNAMES";

    pub const NOTE: &str = "NOTE";

    // Group companions
    pub const AB_LABEL: &str = "X-ABLABEL";
    pub const AB_ADR: &str = "X-ABADR";

    // Legacy instant-messaging duplicates of IMPP
    pub const AIM: &str = "X-AIM";
    pub const JABBER: &str = "X-JABBER";
    pub const MSN: &str = "X-MSN";
    pub const YAHOO: &str = "X-YAHOO";
    pub const ICQ: &str = "X-ICQ";

    // Discarded payloads
    pub const PHOTO: &str = "PHOTO";
    pub const SENSITIVE_CONTENT: &str = "VND-63-SENSITIVE-CONTENT-CONFIG";
}

#[cfg(test)]
impl VCardProperty {
    /// Returns the value as text if it is a single text value.
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            PropertyValue::Text(s) => Some(s),
            PropertyValue::Components(_) => None,
        }
    }
}
