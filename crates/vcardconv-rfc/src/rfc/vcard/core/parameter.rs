//! vCard parameter types.

/// A vCard parameter.
///
/// Parameters can have multiple values (e.g., TYPE=home,work). Repeated
/// parameters of the same name are merged into one by the tokenizer, so
/// `type=CELL;type=pref` ends up as a single TYPE with two values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter values in order of appearance.
    pub values: Vec<String>,
}

impl VCardParameter {
    /// Creates a parameter with multiple values.
    #[must_use]
    pub fn multi(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            values,
        }
    }

    /// Returns the first value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(value))
    }
}

/// TYPE values written by Apple Contacts.
pub mod types {
    pub const HOME: &str = "home";
    pub const WORK: &str = "work";
    pub const OTHER: &str = "other";
    pub const MAIN: &str = "main";

    pub const VOICE: &str = "voice";
    pub const CELL: &str = "cell";
    pub const IPHONE: &str = "iphone";
    pub const APPLE_WATCH: &str = "applewatch";
    pub const FAX: &str = "fax";
    pub const PAGER: &str = "pager";

    pub const INTERNET: &str = "internet";

    /// Apple marks the preferred instance with `type=pref` rather than `PREF=1`.
    pub const PREF: &str = "pref";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_name_is_uppercased() {
        let param = VCardParameter::multi("type", vec!["home".into()]);
        assert_eq!(param.name, "TYPE");
        assert_eq!(param.value(), Some("home"));
    }

    #[test]
    fn parameter_has_value() {
        let param = VCardParameter::multi("TYPE", vec!["HOME".into(), "pref".into()]);
        assert!(param.has_value("home"));
        assert!(param.has_value("PREF"));
        assert!(!param.has_value("cell"));
    }
}
