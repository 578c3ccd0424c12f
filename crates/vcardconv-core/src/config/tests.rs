//! Tests for configuration module.

use super::*;

#[test_log::test]
fn test_defaults_without_overrides() {
    let settings = Settings::from_toml_str("").unwrap();

    assert_eq!(settings.logging.level, "warn");
    assert!(!settings.normalize.address);
    assert!(!settings.normalize.phone);
    assert!(!settings.normalize.preferred);
    assert!(!settings.normalize.reorder);
    assert_eq!(settings.export.value_separator, ", ");
}

#[test]
fn test_toml_overrides_defaults() {
    let settings = Settings::from_toml_str(
        r#"
[logging]
level = "debug"

[normalize]
phone = true
reorder = true

[export]
value_separator = " | "
"#,
    )
    .unwrap();

    assert_eq!(settings.logging.level, "debug");
    assert!(settings.normalize.phone);
    assert!(settings.normalize.reorder);
    assert!(!settings.normalize.address);
    assert_eq!(settings.export.value_separator, " | ");
}

#[test]
fn test_invalid_toml_is_config_error() {
    let result = Settings::from_toml_str("[normalize]\nphone = \"sometimes\"");

    assert!(matches!(result, Err(crate::error::CoreError::ConfigError(_))));
}

#[test]
fn test_normalize_config_default_is_all_off() {
    let config = NormalizeConfig::default();

    assert!(!config.address && !config.phone && !config.preferred && !config.reorder);
}

#[test]
fn test_environment_overrides_file() {
    let file = File::from_str(
        "[logging]\nlevel = \"info\"\n\n[normalize]\nphone = true\naddress = true\n",
        FileFormat::Toml,
    );
    let env = environment().source(Some(
        [
            ("VCARDCONV__LOGGING__LEVEL", "debug"),
            ("VCARDCONV__NORMALIZE__PHONE", "false"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
    ));

    let settings = Settings::layered(file, env).unwrap();

    assert_eq!(settings.logging.level, "debug");
    assert!(!settings.normalize.phone);
    assert!(settings.normalize.address);
}
