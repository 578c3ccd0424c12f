use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, Source};
use serde::Deserialize;

use crate::error::CoreResult;

/// Name of the optional configuration file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "vcardconv.toml";

/// Prefix for environment overrides, e.g. `VCARDCONV__LOGGING__LEVEL=debug`.
pub const ENV_PREFIX: &str = "VCARDCONV";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub normalize: NormalizeConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Normalization defaults. Command-line flags can only switch these on.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "mirrors the independent normalize switches"
)]
pub struct NormalizeConfig {
    pub address: bool,
    pub phone: bool,
    pub preferred: bool,
    pub reorder: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Joins several values that land in the same CSV column.
    pub value_separator: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `vcardconv.toml` and environment variables into a `Settings`.
    /// Layers apply as defaults, then the file, then the environment, so
    /// environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Self::layered(
            File::with_name(CONFIG_FILE_NAME).required(false),
            environment(),
        )
    }

    fn layered<S>(file: S, environment: Environment) -> CoreResult<Self>
    where
        S: Source + Send + Sync + 'static,
    {
        Ok(Self::builder()?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Builds `Settings` from defaults overlaid with a TOML document.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not match the schema.
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        Ok(Self::builder()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    fn builder() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("normalize.address", false)?
            .set_default("normalize.phone", false)?
            .set_default("normalize.preferred", false)?
            .set_default("normalize.reorder", false)?
            .set_default("export.value_separator", ", ")?)
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load()
}

#[cfg(test)]
mod tests;
