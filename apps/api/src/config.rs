//! Configuration for the API helpers.
//!
//! Values are layered from hardcoded defaults, an optional config file and
//! environment variables. Environment variables use the `GARDEN_API` prefix
//! with `__` as the nested key separator, e.g. `GARDEN_API_API__EXPAND_PARAMETER`.

use config::{Environment, File};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Placeholder substituted for formatted fields whose conversion came back empty.
pub const EMPTY_PLACEHOLDER: &str = "<!-- empty -->";

/// Default request key holding the expand keywords.
pub const DEFAULT_EXPAND_PARAMETER: &str = "expand";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from an optional file plus environment overrides.
    ///
    /// A `.env` file in the working directory is read first, if present.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(false));
        }
        let settings = builder
            .add_source(
                Environment::with_prefix("GARDEN_API")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

/// Settings consumed by [`crate::api::ApiController`].
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ApiSettings {
    /// Request key read by `get_expand_fields`.
    #[serde(default = "default_expand_parameter")]
    pub expand_parameter: String,

    /// Value written by `format_field` when the formatter yields nothing.
    #[serde(default = "default_empty_placeholder")]
    pub empty_placeholder: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            expand_parameter: default_expand_parameter(),
            empty_placeholder: default_empty_placeholder(),
        }
    }
}

fn default_expand_parameter() -> String {
    DEFAULT_EXPAND_PARAMETER.to_string()
}

fn default_empty_placeholder() -> String {
    EMPTY_PLACEHOLDER.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingConfig {
    /// Level applied to this crate when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,

    #[serde(default)]
    pub file_enabled: bool,

    #[serde(default = "default_file_directory")]
    pub file_directory: String,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// One of "daily", "hourly", "minutely" or "never"
    #[serde(default = "default_file_rotation")]
    pub file_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            file_enabled: false,
            file_directory: default_file_directory(),
            file_prefix: default_file_prefix(),
            file_rotation: default_file_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_file_directory() -> String {
    "logs".to_string()
}

fn default_file_prefix() -> String {
    "garden-api".to_string()
}

fn default_file_rotation() -> String {
    "daily".to_string()
}
