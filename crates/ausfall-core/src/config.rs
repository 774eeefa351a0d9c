use std::path::PathBuf;

use anyhow::Result;
use chrono_tz::Tz;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_BEGIN_MARKER, DEFAULT_CALENDAR_PATH, DEFAULT_DOCUMENT_PATH, DEFAULT_END_MARKER,
    DEFAULT_LABELS_PATH, DEFAULT_TIMEZONE,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub paths: PathsConfig,
    /// IANA name of the reference timezone all dates are normalized to.
    pub timezone: String,
    pub markers: MarkerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub calendar: PathBuf,
    pub document: PathBuf,
    pub labels: PathBuf,
}

/// Literal strings delimiting the generated block in the target document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarkerConfig {
    pub begin: String,
    pub end: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            begin: DEFAULT_BEGIN_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Returns a config builder pre-populated with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be set.
    pub fn with_defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("paths.calendar", DEFAULT_CALENDAR_PATH)?
            .set_default("paths.document", DEFAULT_DOCUMENT_PATH)?
            .set_default("paths.labels", DEFAULT_LABELS_PATH)?
            .set_default("timezone", DEFAULT_TIMEZONE)?
            .set_default("markers.begin", DEFAULT_BEGIN_MARKER)?
            .set_default("markers.end", DEFAULT_END_MARKER)?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads configuration from the optional `ausfall.toml` file and
    /// `AUSFALL_*` environment variables (nested keys use `__`, e.g.
    /// `AUSFALL_PATHS__CALENDAR`). Environment variables take precedence.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the
    /// configuration fails.
    pub fn load() -> Result<Self> {
        let settings = Self::with_defaults()?
            .add_source(config::File::with_name("ausfall").required(false))
            .add_source(
                config::Environment::with_prefix("AUSFALL")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks invariants serde cannot express.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for empty or identical
    /// markers, or an unknown timezone.
    pub fn validate(&self) -> CoreResult<()> {
        if self.markers.begin.is_empty() || self.markers.end.is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "markers must not be empty".to_string(),
            ));
        }
        if self.markers.begin == self.markers.end {
            return Err(CoreError::InvalidConfiguration(
                "begin and end marker must differ".to_string(),
            ));
        }
        self.reference_timezone().map(|_| ())
    }

    /// ## Summary
    /// Parses the configured reference timezone.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the name is not a known
    /// IANA timezone.
    pub fn reference_timezone(&self) -> CoreResult<Tz> {
        self.timezone.parse::<Tz>().map_err(|_e| {
            CoreError::InvalidConfiguration(format!("unknown timezone '{}'", self.timezone))
        })
    }
}

/// ## Summary
/// Loads configuration from environment variables, a `.env` file and
/// `ausfall.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    Settings::load()
}
