//! `SajuConfig`: calculator options, boundary source and logging.
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration: approximate solar terms in KST, late-night rollover on,
//! no local-time correction, `warn` logging.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use saju_base::CalculatorConfig;
use saju_search::{ApproximateSolarTerms, BoundaryProvider, KST_OFFSET_MINUTES, SolarTermTable};
use crate::error::ConfigError;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "SAJU_CONFIG";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Where boundary facts come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundarySource {
    /// Low-precision solar longitude search.
    #[default]
    Approximate,
    /// Published instants from a TOML table.
    Table,
}

/// `[boundary]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundaryConfig {
    pub source: BoundarySource,
    /// Zone in which term instants are expressed. Default: 540 (KST).
    pub utc_offset_minutes: i32,
    /// Term table; required when `source = "table"`.
    pub table_path: Option<PathBuf>,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            source: BoundarySource::Approximate,
            utc_offset_minutes: KST_OFFSET_MINUTES,
            table_path: None,
        }
    }
}

/// Whole configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SajuConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Local-time correction for the day and hour pillars, e.g. -24 for
    /// local mean time. Term facts stay on the zone clock. Default: 0.
    pub local_offset_minutes: i32,
    pub calculator: CalculatorConfig,
    pub boundary: BoundaryConfig,
}

impl Default for SajuConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            local_offset_minutes: 0,
            calculator: CalculatorConfig::default(),
            boundary: BoundaryConfig::default(),
        }
    }
}

/// Minutes in a day; larger corrections are rejected as typos.
const MAX_OFFSET_MINUTES: i32 = 24 * 60;

impl SajuConfig {
    /// Parse and validate TOML text. Relative paths stay relative.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SajuConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file. A relative `table_path` is resolved against the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let mut config = Self::from_toml_str(&text)?;
        if let (Some(table), Some(dir)) = (&config.boundary.table_path, path.parent()) {
            if table.is_relative() {
                config.boundary.table_path = Some(dir.join(table));
            }
        }
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Explicit path, else the path in [`CONFIG_ENV`], else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::resolve_with(explicit, from_env.as_deref())
    }

    /// [`SajuConfig::resolve`] with the environment value passed in.
    pub fn resolve_with(explicit: Option<&Path>, env_path: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit.or(env_path) {
            Some(path) => Self::load(path),
            None => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.boundary.source == BoundarySource::Table && self.boundary.table_path.is_none() {
            return Err(ConfigError::Invalid(
                "boundary.source = \"table\" requires boundary.table_path".to_string(),
            ));
        }
        if self.local_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::Invalid(format!(
                "local_offset_minutes {} exceeds one day",
                self.local_offset_minutes
            )));
        }
        if self.boundary.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(ConfigError::Invalid(format!(
                "boundary.utc_offset_minutes {} exceeds one day",
                self.boundary.utc_offset_minutes
            )));
        }
        Ok(())
    }

    /// Build the configured boundary provider.
    pub fn build_provider(&self) -> Result<Box<dyn BoundaryProvider>, ConfigError> {
        self.validate()?;
        match (self.boundary.source, &self.boundary.table_path) {
            (BoundarySource::Table, Some(path)) => Ok(Box::new(SolarTermTable::load(path)?)),
            (BoundarySource::Table, None) => Err(ConfigError::Invalid(
                "boundary.table_path is not set".to_string(),
            )),
            (BoundarySource::Approximate, _) => Ok(Box::new(ApproximateSolarTerms::new(
                self.boundary.utc_offset_minutes,
            ))),
        }
    }
}
