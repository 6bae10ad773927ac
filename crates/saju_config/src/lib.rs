//! Configuration for the Saju workspace.
//!
//! Loads `SajuConfig` from TOML (explicit path, `SAJU_CONFIG`, or
//! defaults) and builds the configured boundary provider.

pub mod config;
pub mod error;

pub use config::{BoundaryConfig, BoundarySource, CONFIG_ENV, DEFAULT_LOG_FILTER, SajuConfig};
pub use error::ConfigError;
