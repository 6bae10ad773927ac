//! Error types for configuration loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_search::SearchError;

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Config file could not be read.
    Io(String),
    /// Config file is not valid TOML for [`crate::SajuConfig`].
    Parse(String),
    /// Values parse but do not fit together.
    Invalid(String),
    /// Building the configured provider failed.
    Search(SearchError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ConfigError {}

impl From<SearchError> for ConfigError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
