//! Error types for boundary resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_base::{SajuError, SolarTerm};
use saju_time::TimeError;

/// Errors from solar-term lookups and boundary-aware calculations.
///
/// A provider that cannot answer reports an error; it never substitutes a
/// default boundary value.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from the pillar calculator.
    Saju(SajuError),
    /// Error from birth-instant arithmetic.
    Time(TimeError),
    /// The term table has no instant for this term and year.
    MissingTerm { year: i32, term: SolarTerm },
    /// The boundary source could not answer.
    Unavailable(String),
    /// Iterative search did not converge.
    NoConvergence(&'static str),
    /// Term table content is malformed.
    TableParse(String),
    /// Term table could not be read.
    Io(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saju(e) => write!(f, "saju error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::MissingTerm { year, term } => write!(
                f,
                "no instant for {} ({}) in {year}",
                term.name(),
                term.hangul()
            ),
            Self::Unavailable(msg) => write!(f, "boundary source unavailable: {msg}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::TableParse(msg) => write!(f, "term table parse error: {msg}"),
            Self::Io(msg) => write!(f, "term table I/O error: {msg}"),
        }
    }
}

impl Error for SearchError {}

impl From<SajuError> for SearchError {
    fn from(e: SajuError) -> Self {
        Self::Saju(e)
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<std::io::Error> for SearchError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for SearchError {
    fn from(e: toml::de::Error) -> Self {
        Self::TableParse(e.to_string())
    }
}
