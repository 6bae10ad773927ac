//! Error types for birth-instant validation and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not form a real proleptic Gregorian date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour or minute outside 0..=23 / 0..=59.
    InvalidTime { hour: u32, minute: u32 },
    /// Text could not be parsed as `YYYY-MM-DDThh:mm`.
    Parse(String),
    /// Offset arithmetic left the representable calendar range.
    OutOfRange,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime { hour, minute } => {
                write!(f, "invalid time: {hour:02}:{minute:02}")
            }
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::OutOfRange => write!(f, "date/time outside supported range"),
        }
    }
}

impl Error for TimeError {}
