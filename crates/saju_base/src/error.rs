//! Error types for pillar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_time::TimeError;

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from Four Pillars calculations.
///
/// `StemIndexOutOfRange`, `BranchIndexOutOfRange` and `InconsistentPillar`
/// signal a defect in the fixed tables or in index normalization. They abort
/// the computation for that subject and must not be replaced by a fallback.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SajuError {
    /// Error from birth-instant validation.
    Time(TimeError),
    /// Civil month outside 1..=12.
    InvalidMonth(u32),
    /// Hour outside 0..=23.
    InvalidHour(u32),
    /// Stem index did not normalize into 0..=9.
    StemIndexOutOfRange(i64),
    /// Branch index did not normalize into 0..=11.
    BranchIndexOutOfRange(i64),
    /// Stem and branch differ in polarity and cannot form a pillar.
    InconsistentPillar { stem: Stem, branch: Branch },
    /// Character is neither a stem nor a branch in either script.
    UnknownSymbol(char),
    /// Pillar text is not exactly two symbols.
    MalformedPillar(String),
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidMonth(m) => write!(f, "invalid civil month: {m}"),
            Self::InvalidHour(h) => write!(f, "invalid hour: {h}"),
            Self::StemIndexOutOfRange(i) => write!(f, "stem index out of range: {i}"),
            Self::BranchIndexOutOfRange(i) => write!(f, "branch index out of range: {i}"),
            Self::InconsistentPillar { stem, branch } => write!(
                f,
                "inconsistent pillar: {} and {} differ in polarity",
                stem.hanja(),
                branch.hanja()
            ),
            Self::UnknownSymbol(c) => write!(f, "unknown stem/branch symbol: {c:?}"),
            Self::MalformedPillar(text) => {
                write!(f, "expected a stem and a branch, got {text:?}")
            }
        }
    }
}

impl Error for SajuError {}

impl From<TimeError> for SajuError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
