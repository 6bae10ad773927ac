//! Solar-term boundary resolution for Four Pillars computation.
//!
//! This crate provides:
//! - The [`BoundaryProvider`] collaborator trait
//! - Fixed, table-backed and approximate (solar longitude) providers
//! - `saju_for_birth` / `chart_for_birth` (and `_local_` variants taking a
//!   local-time correction), which resolve boundary facts
//!   and run the calculator
//!
//! The approximate provider uses a low-precision solar theory and is good
//! to a few minutes; births within minutes of a term should use a table of
//! published instants.

pub mod approximate;
pub mod birth;
pub mod error;
pub mod julian;
pub mod provider;
pub mod sun;
pub mod table;

pub use approximate::{ApproximateSolarTerms, KST_OFFSET_MINUTES, find_term_jd};
pub use birth::{chart_for_birth, chart_for_local_birth, saju_for_birth, saju_for_local_birth};
pub use error::SearchError;
pub use julian::{J2000_JD, jd_to_naive, naive_to_jd};
pub use provider::{BoundaryProvider, FixedBoundaries, governing_term};
pub use sun::{apparent_longitude_deg, normalize_360, normalize_to_pm180};
pub use table::{SolarTermTable, TermEntry};
