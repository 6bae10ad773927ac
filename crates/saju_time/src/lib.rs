//! Civil time primitives for Four Pillars computation.
//!
//! This crate provides:
//! - `BirthInstant`, a validated proleptic Gregorian date with minute-precision
//!   wall-clock time
//! - Whole-day counting against a fixed epoch
//! - Fixed-offset local-time correction applied by callers
//!
//! Time zones and longitude-derived corrections are the caller's concern;
//! nothing here consults the system clock.

pub mod error;
pub mod instant;

pub use error::TimeError;
pub use instant::{BirthInstant, MINUTES_PER_DAY};

pub use chrono::NaiveDate;
