//! Julian Date conversion for civil timestamps.
//!
//! Timestamps are treated as UTC and carry no leap-second or ΔT
//! correction; at the one-minute resolution of the term search the
//! difference is below the model error.

use chrono::{DateTime, NaiveDateTime};

/// Julian Date of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date of a UTC timestamp.
pub fn naive_to_jd(dt: NaiveDateTime) -> f64 {
    let secs = dt.and_utc().timestamp() as f64;
    UNIX_EPOCH_JD + secs / 86_400.0
}

/// UTC timestamp of a Julian Date, rounded to the nearest minute.
///
/// Returns `None` outside chrono's representable range.
pub fn jd_to_naive(jd: f64) -> Option<NaiveDateTime> {
    let minutes = ((jd - UNIX_EPOCH_JD) * 1_440.0).round();
    if !minutes.is_finite() {
        return None;
    }
    DateTime::from_timestamp(minutes as i64 * 60, 0).map(|dt| dt.naive_utc())
}

/// Julian centuries since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
