//! Solar-term instants from a low-precision solar longitude model.
//!
//! Algorithm: estimate the date from the term's longitude and a mean
//! tropical year counted from the March equinox, bracket the estimate by
//! ±8 days, then bisect `f(t) = normalize(λ☉(t) − target)` down to one
//! minute. The result is converted to local wall time with a fixed UTC
//! offset (540 minutes for Korea).

use chrono::NaiveDate;
use tracing::{debug, trace};

use saju_base::{ALL_SOLAR_TERMS, SolarTerm};
use saju_time::{BirthInstant, TimeError};

use crate::error::SearchError;
use crate::julian::{jd_to_naive, naive_to_jd};
use crate::provider::{BoundaryProvider, governing_term};
use crate::sun::{apparent_longitude_deg, normalize_to_pm180};

/// Mean tropical year in days.
const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Half-width of the bisection bracket around the estimate, in days.
const BRACKET_DAYS: f64 = 8.0;

/// Bisection stops below this bracket width (one minute).
const CONVERGENCE_DAYS: f64 = 1.0 / 1_440.0;

const MAX_ITERATIONS: u32 = 60;

/// Term longitudes at or above this fall before the March equinox
/// (소한, 대한, 입춘, 우수, 경칩).
const PRE_EQUINOX_LONGITUDE: f64 = 285.0;

/// Default zone offset: Korea Standard Time.
pub const KST_OFFSET_MINUTES: i32 = 540;

/// Approximate term finder in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproximateSolarTerms {
    pub utc_offset_minutes: i32,
}

impl Default for ApproximateSolarTerms {
    fn default() -> Self {
        Self {
            utc_offset_minutes: KST_OFFSET_MINUTES,
        }
    }
}

impl ApproximateSolarTerms {
    pub const fn new(utc_offset_minutes: i32) -> Self {
        Self { utc_offset_minutes }
    }

    /// Local wall-clock instant of `term` in civil year `year`.
    pub fn term_instant(&self, year: i32, term: SolarTerm) -> Result<BirthInstant, SearchError> {
        let jd = find_term_jd(year, term)?;
        let utc = jd_to_naive(jd).ok_or(SearchError::Time(TimeError::OutOfRange))?;
        let local = BirthInstant::from_naive(utc).with_offset_minutes(self.utc_offset_minutes)?;
        debug!(year, term = term.name(), %local, "solar term located");
        Ok(local)
    }

    /// All 24 terms of a civil year, in calendar order from 소한.
    pub fn terms_for_year(&self, year: i32) -> Result<Vec<(SolarTerm, BirthInstant)>, SearchError> {
        let mut terms = ALL_SOLAR_TERMS
            .iter()
            .map(|&t| Ok((t, self.term_instant(year, t)?)))
            .collect::<Result<Vec<_>, SearchError>>()?;
        terms.sort_by_key(|&(_, at)| at);
        Ok(terms)
    }
}

impl BoundaryProvider for ApproximateSolarTerms {
    fn has_spring_occurred(&self, instant: &BirthInstant) -> Result<bool, SearchError> {
        let spring = self.term_instant(instant.year(), SolarTerm::Ipchun)?;
        Ok(*instant >= spring)
    }

    fn has_month_term_occurred(&self, instant: &BirthInstant) -> Result<bool, SearchError> {
        let term = governing_term(instant)?;
        let at = self.term_instant(instant.year(), term)?;
        Ok(*instant >= at)
    }
}

/// Initial guess for the term's Julian Date (UTC).
fn estimate_jd(year: i32, target_deg: f64) -> Result<f64, SearchError> {
    let equinox = NaiveDate::from_ymd_opt(year, 3, 20)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(SearchError::Time(TimeError::OutOfRange))?;
    let base = naive_to_jd(equinox);
    let offset_days = if target_deg >= PRE_EQUINOX_LONGITUDE {
        -(360.0 - target_deg) / 360.0 * TROPICAL_YEAR_DAYS
    } else {
        target_deg / 360.0 * TROPICAL_YEAR_DAYS
    };
    Ok(base + offset_days)
}

fn longitude_error(jd: f64, target_deg: f64) -> f64 {
    normalize_to_pm180(apparent_longitude_deg(jd) - target_deg)
}

/// Julian Date (UTC) at which the Sun reaches the term's longitude.
pub fn find_term_jd(year: i32, term: SolarTerm) -> Result<f64, SearchError> {
    let target = term.longitude_deg();
    let est = estimate_jd(year, target)?;

    let mut t_a = est - BRACKET_DAYS;
    let mut t_b = est + BRACKET_DAYS;
    let mut f_a = longitude_error(t_a, target);
    let f_b = longitude_error(t_b, target);
    if f_a * f_b > 0.0 {
        return Err(SearchError::NoConvergence(
            "solar longitude does not cross the term inside the bracket",
        ));
    }

    for i in 0..MAX_ITERATIONS {
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = longitude_error(t_mid, target);
        trace!(iteration = i, jd = t_mid, error_deg = f_mid, "bisect");

        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }

        if (t_b - t_a).abs() < CONVERGENCE_DAYS {
            return Ok(0.5 * (t_a + t_b));
        }
    }

    Err(SearchError::NoConvergence("solar-term bisection did not converge"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kst() -> ApproximateSolarTerms {
        ApproximateSolarTerms::default()
    }

    fn minutes_apart(a: &BirthInstant, b: &BirthInstant) -> i64 {
        (a.naive() - b.naive()).num_minutes().abs()
    }

    #[test]
    fn ipchun_2024() {
        let got = kst().term_instant(2024, SolarTerm::Ipchun).unwrap();
        let published = BirthInstant::new(2024, 2, 4, 17, 27).unwrap();
        assert!(minutes_apart(&got, &published) <= 30, "got {got}");
    }

    #[test]
    fn ipha_1996() {
        let got = kst().term_instant(1996, SolarTerm::Ipha).unwrap();
        assert_eq!((got.month(), got.day()), (5, 5), "got {got}");
    }

    #[test]
    fn sohan_falls_in_january() {
        let got = kst().term_instant(2024, SolarTerm::Sohan).unwrap();
        assert_eq!((got.year(), got.month(), got.day()), (2024, 1, 6));
    }

    #[test]
    fn utc_offset_shifts_local_time() {
        let utc = ApproximateSolarTerms::new(0)
            .term_instant(2024, SolarTerm::Haji)
            .unwrap();
        let kst = kst().term_instant(2024, SolarTerm::Haji).unwrap();
        assert_eq!((kst.naive() - utc.naive()).num_minutes(), 540);
    }

    #[test]
    fn year_has_24_ordered_terms() {
        let terms = kst().terms_for_year(2024).unwrap();
        assert_eq!(terms.len(), 24);
        assert_eq!(terms[0].0, SolarTerm::Sohan);
        assert_eq!(terms[2].0, SolarTerm::Ipchun);
        assert_eq!(terms[23].0, SolarTerm::Dongji);
        assert!(terms.iter().all(|(_, at)| at.year() == 2024));
    }

    #[test]
    fn provider_brackets_spring() {
        let p = kst();
        let spring = p.term_instant(2024, SolarTerm::Ipchun).unwrap();
        let before = spring.with_offset_minutes(-1).unwrap();
        assert!(p.has_spring_occurred(&spring).unwrap());
        assert!(!p.has_spring_occurred(&before).unwrap());
        // February is governed by 입춘 as well.
        assert!(!p.has_month_term_occurred(&before).unwrap());
    }
}
