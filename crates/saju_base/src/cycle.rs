//! Year and day pillars from the continuous sexagenary cycles.
//!
//! Year: the stem repeats every 10 years and the branch every 12, so both
//! are read from fixed tables keyed by the year's remainder. A solar year
//! begins at 입춘 (spring arrival), not on January 1st.
//!
//! Day: whole days counted from 1900-01-01, a known 甲戌 day. The
//! traditional day boundary is 23:30, so births from 23:30 onwards take
//! the next day's pillar when the birth time is known.

use saju_time::{BirthInstant, NaiveDate, TimeError};

use crate::branch::Branch;
use crate::error::SajuError;
use crate::pillar::Pillar;
use crate::stem::Stem;
use crate::util::cyclic_index;

/// Year stem keyed by `year mod 10` (years ending in 4 are 甲 years).
pub const YEAR_STEM_BY_REMAINDER: [Stem; 10] = [
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
];

/// Year branch keyed by `year mod 12` (2016 = 0 was a 申 year).
pub const YEAR_BRANCH_BY_REMAINDER: [Branch; 12] = [
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
];

/// Reference date whose day pillar is known.
pub const DAY_EPOCH: (i32, u32, u32) = (1900, 1, 1);
/// Stem index of the epoch day (甲).
pub const DAY_EPOCH_STEM: i64 = 0;
/// Branch index of the epoch day (戌).
pub const DAY_EPOCH_BRANCH: i64 = 10;

/// Minute of day from which the next day's pillar applies (23:30).
pub const LATE_NIGHT_ROLLOVER_MINUTE: u32 = 23 * 60 + 30;

/// Solar year used for the year pillar.
///
/// Before spring arrives the previous year's pillar is still in force.
pub const fn effective_year(civil_year: i32, spring_occurred: bool) -> i32 {
    if spring_occurred {
        civil_year
    } else {
        civil_year - 1
    }
}

/// Year pillar of an already-resolved solar year.
pub fn year_pillar_of(solar_year: i32) -> Result<Pillar, SajuError> {
    let year = i64::from(solar_year);
    let stem = YEAR_STEM_BY_REMAINDER[cyclic_index(year, 10) as usize];
    let branch = YEAR_BRANCH_BY_REMAINDER[cyclic_index(year, 12) as usize];
    Pillar::new(stem, branch)
}

/// Year pillar for a civil year and the spring-arrival fact.
pub fn year_pillar(civil_year: i32, spring_occurred: bool) -> Result<Pillar, SajuError> {
    year_pillar_of(effective_year(civil_year, spring_occurred))
}

fn day_epoch() -> Result<NaiveDate, SajuError> {
    let (year, month, day) = DAY_EPOCH;
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(SajuError::Time(TimeError::InvalidDate { year, month, day }))
}

/// Day pillar of a civil date, ignoring time of day.
pub fn day_pillar_of_date(instant: &BirthInstant) -> Result<Pillar, SajuError> {
    let diff = instant.days_since(day_epoch()?);
    let stem = Stem::checked(cyclic_index(DAY_EPOCH_STEM + diff, 10))?;
    let branch = Branch::checked(cyclic_index(DAY_EPOCH_BRANCH + diff, 12))?;
    Pillar::new(stem, branch)
}

/// Whether the late-night rule moves this birth onto the next day's pillar.
pub fn is_late_night(instant: &BirthInstant) -> bool {
    instant.minute_of_day() >= LATE_NIGHT_ROLLOVER_MINUTE
}

/// Day pillar of a birth instant.
///
/// With `track_time` set, births at or after 23:30 advance one step in both
/// cycles. Callers pass `false` when the birth time is unknown.
pub fn day_pillar(instant: &BirthInstant, track_time: bool) -> Result<Pillar, SajuError> {
    let pillar = day_pillar_of_date(instant)?;
    if track_time && is_late_night(instant) {
        Ok(pillar.advance(1))
    } else {
        Ok(pillar)
    }
}
