//! Civil birth instant with minute precision.
//!
//! `BirthInstant` is the validated input of every pillar computation. It
//! carries a proleptic Gregorian date and a wall-clock time in whatever
//! local time the caller has settled on; the calculator never shifts it.
//! Fixed corrections (e.g. a longitude offset of -24 minutes) are applied
//! by the caller through [`BirthInstant::with_offset_minutes`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Validated civil date and wall-clock time (minute precision).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthInstant(NaiveDateTime);

impl BirthInstant {
    /// Validate and build a birth instant.
    ///
    /// Fails with [`TimeError::InvalidDate`] for dates such as 2023-02-29 and
    /// [`TimeError::InvalidTime`] for hour >= 24 or minute >= 60.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidDate { year, month, day })?;
        let time =
            NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TimeError::InvalidTime { hour, minute })?;
        Ok(Self(NaiveDateTime::new(date, time)))
    }

    /// Wrap an existing chrono timestamp, dropping seconds.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        let time = NaiveTime::from_hms_opt(dt.hour(), dt.minute(), 0).unwrap_or(dt.time());
        Self(NaiveDateTime::new(dt.date(), time))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Calendar date component.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Underlying chrono timestamp.
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Minutes elapsed since local midnight (0..1440).
    pub fn minute_of_day(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Signed whole-day difference between this date and `epoch`.
    ///
    /// Time of day is ignored; dates before the epoch give negative counts.
    pub fn days_since(&self, epoch: NaiveDate) -> i64 {
        self.date().signed_duration_since(epoch).num_days()
    }

    /// Shift by a fixed number of minutes (negative moves earlier).
    ///
    /// The shift may cross day, month and year boundaries.
    pub fn with_offset_minutes(&self, minutes: i32) -> Result<Self, TimeError> {
        self.0
            .checked_add_signed(Duration::minutes(i64::from(minutes)))
            .map(Self)
            .ok_or(TimeError::OutOfRange)
    }
}

impl Display for BirthInstant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute()
        )
    }
}

impl FromStr for BirthInstant {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm`, `YYYY-MM-DD hh:mm` or `YYYY-MM-DDThh:mm:00`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date, time) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::Parse(format!("expected YYYY-MM-DDThh:mm, got {s}")))?;

        let date_parts: Vec<&str> = date.split('-').collect();
        let time_parts: Vec<&str> = time.split(':').collect();
        if date_parts.len() != 3 || !(2..=3).contains(&time_parts.len()) {
            return Err(TimeError::Parse(format!("invalid date/time format: {s}")));
        }

        let num = |part: &str| -> Result<u32, TimeError> {
            part.parse()
                .map_err(|e| TimeError::Parse(format!("{part:?}: {e}")))
        };
        let year: i32 = date_parts[0]
            .parse()
            .map_err(|e| TimeError::Parse(format!("{:?}: {e}", date_parts[0])))?;
        let month = num(date_parts[1])?;
        let day = num(date_parts[2])?;
        let hour = num(time_parts[0])?;
        let minute = num(time_parts[1])?;
        if let Some(sec) = time_parts.get(2) {
            if num(sec)? != 0 {
                return Err(TimeError::Parse(format!(
                    "seconds are not supported: {s}"
                )));
            }
        }
        Self::new(year, month, day, hour, minute)
    }
}

impl TryFrom<String> for BirthInstant {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BirthInstant> for String {
    fn from(value: BirthInstant) -> Self {
        value.to_string()
    }
}
