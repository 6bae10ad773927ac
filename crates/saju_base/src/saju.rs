//! Four Pillars calculator.
//!
//! Pure pipeline: birth instant + boundary facts → year, month, day and
//! hour pillars → ohaeng and sipsin. No I/O and no shared state; the
//! boundary facts are resolved by the caller (see `saju_search`).

use serde::{Deserialize, Serialize};
use tracing::debug;

use saju_time::BirthInstant;

use crate::cycle::{day_pillar, year_pillar};
use crate::element::{ALL_ELEMENTS, Element};
use crate::error::SajuError;
use crate::hour_table::hour_pillar;
use crate::month_table::month_pillar;
use crate::pillar::Pillar;
use crate::sipsin::{Sipsin, sipsin};
use crate::stem::Stem;

/// Solar-term facts for one birth instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BoundaryFacts {
    /// 입춘 of the civil year has been reached at the birth instant.
    pub spring_occurred: bool,
    /// The governing term of the civil month has been reached.
    pub month_term_occurred: bool,
}

impl BoundaryFacts {
    pub const fn new(spring_occurred: bool, month_term_occurred: bool) -> Self {
        Self {
            spring_occurred,
            month_term_occurred,
        }
    }
}

/// Calculator options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Apply the 23:30 late-night day rollover. Turn off when the birth
    /// time is unknown. Default: true.
    pub track_time: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self { track_time: true }
    }
}

/// The four pillars of a birth instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Saju {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl Saju {
    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Day stem (일간), the reference point for all relations.
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }

    /// Dominant element: the day stem's element.
    pub const fn ohaeng(&self) -> Element {
        self.day.stem().element()
    }

    /// Relation of the year stem to the day stem.
    pub const fn sipsin(&self) -> Sipsin {
        sipsin(self.year.stem(), self.day.stem())
    }

    /// Zodiac animal of the (solar) birth year.
    pub const fn zodiac_animal(&self) -> &'static str {
        self.year.branch().animal()
    }

    /// Element occurrences among the eight characters, in
    /// [`ALL_ELEMENTS`] order.
    pub fn element_counts(&self) -> [(Element, u8); 5] {
        let mut counts = ALL_ELEMENTS.map(|e| (e, 0u8));
        for p in self.pillars() {
            counts[p.stem().element().index() as usize].1 += 1;
            counts[p.branch().element().index() as usize].1 += 1;
        }
        counts
    }

    /// Pillars as `[year, month, day, hour]` hanja strings.
    pub fn hanja(&self) -> [String; 4] {
        self.pillars().map(Pillar::hanja)
    }

    /// Pillars as `[year, month, day, hour]` hangul strings.
    pub fn hangul(&self) -> [String; 4] {
        self.pillars().map(Pillar::hangul)
    }
}

/// Compute the four pillars.
///
/// `facts` must describe `instant` exactly; the calculator never infers a
/// boundary on its own. The instant is used as given; see
/// [`calculate_saju_local`] for a local-time correction.
pub fn calculate_saju(
    instant: &BirthInstant,
    facts: BoundaryFacts,
    config: &CalculatorConfig,
) -> Result<Saju, SajuError> {
    calculate_saju_local(instant, facts, 0, config)
}

/// Compute the four pillars with a local-time correction.
///
/// `instant` is zone time, the clock that `facts` were resolved against,
/// and fixes the year and month pillars. The day and hour pillars use
/// `instant` shifted by `local_offset_minutes` (e.g. -24 for local mean
/// time in Seoul).
pub fn calculate_saju_local(
    instant: &BirthInstant,
    facts: BoundaryFacts,
    local_offset_minutes: i32,
    config: &CalculatorConfig,
) -> Result<Saju, SajuError> {
    let local = instant.with_offset_minutes(local_offset_minutes)?;
    let year = year_pillar(instant.year(), facts.spring_occurred)?;
    let month = month_pillar(year.stem(), instant.month(), facts.month_term_occurred)?;
    let day = day_pillar(&local, config.track_time)?;
    let hour = hour_pillar(day.stem(), local.hour())?;
    let saju = Saju {
        year,
        month,
        day,
        hour,
    };
    debug!(
        %instant,
        %local,
        spring = facts.spring_occurred,
        month_term = facts.month_term_occurred,
        year = %saju.year,
        month = %saju.month,
        day = %saju.day,
        hour = %saju.hour,
        "saju computed"
    );
    Ok(saju)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Saju {
        let instant = BirthInstant::new(1996, 5, 13, 5, 5).unwrap();
        calculate_saju(
            &instant,
            BoundaryFacts::new(true, true),
            &CalculatorConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn reference_chart() {
        let s = reference();
        assert_eq!(s.hanja(), ["丙子", "癸巳", "庚戌", "己卯"].map(String::from));
        assert_eq!(s.hangul(), ["병자", "계사", "경술", "기묘"].map(String::from));
    }

    #[test]
    fn derived_labels() {
        let s = reference();
        assert_eq!(s.day_master(), Stem::Gyeong);
        assert_eq!(s.ohaeng(), Element::Metal);
        assert_eq!(s.sipsin(), Sipsin::Pyeongwan);
        assert_eq!(s.zodiac_animal(), "쥐");
    }

    #[test]
    fn element_counts_sum_to_eight() {
        let s = reference();
        let total: u8 = s.element_counts().iter().map(|(_, n)| n).sum();
        assert_eq!(total, 8);
        // 丙子 癸巳 庚戌 己卯: fire 2, water 2, metal 1, earth 2, wood 1
        assert_eq!(
            s.element_counts(),
            [
                (Element::Wood, 1),
                (Element::Fire, 2),
                (Element::Earth, 2),
                (Element::Metal, 1),
                (Element::Water, 2),
            ]
        );
    }

    #[test]
    fn before_spring_uses_prior_year() {
        let instant = BirthInstant::new(2024, 2, 3, 12, 0).unwrap();
        let s = calculate_saju(
            &instant,
            BoundaryFacts::new(false, false),
            &CalculatorConfig::default(),
        )
        .unwrap();
        assert_eq!(s.year.hanja(), "癸卯");
        assert_eq!(s.month.hanja(), "乙丑");
    }

    #[test]
    fn local_offset_moves_day_and_hour_only() {
        // Zone 00:10 on New Year's Day is 23:46 the evening before in local
        // mean time. Year and month stay with the zone instant and its facts.
        let zone = BirthInstant::new(2024, 1, 1, 0, 10).unwrap();
        let s = calculate_saju_local(
            &zone,
            BoundaryFacts::new(false, false),
            -24,
            &CalculatorConfig::default(),
        )
        .unwrap();
        assert_eq!(s.hanja(), ["癸卯", "甲子", "甲子", "甲子"].map(String::from));

        let untracked = calculate_saju_local(
            &zone,
            BoundaryFacts::new(false, false),
            -24,
            &CalculatorConfig { track_time: false },
        )
        .unwrap();
        assert_eq!(untracked.day.hanja(), "癸亥");
        assert_eq!(untracked.year.hanja(), "癸卯");
    }

    #[test]
    fn zero_offset_matches_plain_calculation() {
        let instant = BirthInstant::new(1996, 5, 13, 5, 5).unwrap();
        let facts = BoundaryFacts::new(true, true);
        let config = CalculatorConfig::default();
        assert_eq!(
            calculate_saju_local(&instant, facts, 0, &config).unwrap(),
            calculate_saju(&instant, facts, &config).unwrap()
        );
    }

    #[test]
    fn config_default_tracks_time() {
        assert!(CalculatorConfig::default().track_time);
        let cfg: CalculatorConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.track_time);
    }

    #[test]
    fn saju_serde_shape() {
        let json = serde_json::to_value(reference()).unwrap();
        assert_eq!(json["day"]["stem"], "庚");
        assert_eq!(json["day"]["branch"], "戌");
        assert_eq!(json["hour"]["stem"], "己");
    }
}
