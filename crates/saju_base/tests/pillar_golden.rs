//! Golden tests for the four pillars against almanac dates.
//!
//! Boundary facts are given explicitly; no solar-term search involved.

use saju_base::{
    BirthInstant, BoundaryFacts, CalculatorConfig, Element, SajuError, Sipsin, Stem, TimeError,
    calculate_saju, hour_pillar, month_pillar,
};

fn pillars(
    (y, m, d, h, min): (i32, u32, u32, u32, u32),
    spring: bool,
    month_term: bool,
    track_time: bool,
) -> [String; 4] {
    let instant = BirthInstant::new(y, m, d, h, min).unwrap();
    calculate_saju(
        &instant,
        BoundaryFacts::new(spring, month_term),
        &CalculatorConfig { track_time },
    )
    .unwrap()
    .hanja()
}

fn expect(list: [&str; 4]) -> [String; 4] {
    list.map(String::from)
}

// ---------------------------------------------------------------------------
// Reference charts
// ---------------------------------------------------------------------------

#[test]
fn reference_1996_05_13() {
    let got = pillars((1996, 5, 13, 5, 5), true, true, true);
    assert_eq!(got, expect(["丙子", "癸巳", "庚戌", "己卯"]));
}

#[test]
fn millennium_midnight() {
    // Before 소한 and before 입춘: 己卯 year, 丙子 month.
    let got = pillars((2000, 1, 1, 0, 0), false, false, true);
    assert_eq!(got, expect(["己卯", "丙子", "戊午", "壬子"]));
}

#[test]
fn gapja_year_after_spring() {
    let got = pillars((1984, 2, 5, 10, 0), true, true, true);
    assert_eq!(got, expect(["甲子", "丙寅", "己巳", "己巳"]));
}

#[test]
fn seoul_olympics_opening() {
    let got = pillars((1988, 9, 17, 10, 30), true, true, true);
    assert_eq!(got, expect(["戊辰", "辛酉", "乙亥", "辛巳"]));
}

#[test]
fn lunar_new_year_2024() {
    let got = pillars((2024, 2, 10, 12, 0), true, true, true);
    assert_eq!(got, expect(["甲辰", "丙寅", "甲辰", "庚午"]));
}

#[test]
fn new_years_eve_late_night() {
    // 23:45: the day rolls to 甲子 and the hour follows the new day stem.
    let tracked = pillars((2023, 12, 31, 23, 45), true, true, true);
    assert_eq!(tracked, expect(["癸卯", "甲子", "甲子", "甲子"]));
    let untracked = pillars((2023, 12, 31, 23, 45), true, true, false);
    assert_eq!(untracked, expect(["癸卯", "甲子", "癸亥", "壬子"]));
}

// ---------------------------------------------------------------------------
// Boundary facts
// ---------------------------------------------------------------------------

#[test]
fn february_before_and_after_spring() {
    let before = pillars((2024, 2, 4, 12, 0), false, false, true);
    let after = pillars((2024, 2, 4, 18, 0), true, true, true);
    assert_eq!(before[0], "癸卯");
    assert_eq!(before[1], "乙丑");
    assert_eq!(after[0], "甲辰");
    assert_eq!(after[1], "丙寅");
}

#[test]
fn month_term_not_yet_reached() {
    // 1996-05-04 is before 입하: still the 壬辰 month.
    let got = pillars((1996, 5, 4, 12, 0), true, false, true);
    assert_eq!(got[1], "壬辰");
}

// ---------------------------------------------------------------------------
// Derived labels
// ---------------------------------------------------------------------------

#[test]
fn ohaeng_and_sipsin() {
    let instant = BirthInstant::new(1996, 5, 13, 5, 5).unwrap();
    let saju = calculate_saju(
        &instant,
        BoundaryFacts::new(true, true),
        &CalculatorConfig::default(),
    )
    .unwrap();
    assert_eq!(saju.ohaeng(), Element::Metal);
    assert_eq!(saju.ohaeng().label(), "금(金)");
    assert_eq!(saju.sipsin(), Sipsin::Pyeongwan);
    assert_eq!(saju.sipsin().label(), "편관(偏官)");
}

#[test]
fn same_year_and_day_stem_is_bigyeon() {
    // 2024-02-10: 甲辰 year, 甲辰 day.
    let instant = BirthInstant::new(2024, 2, 10, 12, 0).unwrap();
    let saju = calculate_saju(
        &instant,
        BoundaryFacts::new(true, true),
        &CalculatorConfig::default(),
    )
    .unwrap();
    assert_eq!(saju.sipsin(), Sipsin::Bigyeon);
    assert_eq!(saju.sipsin().hangul(), "비견");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn invalid_inputs_fail_fast() {
    assert_eq!(
        BirthInstant::new(2023, 2, 29, 0, 0),
        Err(TimeError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29
        })
    );
    assert!(BirthInstant::new(2024, 13, 1, 0, 0).is_err());
    assert!(BirthInstant::new(2024, 1, 1, 24, 0).is_err());
    assert_eq!(
        month_pillar(Stem::Gap, 13, true),
        Err(SajuError::InvalidMonth(13))
    );
    assert_eq!(hour_pillar(Stem::Gap, 24), Err(SajuError::InvalidHour(24)));
}
