//! Four Pillars (Saju / 四柱) tables and calculations.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches, elements and the 60-pillar cycle
//! - Year, month, day and hour pillars from a birth instant and solar-term
//!   boundary facts
//! - Ohaeng, sipsin, twelve stages and twelve spirits
//! - The 24 solar terms and hanja/hangul transliteration
//!
//! Everything here is a pure function of its inputs. Solar-term facts are
//! resolved elsewhere and passed in as [`BoundaryFacts`].

pub mod branch;
pub mod chart;
pub mod cycle;
pub mod element;
pub mod error;
pub mod hour_table;
pub mod month_table;
pub mod pillar;
pub mod saju;
pub mod sipsin;
pub mod solar_term;
pub mod stem;
pub mod stem_group;
pub mod transliterate;
pub mod twelve_spirit;
pub mod twelve_stage;
pub mod util;

pub use branch::{ALL_BRANCHES, BRANCH_COUNT, BRANCH_HANGUL, BRANCH_HANJA, Branch};
pub use chart::{ALL_POSITIONS, ChartColumn, PillarPosition, SajuChart};
pub use cycle::{
    DAY_EPOCH, LATE_NIGHT_ROLLOVER_MINUTE, day_pillar, day_pillar_of_date, effective_year,
    is_late_night, year_pillar, year_pillar_of,
};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::SajuError;
pub use hour_table::{HOUR_PILLARS, hour_bucket, hour_pillar};
pub use month_table::{MONTH_PILLARS, month_offset, month_pillar};
pub use pillar::{CYCLE_LEN, Pillar, all_pillars};
pub use saju::{BoundaryFacts, CalculatorConfig, Saju, calculate_saju, calculate_saju_local};
pub use sipsin::{ALL_SIPSIN, Sipsin, sipsin, sipsin_of, stem_distance};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm, month_start_term};
pub use stem::{ALL_STEMS, STEM_COUNT, STEM_HANGUL, STEM_HANJA, Stem};
pub use stem_group::{ALL_STEM_GROUPS, StemGroup};
pub use transliterate::{Script, toggle, transliterate};
pub use twelve_spirit::{ALL_TWELVE_SPIRITS, TwelveSpirit, twelve_spirit};
pub use twelve_stage::{ALL_TWELVE_STAGES, TwelveStage, twelve_stage};
pub use util::cyclic_index;

pub use saju_time::{BirthInstant, TimeError};
