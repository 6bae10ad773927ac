//! Sipsin (십신 / 十神): ten relational categories between two stems.
//!
//! The category is read from the cyclic distance between the other stem
//! and the day stem: `(other - day + 10) mod 10`. Distance 0 means the same
//! stem (비견).

use serde::{Deserialize, Serialize};

use crate::stem::Stem;

/// The 10 sipsin labels, in distance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sipsin {
    Bigyeon,
    Geopjae,
    Siksin,
    Sanggwan,
    Pyeonjae,
    Jeongjae,
    Pyeongwan,
    Jeonggwan,
    Pyeonin,
    Jeongin,
}

/// All 10 sipsin indexed by stem distance.
pub const ALL_SIPSIN: [Sipsin; 10] = [
    Sipsin::Bigyeon,
    Sipsin::Geopjae,
    Sipsin::Siksin,
    Sipsin::Sanggwan,
    Sipsin::Pyeonjae,
    Sipsin::Jeongjae,
    Sipsin::Pyeongwan,
    Sipsin::Jeonggwan,
    Sipsin::Pyeonin,
    Sipsin::Jeongin,
];

const SIPSIN_HANGUL: [&str; 10] = [
    "비견", "겁재", "식신", "상관", "편재", "정재", "편관", "정관", "편인", "정인",
];

const SIPSIN_HANJA: [&str; 10] = [
    "比肩", "劫財", "食神", "傷官", "偏財", "正財", "偏官", "正官", "偏印", "正印",
];

impl Sipsin {
    /// 0-based index, equal to the stem distance.
    pub const fn index(self) -> u8 {
        match self {
            Self::Bigyeon => 0,
            Self::Geopjae => 1,
            Self::Siksin => 2,
            Self::Sanggwan => 3,
            Self::Pyeonjae => 4,
            Self::Jeongjae => 5,
            Self::Pyeongwan => 6,
            Self::Jeonggwan => 7,
            Self::Pyeonin => 8,
            Self::Jeongin => 9,
        }
    }

    /// Label at a stem distance, `None` outside 0..=9.
    pub const fn from_distance(distance: u8) -> Option<Sipsin> {
        if distance < 10 {
            Some(ALL_SIPSIN[distance as usize])
        } else {
            None
        }
    }

    pub const fn hangul(self) -> &'static str {
        SIPSIN_HANGUL[self.index() as usize]
    }

    pub const fn hanja(self) -> &'static str {
        SIPSIN_HANJA[self.index() as usize]
    }

    /// Presentation label, e.g. `식신(食神)`.
    pub fn label(self) -> String {
        format!("{}({})", self.hangul(), self.hanja())
    }
}

/// Cyclic distance from `day_stem` to `other` (0..=9).
pub const fn stem_distance(day_stem: Stem, other: Stem) -> u8 {
    (other.index() + 10 - day_stem.index()) % 10
}

/// Sipsin of `other` seen from the day stem.
pub const fn sipsin_of(day_stem: Stem, other: Stem) -> Sipsin {
    ALL_SIPSIN[stem_distance(day_stem, other) as usize]
}

/// Sipsin of a chart: the year stem seen from the day stem.
pub const fn sipsin(year_stem: Stem, day_stem: Stem) -> Sipsin {
    sipsin_of(day_stem, year_stem)
}
