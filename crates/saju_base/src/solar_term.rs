//! The 24 solar terms (절기 / 節氣).
//!
//! Terms are spaced 15° apart in apparent solar ecliptic longitude. The
//! year pillar switches at 입춘 (315°); each civil month's pillar switches
//! at its "jeol" term, the even-indexed entries counted from 입춘.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// The 24 solar terms, in order from 입춘.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SolarTerm {
    Ipchun,
    Usu,
    Gyeongchip,
    Chunbun,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
    Sohan,
    Daehan,
}

/// All 24 terms starting at 입춘.
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
    SolarTerm::Sohan,
    SolarTerm::Daehan,
];

const TERM_NAMES: [&str; 24] = [
    "Ipchun",
    "Usu",
    "Gyeongchip",
    "Chunbun",
    "Cheongmyeong",
    "Gogu",
    "Ipha",
    "Soman",
    "Mangjong",
    "Haji",
    "Soseo",
    "Daeseo",
    "Ipchu",
    "Cheoseo",
    "Baengno",
    "Chubun",
    "Hallo",
    "Sanggang",
    "Ipdong",
    "Soseol",
    "Daeseol",
    "Dongji",
    "Sohan",
    "Daehan",
];

const TERM_HANGUL: [&str; 24] = [
    "입춘", "우수", "경칩", "춘분", "청명", "곡우", "입하", "소만", "망종", "하지", "소서", "대서",
    "입추", "처서", "백로", "추분", "한로", "상강", "입동", "소설", "대설", "동지", "소한", "대한",
];

const TERM_HANJA: [&str; 24] = [
    "立春", "雨水", "驚蟄", "春分", "清明", "穀雨", "立夏", "小滿", "芒種", "夏至", "小暑", "大暑",
    "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

impl SolarTerm {
    /// 0-based index (Ipchun=0 .. Daehan=23).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ipchun => 0,
            Self::Usu => 1,
            Self::Gyeongchip => 2,
            Self::Chunbun => 3,
            Self::Cheongmyeong => 4,
            Self::Gogu => 5,
            Self::Ipha => 6,
            Self::Soman => 7,
            Self::Mangjong => 8,
            Self::Haji => 9,
            Self::Soseo => 10,
            Self::Daeseo => 11,
            Self::Ipchu => 12,
            Self::Cheoseo => 13,
            Self::Baengno => 14,
            Self::Chubun => 15,
            Self::Hallo => 16,
            Self::Sanggang => 17,
            Self::Ipdong => 18,
            Self::Soseol => 19,
            Self::Daeseol => 20,
            Self::Dongji => 21,
            Self::Sohan => 22,
            Self::Daehan => 23,
        }
    }

    pub const fn from_index(index: u8) -> Option<SolarTerm> {
        if index < 24 {
            Some(ALL_SOLAR_TERMS[index as usize])
        } else {
            None
        }
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        TERM_NAMES[self.index() as usize]
    }

    pub const fn hangul(self) -> &'static str {
        TERM_HANGUL[self.index() as usize]
    }

    pub const fn hanja(self) -> &'static str {
        TERM_HANJA[self.index() as usize]
    }

    /// Apparent solar ecliptic longitude at the term, in degrees [0, 360).
    pub fn longitude_deg(self) -> f64 {
        f64::from((315 + 15 * u32::from(self.index())) % 360)
    }

    /// Whether this term opens a month pillar (절, the even entries).
    pub const fn is_month_start(self) -> bool {
        self.index() % 2 == 0
    }

    /// Civil month in which the term falls (입춘 → 2, 소한 → 1).
    pub const fn civil_month(self) -> u32 {
        (self.index() as u32 / 2 + 1) % 12 + 1
    }

    /// Next term in the cycle, wrapping from 대한 to 입춘.
    pub const fn next(self) -> SolarTerm {
        ALL_SOLAR_TERMS[((self.index() + 1) % 24) as usize]
    }
}

/// Term that opens the pillar month of a civil month (1 → 소한, 2 → 입춘).
pub fn month_start_term(civil_month: u32) -> Result<SolarTerm, SajuError> {
    if !(1..=12).contains(&civil_month) {
        return Err(SajuError::InvalidMonth(civil_month));
    }
    Ok(ALL_SOLAR_TERMS[(((civil_month + 10) % 12) * 2) as usize])
}

impl Display for SolarTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolarTerm {
    type Err = String;

    /// Accepts the romanized name (any case), hangul or hanja.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        (0..24)
            .find(|&i| {
                TERM_NAMES[i].eq_ignore_ascii_case(s) || TERM_HANGUL[i] == s || TERM_HANJA[i] == s
            })
            .map(|i| ALL_SOLAR_TERMS[i])
            .ok_or_else(|| format!("unknown solar term: {s:?}"))
    }
}

impl TryFrom<String> for SolarTerm {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SolarTerm> for String {
    fn from(term: SolarTerm) -> Self {
        term.name().to_string()
    }
}
