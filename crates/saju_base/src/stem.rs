//! Heavenly stems (천간 / 天干).
//!
//! Ten stems cycle continuously. Consecutive pairs share an element
//! (甲乙 wood, 丙丁 fire, 戊己 earth, 庚辛 metal, 壬癸 water); even
//! indices are yang, odd indices yin.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, Element, Polarity};
use crate::error::SajuError;

/// The 10 heavenly stems, starting from Gap (甲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// Number of heavenly stems.
pub const STEM_COUNT: u8 = 10;

/// All 10 stems in cyclic order (0 = Gap, 9 = Gye).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

/// Ideographic stems, index-aligned with [`ALL_STEMS`].
pub const STEM_HANJA: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

/// Phonetic stems, index-aligned with [`ALL_STEMS`].
pub const STEM_HANGUL: [char; 10] = ['갑', '을', '병', '정', '무', '기', '경', '신', '임', '계'];

impl Stem {
    /// 0-based index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at a 0-based index, `None` outside 0..=9.
    pub const fn from_index(index: u8) -> Option<Stem> {
        if index < STEM_COUNT {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// Stem at a normalized signed index, failing loudly when out of range.
    pub(crate) fn checked(index: i64) -> Result<Stem, SajuError> {
        u8::try_from(index)
            .ok()
            .and_then(Stem::from_index)
            .ok_or(SajuError::StemIndexOutOfRange(index))
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    pub const fn hanja(self) -> char {
        STEM_HANJA[self.index() as usize]
    }

    pub const fn hangul(self) -> char {
        STEM_HANGUL[self.index() as usize]
    }

    /// Element carried by the stem.
    pub const fn element(self) -> Element {
        ALL_ELEMENTS[(self.index() / 2) as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Parse a single symbol in either script.
    ///
    /// `신` is read as the stem 辛; use [`crate::Branch::from_char`] for 申.
    pub fn from_char(c: char) -> Option<Stem> {
        STEM_HANJA
            .iter()
            .position(|&h| h == c)
            .or_else(|| STEM_HANGUL.iter().position(|&h| h == c))
            .map(|i| ALL_STEMS[i])
    }

    /// Step forward (or backward for negative `n`) around the 10-cycle.
    pub fn advance(self, n: i64) -> Stem {
        ALL_STEMS[(i64::from(self.index()) + n).rem_euclid(10) as usize]
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}

impl From<Stem> for char {
    fn from(stem: Stem) -> Self {
        stem.hanja()
    }
}

impl TryFrom<char> for Stem {
    type Error = SajuError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Stem::from_char(c).ok_or(SajuError::UnknownSymbol(c))
    }
}
