//! Earthly branches (지지 / 地支).
//!
//! Twelve branches cycle continuously, starting from Ja (子). Each branch
//! carries an element, a zodiac animal and a fixed list of hidden stems
//! (지장간), ordered residual, middle, principal.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::SajuError;
use crate::stem::Stem;

/// The 12 earthly branches, starting from Ja (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// Number of earthly branches.
pub const BRANCH_COUNT: u8 = 12;

/// All 12 branches in cyclic order (0 = Ja, 11 = Hae).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

/// Ideographic branches, index-aligned with [`ALL_BRANCHES`].
pub const BRANCH_HANJA: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// Phonetic branches, index-aligned with [`ALL_BRANCHES`].
pub const BRANCH_HANGUL: [char; 12] = [
    '자', '축', '인', '묘', '진', '사', '오', '미', '신', '유', '술', '해',
];

const ANIMALS: [&str; 12] = [
    "쥐", "소", "호랑이", "토끼", "용", "뱀", "말", "양", "원숭이", "닭", "개", "돼지",
];

const HIDDEN_STEMS: [&[Stem]; 12] = [
    &[Stem::Im, Stem::Gye],
    &[Stem::Gye, Stem::Sin, Stem::Gi],
    &[Stem::Mu, Stem::Byeong, Stem::Gap],
    &[Stem::Gap, Stem::Eul],
    &[Stem::Eul, Stem::Gye, Stem::Mu],
    &[Stem::Mu, Stem::Gyeong, Stem::Byeong],
    &[Stem::Byeong, Stem::Gi, Stem::Jeong],
    &[Stem::Jeong, Stem::Eul, Stem::Gi],
    &[Stem::Mu, Stem::Im, Stem::Gyeong],
    &[Stem::Gyeong, Stem::Sin],
    &[Stem::Sin, Stem::Jeong, Stem::Mu],
    &[Stem::Mu, Stem::Gap, Stem::Im],
];

impl Branch {
    /// 0-based index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at a 0-based index, `None` outside 0..=11.
    pub const fn from_index(index: u8) -> Option<Branch> {
        if index < BRANCH_COUNT {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Branch at a normalized signed index, failing loudly when out of range.
    pub(crate) fn checked(index: i64) -> Result<Branch, SajuError> {
        u8::try_from(index)
            .ok()
            .and_then(Branch::from_index)
            .ok_or(SajuError::BranchIndexOutOfRange(index))
    }

    /// Romanized Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    pub const fn hanja(self) -> char {
        BRANCH_HANJA[self.index() as usize]
    }

    pub const fn hangul(self) -> char {
        BRANCH_HANGUL[self.index() as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Element of the branch (子 water, 丑 earth, 寅 wood, ...).
    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Jin | Self::Sul | Self::Chuk | Self::Mi => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    /// Zodiac animal (띠) in Korean.
    pub const fn animal(self) -> &'static str {
        ANIMALS[self.index() as usize]
    }

    /// Hidden stems (지장간), residual first and principal last.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// Parse a single symbol in either script. `신` is read as 申 here.
    pub fn from_char(c: char) -> Option<Branch> {
        BRANCH_HANJA
            .iter()
            .position(|&h| h == c)
            .or_else(|| BRANCH_HANGUL.iter().position(|&h| h == c))
            .map(|i| ALL_BRANCHES[i])
    }

    /// Step forward (or backward for negative `n`) around the 12-cycle.
    pub fn advance(self, n: i64) -> Branch {
        ALL_BRANCHES[(i64::from(self.index()) + n).rem_euclid(12) as usize]
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}

impl From<Branch> for char {
    fn from(branch: Branch) -> Self {
        branch.hanja()
    }
}

impl TryFrom<char> for Branch {
    type Error = SajuError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Branch::from_char(c).ok_or(SajuError::UnknownSymbol(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as u8), Some(*b));
        }
        assert_eq!(Branch::from_index(12), None);
    }

    #[test]
    fn scripts_index_aligned() {
        assert_eq!(Branch::Sul.hanja(), '戌');
        assert_eq!(Branch::Sul.hangul(), '술');
        assert_eq!(Branch::from_char('申'), Some(Branch::Sin));
        assert_eq!(Branch::from_char('신'), Some(Branch::Sin));
        assert_eq!(Branch::from_char('甲'), None);
    }

    #[test]
    fn animals() {
        assert_eq!(Branch::Ja.animal(), "쥐");
        assert_eq!(Branch::In.animal(), "호랑이");
        assert_eq!(Branch::Hae.animal(), "돼지");
    }

    #[test]
    fn principal_hidden_stem_matches_element() {
        for b in ALL_BRANCHES {
            let hidden = b.hidden_stems();
            assert!((2..=3).contains(&hidden.len()), "{b:?}");
            let principal = hidden[hidden.len() - 1];
            assert_eq!(principal.element(), b.element(), "{b:?}");
        }
    }

    #[test]
    fn advance_wraps() {
        assert_eq!(Branch::Hae.advance(1), Branch::Ja);
        assert_eq!(Branch::Ja.advance(-1), Branch::Hae);
    }

    #[test]
    fn checked_rejects_out_of_range() {
        assert_eq!(Branch::checked(10), Ok(Branch::Sul));
        assert_eq!(
            Branch::checked(12),
            Err(SajuError::BranchIndexOutOfRange(12))
        );
    }
}
