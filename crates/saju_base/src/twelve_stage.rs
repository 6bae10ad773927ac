//! Twelve life stages (12운성 / 十二運星) of a stem across the branches.
//!
//! Each stem is "born" (장생) at a fixed branch. Yang stems then move
//! forward through the branches and yin stems move backward.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Polarity;
use crate::stem::Stem;

/// The 12 stages, from birth (장생) to nurture (양).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwelveStage {
    Jangsaeng,
    Mogyok,
    Gwandae,
    Geollok,
    Jewang,
    Soe,
    Byeong,
    Sa,
    Myo,
    Jeol,
    Tae,
    Yang,
}

/// All 12 stages in order.
pub const ALL_TWELVE_STAGES: [TwelveStage; 12] = [
    TwelveStage::Jangsaeng,
    TwelveStage::Mogyok,
    TwelveStage::Gwandae,
    TwelveStage::Geollok,
    TwelveStage::Jewang,
    TwelveStage::Soe,
    TwelveStage::Byeong,
    TwelveStage::Sa,
    TwelveStage::Myo,
    TwelveStage::Jeol,
    TwelveStage::Tae,
    TwelveStage::Yang,
];

const STAGE_HANGUL: [&str; 12] = [
    "장생", "목욕", "관대", "건록", "제왕", "쇠", "병", "사", "묘", "절", "태", "양",
];

const STAGE_HANJA: [&str; 12] = [
    "長生", "沐浴", "冠帶", "建祿", "帝旺", "衰", "病", "死", "墓", "絶", "胎", "養",
];

/// Birth branch (장생지) per stem, indexed by stem.
const BIRTH_BRANCH: [Branch; 10] = [
    Branch::Hae,
    Branch::O,
    Branch::In,
    Branch::Yu,
    Branch::In,
    Branch::Yu,
    Branch::Sa,
    Branch::Ja,
    Branch::Sin,
    Branch::Myo,
];

impl TwelveStage {
    pub const fn index(self) -> u8 {
        match self {
            Self::Jangsaeng => 0,
            Self::Mogyok => 1,
            Self::Gwandae => 2,
            Self::Geollok => 3,
            Self::Jewang => 4,
            Self::Soe => 5,
            Self::Byeong => 6,
            Self::Sa => 7,
            Self::Myo => 8,
            Self::Jeol => 9,
            Self::Tae => 10,
            Self::Yang => 11,
        }
    }

    pub const fn hangul(self) -> &'static str {
        STAGE_HANGUL[self.index() as usize]
    }

    pub const fn hanja(self) -> &'static str {
        STAGE_HANJA[self.index() as usize]
    }
}

/// Stage of `stem` when it sits on `branch`.
pub const fn twelve_stage(stem: Stem, branch: Branch) -> TwelveStage {
    let birth = BIRTH_BRANCH[stem.index() as usize].index();
    let b = branch.index();
    let steps = match stem.polarity() {
        Polarity::Yang => (b + 12 - birth) % 12,
        Polarity::Yin => (birth + 12 - b) % 12,
    };
    ALL_TWELVE_STAGES[steps as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn birth_branch_is_jangsaeng() {
        for s in ALL_STEMS {
            let birth = BIRTH_BRANCH[s.index() as usize];
            assert_eq!(twelve_stage(s, birth), TwelveStage::Jangsaeng);
        }
    }

    #[test]
    fn rok_positions() {
        // 甲祿在寅, 乙祿在卯, 庚祿在申, 辛祿在酉
        assert_eq!(twelve_stage(Stem::Gap, Branch::In), TwelveStage::Geollok);
        assert_eq!(twelve_stage(Stem::Eul, Branch::Myo), TwelveStage::Geollok);
        assert_eq!(twelve_stage(Stem::Gyeong, Branch::Sin), TwelveStage::Geollok);
        assert_eq!(twelve_stage(Stem::Sin, Branch::Yu), TwelveStage::Geollok);
    }

    #[test]
    fn gyeong_on_sul_is_soe() {
        assert_eq!(twelve_stage(Stem::Gyeong, Branch::Sul), TwelveStage::Soe);
    }

    #[test]
    fn yin_stems_run_backward() {
        assert_eq!(twelve_stage(Stem::Eul, Branch::O), TwelveStage::Jangsaeng);
        assert_eq!(twelve_stage(Stem::Eul, Branch::Sa), TwelveStage::Mogyok);
        assert_eq!(twelve_stage(Stem::Eul, Branch::Mi), TwelveStage::Yang);
    }

    #[test]
    fn names() {
        assert_eq!(TwelveStage::Jewang.hangul(), "제왕");
        assert_eq!(TwelveStage::Jewang.hanja(), "帝旺");
    }
}
