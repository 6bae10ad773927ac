//! Stem groups (합 pairs) that select month and hour tables.
//!
//! Stems five apart share one 12-entry month table and one 12-entry hour
//! table: {甲,己}, {乙,庚}, {丙,辛}, {丁,壬}, {戊,癸}.

use serde::{Deserialize, Serialize};

use crate::stem::Stem;

/// One of the 5 stem pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StemGroup {
    GapGi,
    EulGyeong,
    ByeongSin,
    JeongIm,
    MuGye,
}

/// All 5 groups in table order.
pub const ALL_STEM_GROUPS: [StemGroup; 5] = [
    StemGroup::GapGi,
    StemGroup::EulGyeong,
    StemGroup::ByeongSin,
    StemGroup::JeongIm,
    StemGroup::MuGye,
];

impl StemGroup {
    /// Group of a stem.
    pub const fn of(stem: Stem) -> StemGroup {
        match stem {
            Stem::Gap | Stem::Gi => Self::GapGi,
            Stem::Eul | Stem::Gyeong => Self::EulGyeong,
            Stem::Byeong | Stem::Sin => Self::ByeongSin,
            Stem::Jeong | Stem::Im => Self::JeongIm,
            Stem::Mu | Stem::Gye => Self::MuGye,
        }
    }

    /// 0-based table index.
    pub const fn index(self) -> u8 {
        match self {
            Self::GapGi => 0,
            Self::EulGyeong => 1,
            Self::ByeongSin => 2,
            Self::JeongIm => 3,
            Self::MuGye => 4,
        }
    }

    /// The two member stems, yang first.
    pub const fn stems(self) -> [Stem; 2] {
        match self {
            Self::GapGi => [Stem::Gap, Stem::Gi],
            Self::EulGyeong => [Stem::Eul, Stem::Gyeong],
            Self::ByeongSin => [Stem::Byeong, Stem::Sin],
            Self::JeongIm => [Stem::Jeong, Stem::Im],
            Self::MuGye => [Stem::Mu, Stem::Gye],
        }
    }
}
