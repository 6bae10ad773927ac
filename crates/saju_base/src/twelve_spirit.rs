//! Twelve spirits (12신살 / 十二神煞) of a branch relative to the year branch.
//!
//! The year branch's triad (三合) fixes where 겁살 falls; the remaining
//! spirits follow in branch order.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwelveSpirit {
    Geopsal,
    Jaesal,
    Cheonsal,
    Jisal,
    Yeonsal,
    Wolsal,
    Mangsinsal,
    Jangseongsal,
    Banansal,
    Yeongmasal,
    Yukhaesal,
    Hwagaesal,
}

pub const ALL_TWELVE_SPIRITS: [TwelveSpirit; 12] = [
    TwelveSpirit::Geopsal,
    TwelveSpirit::Jaesal,
    TwelveSpirit::Cheonsal,
    TwelveSpirit::Jisal,
    TwelveSpirit::Yeonsal,
    TwelveSpirit::Wolsal,
    TwelveSpirit::Mangsinsal,
    TwelveSpirit::Jangseongsal,
    TwelveSpirit::Banansal,
    TwelveSpirit::Yeongmasal,
    TwelveSpirit::Yukhaesal,
    TwelveSpirit::Hwagaesal,
];

const SPIRIT_HANGUL: [&str; 12] = [
    "겁살", "재살", "천살", "지살", "연살", "월살", "망신살", "장성살", "반안살", "역마살", "육해살",
    "화개살",
];

const SPIRIT_HANJA: [&str; 12] = [
    "劫煞", "災煞", "天煞", "地煞", "年煞", "月煞", "亡身煞", "將星煞", "攀鞍煞", "驛馬煞", "六害煞",
    "華蓋煞",
];

/// 겁살 branch keyed by `year_branch mod 4`.
///
/// 申子辰 → 巳, 亥卯未 → 申, 寅午戌 → 亥, 巳酉丑 → 寅.
const GEOPSAL_BY_TRIAD: [Branch; 4] = [Branch::Sa, Branch::In, Branch::Hae, Branch::Sin];

impl TwelveSpirit {
    pub const fn index(self) -> u8 {
        match self {
            Self::Geopsal => 0,
            Self::Jaesal => 1,
            Self::Cheonsal => 2,
            Self::Jisal => 3,
            Self::Yeonsal => 4,
            Self::Wolsal => 5,
            Self::Mangsinsal => 6,
            Self::Jangseongsal => 7,
            Self::Banansal => 8,
            Self::Yeongmasal => 9,
            Self::Yukhaesal => 10,
            Self::Hwagaesal => 11,
        }
    }

    pub const fn hangul(self) -> &'static str {
        SPIRIT_HANGUL[self.index() as usize]
    }

    pub const fn hanja(self) -> &'static str {
        SPIRIT_HANJA[self.index() as usize]
    }
}

/// Spirit of `target` for someone born in a `year_branch` year.
pub const fn twelve_spirit(year_branch: Branch, target: Branch) -> TwelveSpirit {
    let start = GEOPSAL_BY_TRIAD[(year_branch.index() % 4) as usize].index();
    ALL_TWELVE_SPIRITS[((target.index() + 12 - start) % 12) as usize]
}
