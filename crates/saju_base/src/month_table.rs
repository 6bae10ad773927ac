//! Month pillar tables (월주).
//!
//! A solar month starts at its governing solar term, not on the civil first.
//! The year stem's group picks one of 5 ready-made 12-entry tables. Entry 0
//! is the 丑 month (from 소한 in January), entry 1 the 寅 month opened by
//! 입춘, and so on to entry 11, the 子 month opened by 대설.

use crate::branch::Branch;
use crate::error::SajuError;
use crate::pillar::Pillar;
use crate::stem::Stem;
use crate::stem_group::StemGroup;

const fn p(stem: Stem, branch: Branch) -> Pillar {
    Pillar::of(stem, branch)
}

/// Month pillars indexed by `[StemGroup::index()][civil month offset]`.
pub const MONTH_PILLARS: [[Pillar; 12]; 5] = [
    // {甲,己} 丁丑 丙寅 丁卯 戊辰 己巳 庚午 辛未 壬申 癸酉 甲戌 乙亥 丙子
    [
        p(Stem::Jeong, Branch::Chuk),
        p(Stem::Byeong, Branch::In),
        p(Stem::Jeong, Branch::Myo),
        p(Stem::Mu, Branch::Jin),
        p(Stem::Gi, Branch::Sa),
        p(Stem::Gyeong, Branch::O),
        p(Stem::Sin, Branch::Mi),
        p(Stem::Im, Branch::Sin),
        p(Stem::Gye, Branch::Yu),
        p(Stem::Gap, Branch::Sul),
        p(Stem::Eul, Branch::Hae),
        p(Stem::Byeong, Branch::Ja),
    ],
    // {乙,庚} 己丑 戊寅 己卯 庚辰 辛巳 壬午 癸未 甲申 乙酉 丙戌 丁亥 戊子
    [
        p(Stem::Gi, Branch::Chuk),
        p(Stem::Mu, Branch::In),
        p(Stem::Gi, Branch::Myo),
        p(Stem::Gyeong, Branch::Jin),
        p(Stem::Sin, Branch::Sa),
        p(Stem::Im, Branch::O),
        p(Stem::Gye, Branch::Mi),
        p(Stem::Gap, Branch::Sin),
        p(Stem::Eul, Branch::Yu),
        p(Stem::Byeong, Branch::Sul),
        p(Stem::Jeong, Branch::Hae),
        p(Stem::Mu, Branch::Ja),
    ],
    // {丙,辛} 辛丑 庚寅 辛卯 壬辰 癸巳 甲午 乙未 丙申 丁酉 戊戌 己亥 庚子
    [
        p(Stem::Sin, Branch::Chuk),
        p(Stem::Gyeong, Branch::In),
        p(Stem::Sin, Branch::Myo),
        p(Stem::Im, Branch::Jin),
        p(Stem::Gye, Branch::Sa),
        p(Stem::Gap, Branch::O),
        p(Stem::Eul, Branch::Mi),
        p(Stem::Byeong, Branch::Sin),
        p(Stem::Jeong, Branch::Yu),
        p(Stem::Mu, Branch::Sul),
        p(Stem::Gi, Branch::Hae),
        p(Stem::Gyeong, Branch::Ja),
    ],
    // {丁,壬} 癸丑 壬寅 癸卯 甲辰 乙巳 丙午 丁未 戊申 己酉 庚戌 辛亥 壬子
    [
        p(Stem::Gye, Branch::Chuk),
        p(Stem::Im, Branch::In),
        p(Stem::Gye, Branch::Myo),
        p(Stem::Gap, Branch::Jin),
        p(Stem::Eul, Branch::Sa),
        p(Stem::Byeong, Branch::O),
        p(Stem::Jeong, Branch::Mi),
        p(Stem::Mu, Branch::Sin),
        p(Stem::Gi, Branch::Yu),
        p(Stem::Gyeong, Branch::Sul),
        p(Stem::Sin, Branch::Hae),
        p(Stem::Im, Branch::Ja),
    ],
    // {戊,癸} 乙丑 甲寅 乙卯 丙辰 丁巳 戊午 己未 庚申 辛酉 壬戌 癸亥 甲子
    [
        p(Stem::Eul, Branch::Chuk),
        p(Stem::Gap, Branch::In),
        p(Stem::Eul, Branch::Myo),
        p(Stem::Byeong, Branch::Jin),
        p(Stem::Jeong, Branch::Sa),
        p(Stem::Mu, Branch::O),
        p(Stem::Gi, Branch::Mi),
        p(Stem::Gyeong, Branch::Sin),
        p(Stem::Sin, Branch::Yu),
        p(Stem::Im, Branch::Sul),
        p(Stem::Gye, Branch::Hae),
        p(Stem::Gap, Branch::Ja),
    ],
];

/// Offset into a month table for a civil month (1..=12).
///
/// Before the month's governing solar term the previous solar month is
/// still in effect, so the offset steps back by one (January wraps to 11).
pub fn month_offset(civil_month: u32, month_term_occurred: bool) -> Result<usize, SajuError> {
    if !(1..=12).contains(&civil_month) {
        return Err(SajuError::InvalidMonth(civil_month));
    }
    let offset = (civil_month - 1) as usize;
    Ok(if month_term_occurred {
        offset
    } else {
        (offset + 11) % 12
    })
}

/// Month pillar for a year stem and civil month.
///
/// `year_stem` must come from the year pillar (solar year), not the civil
/// year, so that January and early February resolve against the prior year.
pub fn month_pillar(
    year_stem: Stem,
    civil_month: u32,
    month_term_occurred: bool,
) -> Result<Pillar, SajuError> {
    let offset = month_offset(civil_month, month_term_occurred)?;
    let table = &MONTH_PILLARS[StemGroup::of(year_stem).index() as usize];
    Ok(table[offset])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem_group::ALL_STEM_GROUPS;

    #[test]
    fn table_entries_are_valid_pillars() {
        for table in &MONTH_PILLARS {
            for p in table {
                assert!(Pillar::new(p.stem(), p.branch()).is_ok(), "{p}");
            }
        }
    }

    #[test]
    fn branches_run_from_chuk() {
        for table in &MONTH_PILLARS {
            for (i, p) in table.iter().enumerate() {
                assert_eq!(p.branch().index() as usize, (i + 1) % 12);
            }
        }
    }

    #[test]
    fn in_month_stem_per_group() {
        // 甲己 -> 丙寅, 乙庚 -> 戊寅, 丙辛 -> 庚寅, 丁壬 -> 壬寅, 戊癸 -> 甲寅
        let expected = [Stem::Byeong, Stem::Mu, Stem::Gyeong, Stem::Im, Stem::Gap];
        for g in ALL_STEM_GROUPS {
            let p = MONTH_PILLARS[g.index() as usize][1];
            assert_eq!(p.branch(), Branch::In);
            assert_eq!(p.stem(), expected[g.index() as usize], "{g:?}");
        }
    }

    #[test]
    fn months_are_consecutive_in_cycle() {
        for table in &MONTH_PILLARS {
            for i in 1..11 {
                assert_eq!(table[i].advance(1), table[i + 1]);
            }
            // 丑 closes the solar year that began with 寅.
            assert_eq!(table[11].advance(1), table[0]);
        }
    }

    #[test]
    fn offset_steps_back_before_term() {
        assert_eq!(month_offset(5, true), Ok(4));
        assert_eq!(month_offset(5, false), Ok(3));
        assert_eq!(month_offset(1, false), Ok(11));
        assert_eq!(month_offset(13, true), Err(SajuError::InvalidMonth(13)));
        assert_eq!(month_offset(0, true), Err(SajuError::InvalidMonth(0)));
    }

    #[test]
    fn may_1996() {
        // 丙子 year, after 입하: 癸巳 month.
        let p = month_pillar(Stem::Byeong, 5, true).unwrap();
        assert_eq!(p.hanja(), "癸巳");
    }

    #[test]
    fn february_before_spring_is_chuk_month() {
        // 2024-02-03: year pillar is still 癸卯, month 乙丑.
        let p = month_pillar(Stem::Gye, 2, false).unwrap();
        assert_eq!(p.hanja(), "乙丑");
        // After 입춘: 甲辰 year, 丙寅 month.
        let p = month_pillar(Stem::Gap, 2, true).unwrap();
        assert_eq!(p.hanja(), "丙寅");
    }
}
