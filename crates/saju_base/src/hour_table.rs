//! Hour pillar tables (시주).
//!
//! The day is split into 12 two-hour buckets named by branch. Bucket 0 (子)
//! spans 23:00-00:59 and wraps midnight; bucket k covers hours 2k-1 and 2k.
//! The day stem's group picks one of 5 ready-made 12-entry tables.

use crate::branch::Branch;
use crate::error::SajuError;
use crate::pillar::Pillar;
use crate::stem::Stem;
use crate::stem_group::StemGroup;

const fn p(stem: Stem, branch: Branch) -> Pillar {
    Pillar::of(stem, branch)
}

/// Hour pillars indexed by `[StemGroup::index()][bucket]`.
pub const HOUR_PILLARS: [[Pillar; 12]; 5] = [
    // {甲,己} 甲子 乙丑 丙寅 丁卯 戊辰 己巳 庚午 辛未 壬申 癸酉 甲戌 乙亥
    [
        p(Stem::Gap, Branch::Ja),
        p(Stem::Eul, Branch::Chuk),
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
    ],
    // {乙,庚} 丙子 丁丑 戊寅 己卯 庚辰 辛巳 壬午 癸未 甲申 乙酉 丙戌 丁亥
    [
        p(Stem::Byeong, Branch::Ja),
        p(Stem::Jeong, Branch::Chuk),
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
    ],
    // {丙,辛} 戊子 己丑 庚寅 辛卯 壬辰 癸巳 甲午 乙未 丙申 丁酉 戊戌 己亥
    [
        p(Stem::Mu, Branch::Ja),
        p(Stem::Gi, Branch::Chuk),
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
    ],
    // {丁,壬} 庚子 辛丑 壬寅 癸卯 甲辰 乙巳 丙午 丁未 戊申 己酉 庚戌 辛亥
    [
        p(Stem::Gyeong, Branch::Ja),
        p(Stem::Sin, Branch::Chuk),
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
    ],
    // {戊,癸} 壬子 癸丑 甲寅 乙卯 丙辰 丁巳 戊午 己未 庚申 辛酉 壬戌 癸亥
    [
        p(Stem::Im, Branch::Ja),
        p(Stem::Gye, Branch::Chuk),
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
    ],
];

/// Two-hour bucket (0..=11) for an hour of day.
pub fn hour_bucket(hour: u32) -> Result<usize, SajuError> {
    if hour > 23 {
        return Err(SajuError::InvalidHour(hour));
    }
    Ok((((hour + 1) / 2) % 12) as usize)
}

/// Hour pillar for a day stem and hour of day.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Result<Pillar, SajuError> {
    let bucket = hour_bucket(hour)?;
    let table = &HOUR_PILLARS[StemGroup::of(day_stem).index() as usize];
    Ok(table[bucket])
}
