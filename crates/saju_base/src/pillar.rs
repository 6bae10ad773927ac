//! Pillar (간지 / 干支): a heavenly stem paired with an earthly branch.
//!
//! Only same-polarity pairs exist, so the 10 x 12 combinations collapse to
//! the 60-entry sexagenary cycle starting at 甲子.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::SajuError;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// An immutable stem/branch pair of matching polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPillar")]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

#[derive(Deserialize)]
struct RawPillar {
    stem: Stem,
    branch: Branch,
}

impl TryFrom<RawPillar> for Pillar {
    type Error = SajuError;

    fn try_from(raw: RawPillar) -> Result<Self, Self::Error> {
        Pillar::new(raw.stem, raw.branch)
    }
}

impl Pillar {
    /// Pair a stem with a branch, rejecting mixed polarity (e.g. 甲丑).
    pub fn new(stem: Stem, branch: Branch) -> Result<Pillar, SajuError> {
        if stem.polarity() == branch.polarity() {
            Ok(Pillar { stem, branch })
        } else {
            Err(SajuError::InconsistentPillar { stem, branch })
        }
    }

    /// Table constructor; entries are checked by the table tests.
    pub(crate) const fn of(stem: Stem, branch: Branch) -> Pillar {
        Pillar { stem, branch }
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Position in the 60-cycle (甲子=0 .. 癸亥=59).
    pub const fn sexagenary_index(self) -> u8 {
        // Unique n in 0..60 with n % 10 == stem and n % 12 == branch.
        let s = self.stem.index() as i16;
        let b = self.branch.index() as i16;
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// Pillar at a position in the 60-cycle, `None` outside 0..=59.
    pub fn from_sexagenary_index(index: u8) -> Option<Pillar> {
        if index >= CYCLE_LEN {
            return None;
        }
        let stem = Stem::from_index(index % 10)?;
        let branch = Branch::from_index(index % 12)?;
        Some(Pillar { stem, branch })
    }

    /// Step forward (or backward) `n` positions around the 60-cycle.
    ///
    /// Stem and branch each move by one per step.
    pub fn advance(self, n: i64) -> Pillar {
        Pillar {
            stem: self.stem.advance(n),
            branch: self.branch.advance(n),
        }
    }

    /// Ideographic form, e.g. `庚戌`.
    pub fn hanja(self) -> String {
        [self.stem.hanja(), self.branch.hanja()].iter().collect()
    }

    /// Phonetic form, e.g. `경술`.
    pub fn hangul(self) -> String {
        [self.stem.hangul(), self.branch.hangul()].iter().collect()
    }

    /// Parse a two-symbol pillar in either script (`庚戌`, `경술`).
    pub fn parse(text: &str) -> Result<Pillar, SajuError> {
        let mut chars = text.trim().chars();
        let (Some(s), Some(b), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SajuError::MalformedPillar(text.to_string()));
        };
        let stem = Stem::from_char(s).ok_or(SajuError::UnknownSymbol(s))?;
        let branch = Branch::from_char(b).ok_or(SajuError::UnknownSymbol(b))?;
        Pillar::new(stem, branch)
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

/// All 60 pillars in cycle order, starting at 甲子.
pub fn all_pillars() -> impl Iterator<Item = Pillar> {
    (0..CYCLE_LEN).filter_map(Pillar::from_sexagenary_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_mixed_polarity() {
        assert!(Pillar::new(Stem::Gap, Branch::Ja).is_ok());
        assert_eq!(
            Pillar::new(Stem::Gap, Branch::Chuk),
            Err(SajuError::InconsistentPillar {
                stem: Stem::Gap,
                branch: Branch::Chuk
            })
        );
    }

    #[test]
    fn sexagenary_index_round_trip() {
        for (i, p) in all_pillars().enumerate() {
            assert_eq!(p.sexagenary_index() as usize, i);
        }
        assert_eq!(all_pillars().count(), 60);
        assert_eq!(Pillar::from_sexagenary_index(60), None);
    }

    #[test]
    fn known_positions() {
        let gyeongsul = Pillar::new(Stem::Gyeong, Branch::Sul).unwrap();
        assert_eq!(gyeongsul.sexagenary_index(), 46);
        let gyehae = Pillar::new(Stem::Gye, Branch::Hae).unwrap();
        assert_eq!(gyehae.sexagenary_index(), 59);
    }

    #[test]
    fn advance_wraps_cycle() {
        let first = Pillar::from_sexagenary_index(0).unwrap();
        let last = Pillar::from_sexagenary_index(59).unwrap();
        assert_eq!(last.advance(1), first);
        assert_eq!(first.advance(-1), last);
        assert_eq!(first.advance(60), first);
    }

    #[test]
    fn scripts_and_display() {
        let p = Pillar::new(Stem::Gyeong, Branch::Sul).unwrap();
        assert_eq!(p.hanja(), "庚戌");
        assert_eq!(p.hangul(), "경술");
        assert_eq!(p.to_string(), "庚戌");
    }

    #[test]
    fn parse_either_script() {
        let p = Pillar::new(Stem::Gyeong, Branch::Sin).unwrap();
        assert_eq!(Pillar::parse("庚申"), Ok(p));
        assert_eq!(Pillar::parse("경신"), Ok(p));
        assert!(Pillar::parse("甲丑").is_err());
        assert_eq!(
            Pillar::parse("甲"),
            Err(SajuError::MalformedPillar("甲".to_string()))
        );
        assert_eq!(
            Pillar::parse("甲子丑"),
            Err(SajuError::MalformedPillar("甲子丑".to_string()))
        );
        assert_eq!(Pillar::parse(""), Err(SajuError::MalformedPillar(String::new())));
        assert_eq!(Pillar::parse("甲x"), Err(SajuError::UnknownSymbol('x')));
    }

    #[test]
    fn serde_shape() {
        let p = Pillar::new(Stem::Gyeong, Branch::Sul).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"stem":"庚","branch":"戌"}"#);
        let back: Pillar = serde_json::from_str(r#"{"stem":"경","branch":"술"}"#).unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Pillar>(r#"{"stem":"甲","branch":"丑"}"#).is_err());
    }
}
