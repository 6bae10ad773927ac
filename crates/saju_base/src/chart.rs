//! Presentation chart (명식) built from the four pillars.
//!
//! One column per pillar, each read against the day stem (sipsin, twelve
//! stages) and against the year branch (twelve spirits).

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::Element;
use crate::pillar::Pillar;
use crate::saju::Saju;
use crate::sipsin::{Sipsin, sipsin_of};
use crate::stem::Stem;
use crate::twelve_spirit::{TwelveSpirit, twelve_spirit};
use crate::twelve_stage::{TwelveStage, twelve_stage};

/// Column of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// Korean column heading (생년, 생월, 생일, 생시).
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Year => "생년",
            Self::Month => "생월",
            Self::Day => "생일",
            Self::Hour => "생시",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// One pillar with its derived readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartColumn {
    pub position: PillarPosition,
    pub pillar: Pillar,
    /// Sipsin of the stem; `None` for the day stem itself (일간).
    pub stem_sipsin: Option<Sipsin>,
    /// Sipsin of the branch's principal hidden stem.
    pub branch_sipsin: Sipsin,
    /// Hidden stems (지장간), principal last.
    pub hidden_stems: Vec<Stem>,
    /// Stage of the day stem on this branch.
    pub twelve_stage: TwelveStage,
    /// Spirit of this branch for the year branch.
    pub twelve_spirit: TwelveSpirit,
}

impl ChartColumn {
    fn build(position: PillarPosition, pillar: Pillar, day_stem: Stem, year_branch: Branch) -> Self {
        let hidden = pillar.branch().hidden_stems();
        let principal = hidden.last().copied().unwrap_or(day_stem);
        Self {
            position,
            pillar,
            stem_sipsin: match position {
                PillarPosition::Day => None,
                _ => Some(sipsin_of(day_stem, pillar.stem())),
            },
            branch_sipsin: sipsin_of(day_stem, principal),
            hidden_stems: hidden.to_vec(),
            twelve_stage: twelve_stage(day_stem, pillar.branch()),
            twelve_spirit: twelve_spirit(year_branch, pillar.branch()),
        }
    }
}

/// Full chart: four columns plus the chart-level labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SajuChart {
    pub saju: Saju,
    pub columns: [ChartColumn; 4],
    pub ohaeng: Element,
    pub sipsin: Sipsin,
    pub zodiac_animal: String,
    pub element_counts: Vec<(Element, u8)>,
}

impl SajuChart {
    pub fn from_saju(saju: Saju) -> Self {
        let day_stem = saju.day_master();
        let year_branch = saju.year.branch();
        let pillars = saju.pillars();
        let columns = ALL_POSITIONS
            .map(|pos| ChartColumn::build(pos, pillars[pos as usize], day_stem, year_branch));
        Self {
            saju,
            columns,
            ohaeng: saju.ohaeng(),
            sipsin: saju.sipsin(),
            zodiac_animal: saju.zodiac_animal().to_string(),
            element_counts: saju.element_counts().to_vec(),
        }
    }

    pub fn column(&self, position: PillarPosition) -> &ChartColumn {
        &self.columns[position as usize]
    }
}
