//! Solar-term instants from an explicit table.
//!
//! The table holds published term instants in local wall time, one entry
//! per (civil year, term). It answers only what it contains; a lookup
//! outside the table fails with [`SearchError::MissingTerm`].
//!
//! TOML layout:
//!
//! ```toml
//! [[terms]]
//! year = 2024
//! term = "Ipchun"        # romanized, hangul or hanja
//! at = "2024-02-04T17:27"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use saju_base::SolarTerm;
use saju_time::BirthInstant;

use crate::error::SearchError;
use crate::provider::{BoundaryProvider, governing_term};

/// One table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermEntry {
    pub year: i32,
    pub term: SolarTerm,
    pub at: BirthInstant,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct TermFile {
    #[serde(default)]
    terms: Vec<TermEntry>,
}

/// Lookup table of solar-term instants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolarTermTable {
    entries: BTreeMap<(i32, SolarTerm), BirthInstant>,
}

impl SolarTermTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from rows, rejecting rows whose instant is not in `year`.
    pub fn from_entries<I>(entries: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = TermEntry>,
    {
        let mut table = Self::new();
        for e in entries {
            if e.at.year() != e.year {
                return Err(SearchError::TableParse(format!(
                    "{} {}: instant {} is not in that year",
                    e.year, e.term, e.at
                )));
            }
            table.insert(e.term, e.at);
        }
        Ok(table)
    }

    /// Parse the TOML layout described in the module docs.
    pub fn from_toml_str(s: &str) -> Result<Self, SearchError> {
        let file: TermFile = toml::from_str(s)?;
        Self::from_entries(file.terms)
    }

    /// Read and parse a TOML table file.
    pub fn load(path: &Path) -> Result<Self, SearchError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SearchError::Io(format!("{}: {e}", path.display())))?;
        let table = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), entries = table.len(), "loaded solar-term table");
        Ok(table)
    }

    /// Serialize to the TOML layout.
    pub fn to_toml_string(&self) -> Result<String, SearchError> {
        let file = TermFile {
            terms: self.entries().collect(),
        };
        toml::to_string(&file).map_err(|e| SearchError::TableParse(e.to_string()))
    }

    /// Record a term instant; the civil year is taken from `at`.
    pub fn insert(&mut self, term: SolarTerm, at: BirthInstant) -> Option<BirthInstant> {
        self.entries.insert((at.year(), term), at)
    }

    pub fn get(&self, year: i32, term: SolarTerm) -> Option<BirthInstant> {
        self.entries.get(&(year, term)).copied()
    }

    /// Instant of a term, or [`SearchError::MissingTerm`].
    pub fn term_instant(&self, year: i32, term: SolarTerm) -> Result<BirthInstant, SearchError> {
        self.get(year, term).ok_or_else(|| {
            warn!(year, term = term.name(), "solar-term table has no entry");
            SearchError::MissingTerm { year, term }
        })
    }

    /// Rows in (year, term) order.
    pub fn entries(&self) -> impl Iterator<Item = TermEntry> + '_ {
        self.entries
            .iter()
            .map(|(&(year, term), &at)| TermEntry { year, term, at })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BoundaryProvider for SolarTermTable {
    fn has_spring_occurred(&self, instant: &BirthInstant) -> Result<bool, SearchError> {
        let spring = self.term_instant(instant.year(), SolarTerm::Ipchun)?;
        Ok(*instant >= spring)
    }

    fn has_month_term_occurred(&self, instant: &BirthInstant) -> Result<bool, SearchError> {
        let term = governing_term(instant)?;
        let at = self.term_instant(instant.year(), term)?;
        Ok(*instant >= at)
    }
}
