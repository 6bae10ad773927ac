//! Boundary-fact collaborator.
//!
//! The calculator needs two yes/no facts per birth instant: has 입춘 of the
//! civil year been reached, and has the civil month's governing term been
//! reached. Providers answer them from whatever source they wrap; an
//! unanswerable question is an error, never a guessed `false`.

use saju_base::{BoundaryFacts, SolarTerm, month_start_term};
use saju_time::BirthInstant;

use crate::error::SearchError;

/// Source of solar-term boundary facts.
pub trait BoundaryProvider: Send + Sync {
    /// Whether 입춘 of `instant`'s civil year falls at or before `instant`.
    fn has_spring_occurred(&self, instant: &BirthInstant) -> Result<bool, SearchError>;

    /// Whether the governing term of `instant`'s civil month falls at or
    /// before `instant`.
    fn has_month_term_occurred(&self, instant: &BirthInstant) -> Result<bool, SearchError>;

    /// Both facts for one instant.
    fn boundary_facts(&self, instant: &BirthInstant) -> Result<BoundaryFacts, SearchError> {
        Ok(BoundaryFacts {
            spring_occurred: self.has_spring_occurred(instant)?,
            month_term_occurred: self.has_month_term_occurred(instant)?,
        })
    }
}

impl<P: BoundaryProvider + ?Sized> BoundaryProvider for Box<P> {
    fn has_spring_occurred(&self, instant: &BirthInstant) -> Result<bool, SearchError> {
        (**self).has_spring_occurred(instant)
    }

    fn has_month_term_occurred(&self, instant: &BirthInstant) -> Result<bool, SearchError> {
        (**self).has_month_term_occurred(instant)
    }

    fn boundary_facts(&self, instant: &BirthInstant) -> Result<BoundaryFacts, SearchError> {
        (**self).boundary_facts(instant)
    }
}

/// Term governing the month pillar of `instant`'s civil month.
pub fn governing_term(instant: &BirthInstant) -> Result<SolarTerm, SearchError> {
    Ok(month_start_term(instant.month())?)
}

/// Facts known in advance, e.g. read from an almanac by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedBoundaries {
    pub facts: BoundaryFacts,
}

impl FixedBoundaries {
    pub const fn new(spring_occurred: bool, month_term_occurred: bool) -> Self {
        Self {
            facts: BoundaryFacts::new(spring_occurred, month_term_occurred),
        }
    }
}

impl BoundaryProvider for FixedBoundaries {
    fn has_spring_occurred(&self, _instant: &BirthInstant) -> Result<bool, SearchError> {
        Ok(self.facts.spring_occurred)
    }

    fn has_month_term_occurred(&self, _instant: &BirthInstant) -> Result<bool, SearchError> {
        Ok(self.facts.month_term_occurred)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_reports_given_facts() {
        let p = FixedBoundaries::new(true, false);
        let t = BirthInstant::new(2024, 2, 4, 12, 0).unwrap();
        assert_eq!(
            p.boundary_facts(&t).unwrap(),
            BoundaryFacts::new(true, false)
        );
    }

    #[test]
    fn boxed_provider_delegates() {
        let p: Box<dyn BoundaryProvider> = Box::new(FixedBoundaries::new(false, true));
        let t = BirthInstant::new(2024, 2, 4, 12, 0).unwrap();
        assert!(!p.has_spring_occurred(&t).unwrap());
        assert!(p.has_month_term_occurred(&t).unwrap());
    }

    #[test]
    fn governing_terms() {
        let t = BirthInstant::new(1996, 5, 13, 5, 5).unwrap();
        assert_eq!(governing_term(&t).unwrap(), SolarTerm::Ipha);
        let jan = BirthInstant::new(2000, 1, 1, 0, 0).unwrap();
        assert_eq!(governing_term(&jan).unwrap(), SolarTerm::Sohan);
    }
}
