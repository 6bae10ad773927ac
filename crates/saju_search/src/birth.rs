//! Boundary-aware entry points: resolve facts, then compute.

use tracing::debug;

use saju_base::{CalculatorConfig, Saju, SajuChart, calculate_saju_local};
use saju_time::BirthInstant;

use crate::error::SearchError;
use crate::provider::BoundaryProvider;

/// Four pillars of `instant`, with boundary facts from `provider`.
///
/// Provider failures propagate unchanged; no fallback facts are used.
pub fn saju_for_birth(
    provider: &dyn BoundaryProvider,
    instant: &BirthInstant,
    config: &CalculatorConfig,
) -> Result<Saju, SearchError> {
    saju_for_local_birth(provider, instant, 0, config)
}

/// Four pillars of a zone-time `instant` with a local-time correction.
///
/// Facts are resolved against `instant`, in the same zone as the
/// provider's term instants. Only the day and hour pillars see the
/// `local_offset_minutes` shift.
pub fn saju_for_local_birth(
    provider: &dyn BoundaryProvider,
    instant: &BirthInstant,
    local_offset_minutes: i32,
    config: &CalculatorConfig,
) -> Result<Saju, SearchError> {
    let facts = provider.boundary_facts(instant)?;
    debug!(
        %instant,
        spring = facts.spring_occurred,
        month_term = facts.month_term_occurred,
        "boundary facts resolved"
    );
    Ok(calculate_saju_local(instant, facts, local_offset_minutes, config)?)
}

/// Full presentation chart of `instant`.
pub fn chart_for_birth(
    provider: &dyn BoundaryProvider,
    instant: &BirthInstant,
    config: &CalculatorConfig,
) -> Result<SajuChart, SearchError> {
    chart_for_local_birth(provider, instant, 0, config)
}

/// Chart counterpart of [`saju_for_local_birth`].
pub fn chart_for_local_birth(
    provider: &dyn BoundaryProvider,
    instant: &BirthInstant,
    local_offset_minutes: i32,
    config: &CalculatorConfig,
) -> Result<SajuChart, SearchError> {
    saju_for_local_birth(provider, instant, local_offset_minutes, config).map(SajuChart::from_saju)
}
