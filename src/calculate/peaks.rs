//! Peak power aggregation.

use crate::models::{PeakPowers, PlacementRecord};

/// Reduce a player's placement history to the best power per ranked mode.
///
/// Single pass, O(records) time, O(modes) space. Empty input yields an
/// empty result. All records are assumed to belong to one player and to
/// carry finite, non-negative power; the caller enforces both before
/// calling (documented precondition, not re-checked here).
pub fn compute_peaks(records: &[PlacementRecord]) -> PeakPowers {
    let mut peaks = PeakPowers::new();
    for record in records {
        peaks.observe(record.mode, record.power);
    }
    peaks
}
