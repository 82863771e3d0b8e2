//! Peak power result model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::RankedMode;

/// Maximum power observed per ranked mode for one player.
///
/// Modes without any placement are absent, not present with zero.
/// Immutable value data once computed; the ordered map keeps serialized
/// output identical across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeakPowers(BTreeMap<RankedMode, f64>);

impl PeakPowers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one observation in, keeping the maximum per mode.
    pub fn observe(&mut self, mode: RankedMode, power: f64) {
        self.0
            .entry(mode)
            .and_modify(|best| {
                if power > *best {
                    *best = power;
                }
            })
            .or_insert(power);
    }

    /// Peak for a mode, if any placement was observed.
    pub fn get(&self, mode: RankedMode) -> Option<f64> {
        self.0.get(&mode).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RankedMode, f64)> + '_ {
        self.0.iter().map(|(mode, power)| (*mode, *power))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
