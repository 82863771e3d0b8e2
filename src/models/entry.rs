//! Leaderboard entry models.

use serde::{Deserialize, Serialize};

use super::EntryId;

/// One candidate row prior to ranking.
///
/// The subject payload is opaque to the ranking kernel: it is carried
/// through unchanged and never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry<T> {
    /// Unique within one leaderboard computation
    pub entry_id: EntryId,

    /// The ranked player, team, or weapon
    #[serde(flatten)]
    pub subject: T,

    /// Score used for ordering (non-negative, caller-validated)
    pub power: f64,

    /// Secondary key, compared ascending when both sides carry one.
    /// Absent keys fall back to input-order stability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiebreak_key: Option<String>,
}

impl<T> LeaderboardEntry<T> {
    pub fn new(entry_id: EntryId, subject: T, power: f64) -> Self {
        Self {
            entry_id,
            subject,
            power,
            tiebreak_key: None,
        }
    }

    /// Builder method to set the tiebreak key.
    pub fn with_tiebreak_key(mut self, key: String) -> Self {
        self.tiebreak_key = Some(key);
        self
    }
}

/// A leaderboard entry with its position assigned.
///
/// Uses competition ranking: tied entries share a rank and the next
/// distinct entry takes its 1-based position, so ranks can skip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry<T> {
    /// 1-based position after ordering and tie resolution
    pub placement_rank: u32,

    #[serde(flatten)]
    pub entry: LeaderboardEntry<T>,
}
