//! Top-500 placement record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, PlacementId, PlayerId, RankedMode, WeaponId};

/// One historical top-500 placement for a player.
///
/// The timestamp orders the audit history; ranking and peak aggregation
/// look only at `power`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Unique identifier (derived from player_id + mode + timestamp)
    pub id: PlacementId,

    /// Player this placement belongs to
    pub player_id: PlayerId,

    /// Display name at the time of the placement
    pub player_name: String,

    /// Ranked mode the placement was achieved in
    pub mode: RankedMode,

    /// Weapon the placement was achieved with
    pub weapon: WeaponId,

    /// X power for this placement
    pub power: f64,

    /// When the placement was recorded
    pub recorded_at: DateTime<Utc>,
}

impl PlacementRecord {
    /// Create a new record with an auto-generated ID.
    pub fn new(
        player_id: PlayerId,
        player_name: String,
        mode: RankedMode,
        weapon: WeaponId,
        power: f64,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        let id = EntityId::generate(&[
            player_id.as_str(),
            mode.as_str(),
            &recorded_at.timestamp().to_string(),
        ]);

        Self {
            id,
            player_id,
            player_name,
            mode,
            weapon,
            power,
            recorded_at,
        }
    }
}
