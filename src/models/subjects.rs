//! Subject payloads carried through the leaderboards.
//!
//! The ranking kernel never looks inside these; they exist so the display
//! layer can render a row without a second lookup.

use serde::{Deserialize, Serialize};

use super::{PlayerId, RankedMode, TeamId, WeaponId};

/// Player reference for the user skill-point board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub player_id: PlayerId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_id: Option<String>,
}

/// Team reference for the team skill-point board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    pub team_id: TeamId,
    pub team_name: String,
    /// Usernames of the roster, in roster order.
    pub members: Vec<String>,
}

/// Player reference for the X power boards, carrying the placement that
/// produced the entry's power.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XpPlayerRef {
    pub player_id: PlayerId,
    pub player_name: String,
    pub mode: RankedMode,
    pub weapon: WeaponId,
}
