//! Leaderboard kinds.
//!
//! The site exposes one leaderboard page with a `type` query parameter
//! selecting which board to show. The tag set is closed, so the dispatch
//! is an enum rather than string comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::RankedMode;

/// Numeric weapon identifier as used by the game data.
pub type WeaponId = u32;

/// Which leaderboard to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaderboardKind {
    /// Players ranked by skill points.
    User,
    /// Teams ranked by skill points.
    Team,
    /// Players ranked by best X power across all modes.
    XpAll,
    /// Players ranked by best X power within one mode.
    XpMode(RankedMode),
    /// Players ranked by best X power with one weapon.
    XpWeapon(WeaponId),
}

impl Default for LeaderboardKind {
    fn default() -> Self {
        LeaderboardKind::User
    }
}

impl fmt::Display for LeaderboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeaderboardKind::User => write!(f, "USER"),
            LeaderboardKind::Team => write!(f, "TEAM"),
            LeaderboardKind::XpAll => write!(f, "XP-ALL"),
            LeaderboardKind::XpMode(mode) => write!(f, "XP-MODE-{}", mode),
            LeaderboardKind::XpWeapon(weapon) => write!(f, "XP-WEAPON-{}", weapon),
        }
    }
}

/// Error for unrecognised leaderboard tags.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown leaderboard type: {0}")]
pub struct ParseKindError(pub String);

impl FromStr for LeaderboardKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => return Ok(LeaderboardKind::User),
            "TEAM" => return Ok(LeaderboardKind::Team),
            "XP-ALL" => return Ok(LeaderboardKind::XpAll),
            _ => {}
        }
        if let Some(tag) = s.strip_prefix("XP-MODE-") {
            let mode = tag
                .parse::<RankedMode>()
                .map_err(|_| ParseKindError(s.to_string()))?;
            return Ok(LeaderboardKind::XpMode(mode));
        }
        if let Some(tag) = s.strip_prefix("XP-WEAPON-") {
            let weapon = tag
                .parse::<WeaponId>()
                .map_err(|_| ParseKindError(s.to_string()))?;
            return Ok(LeaderboardKind::XpWeapon(weapon));
        }
        Err(ParseKindError(s.to_string()))
    }
}

impl Serialize for LeaderboardKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LeaderboardKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
