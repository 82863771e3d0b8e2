//! Ranked game modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four ranked modes. Closed set; adding a mode is a source change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RankedMode {
    #[serde(rename = "SZ")]
    Sz,
    #[serde(rename = "TC")]
    Tc,
    #[serde(rename = "RM")]
    Rm,
    #[serde(rename = "CB")]
    Cb,
}

/// All ranked modes in display order.
pub const RANKED_MODES: [RankedMode; 4] = [
    RankedMode::Sz,
    RankedMode::Tc,
    RankedMode::Rm,
    RankedMode::Cb,
];

impl RankedMode {
    /// Short wire tag (e.g. "SZ").
    pub fn as_str(&self) -> &'static str {
        match self {
            RankedMode::Sz => "SZ",
            RankedMode::Tc => "TC",
            RankedMode::Rm => "RM",
            RankedMode::Cb => "CB",
        }
    }
}

impl fmt::Display for RankedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for unrecognised mode tags.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown ranked mode: {0}")]
pub struct ParseModeError(pub String);

impl FromStr for RankedMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SZ" => Ok(RankedMode::Sz),
            "TC" => Ok(RankedMode::Tc),
            "RM" => Ok(RankedMode::Rm),
            "CB" => Ok(RankedMode::Cb),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}
