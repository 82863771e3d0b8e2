//! Filesystem storage.
//!
//! JSONL files under a flat data directory are the source of truth:
//! placement history plus the pre-scored user and team entries supplied
//! by the upstream import.

use std::path::PathBuf;
use thiserror::Error;

mod jsonl;

pub use jsonl::{JsonlIterator, JsonlReader, JsonlWriter};

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Entity types for JSONL storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Placement,
    UserEntry,
    TeamEntry,
}

impl EntityType {
    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Placement => "placements.jsonl",
            EntityType::UserEntry => "user_entries.jsonl",
            EntityType::TeamEntry => "team_entries.jsonl",
        }
    }
}

impl std::str::FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placements" => Ok(EntityType::Placement),
            "user-entries" => Ok(EntityType::UserEntry),
            "team-entries" => Ok(EntityType::TeamEntry),
            other => Err(format!(
                "unknown entity: {} (expected placements, user-entries, team-entries)",
                other
            )),
        }
    }
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path to an entity's JSONL file.
    pub fn entity_path(&self, entity: EntityType) -> PathBuf {
        self.data_dir.join(entity.filename())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_filename() {
        assert_eq!(EntityType::Placement.filename(), "placements.jsonl");
        assert_eq!(EntityType::UserEntry.filename(), "user_entries.jsonl");
        assert_eq!(EntityType::TeamEntry.filename(), "team_entries.jsonl");
    }

    #[test]
    fn test_entity_type_parse() {
        assert_eq!(
            "placements".parse::<EntityType>().unwrap(),
            EntityType::Placement
        );
        assert!("armies".parse::<EntityType>().is_err());
    }

    #[test]
    fn test_storage_config_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));
        assert_eq!(
            config.entity_path(EntityType::Placement),
            PathBuf::from("/data/placements.jsonl")
        );
    }

    #[test]
    fn test_storage_config_default() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./data"));
    }
}
