//! Leaderboard assembly.
//!
//! Bridges storage and the ranking kernel: reads the records backing a
//! leaderboard kind, validates power values at the boundary, and hands
//! homogeneous entry lists to `calculate::rank`. The kernel itself never
//! validates; everything rejected here stays out of the hot path.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::calculate::{compute_peaks, rank};
use crate::models::{
    LeaderboardEntry, LeaderboardKind, PeakPowers, PlacementRecord, PlayerId, RankedEntry,
    TeamRef, UserRef, XpPlayerRef,
};
use crate::storage::{EntityType, JsonlReader, StorageConfig, StorageError};

/// Errors from board assembly.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid power value: {0}")]
    InvalidPower(f64),
}

/// A computed leaderboard, one variant per row shape.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Leaderboard {
    User(Vec<RankedEntry<UserRef>>),
    Team(Vec<RankedEntry<TeamRef>>),
    Xp(Vec<RankedEntry<XpPlayerRef>>),
}

impl Leaderboard {
    pub fn len(&self) -> usize {
        match self {
            Leaderboard::User(rows) => rows.len(),
            Leaderboard::Team(rows) => rows.len(),
            Leaderboard::Xp(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep only the first `n` rows.
    pub fn truncate(&mut self, n: usize) {
        match self {
            Leaderboard::User(rows) => rows.truncate(n),
            Leaderboard::Team(rows) => rows.truncate(n),
            Leaderboard::Xp(rows) => rows.truncate(n),
        }
    }
}

/// Compute the leaderboard for one kind.
pub fn load(kind: LeaderboardKind, storage: &StorageConfig) -> Result<Leaderboard, BoardError> {
    match kind {
        LeaderboardKind::User => {
            let entries: Vec<LeaderboardEntry<UserRef>> =
                JsonlReader::for_entity(storage, EntityType::UserEntry).read_all()?;
            validate_entry_powers(entries.iter().map(|e| e.power))?;
            debug!("Ranking {} user entries", entries.len());
            Ok(Leaderboard::User(rank(entries)))
        }
        LeaderboardKind::Team => {
            let entries: Vec<LeaderboardEntry<TeamRef>> =
                JsonlReader::for_entity(storage, EntityType::TeamEntry).read_all()?;
            validate_entry_powers(entries.iter().map(|e| e.power))?;
            debug!("Ranking {} team entries", entries.len());
            Ok(Leaderboard::Team(rank(entries)))
        }
        LeaderboardKind::XpAll | LeaderboardKind::XpMode(_) | LeaderboardKind::XpWeapon(_) => {
            let records: Vec<PlacementRecord> =
                JsonlReader::for_entity(storage, EntityType::Placement).read_all()?;
            validate_entry_powers(records.iter().map(|r| r.power))?;
            let entries = xp_entries(records, kind);
            debug!("Ranking {} XP entries for {}", entries.len(), kind);
            Ok(Leaderboard::Xp(rank(entries)))
        }
    }
}

/// Peak power per mode for one player's placement history.
pub fn player_peaks(
    storage: &StorageConfig,
    player_id: &PlayerId,
) -> Result<PeakPowers, BoardError> {
    let records = read_player_placements(storage, player_id)?;
    Ok(compute_peaks(&records))
}

/// A player's placement history, newest first.
pub fn player_placements(
    storage: &StorageConfig,
    player_id: &PlayerId,
) -> Result<Vec<PlacementRecord>, BoardError> {
    let mut records = read_player_placements(storage, player_id)?;
    records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at).then(a.id.cmp(&b.id)));
    Ok(records)
}

fn read_player_placements(
    storage: &StorageConfig,
    player_id: &PlayerId,
) -> Result<Vec<PlacementRecord>, BoardError> {
    let records = JsonlReader::<PlacementRecord>::for_entity(storage, EntityType::Placement)
        .read_where(|r| &r.player_id == player_id)?;
    validate_entry_powers(records.iter().map(|r| r.power))?;
    Ok(records)
}

/// Reject non-finite or negative powers before they reach the kernel.
fn validate_entry_powers(powers: impl Iterator<Item = f64>) -> Result<(), BoardError> {
    for power in powers {
        if !power.is_finite() || power < 0.0 {
            return Err(BoardError::InvalidPower(power));
        }
    }
    Ok(())
}

/// Reduce placement records to one entry per player: the best placement
/// in scope. Grouping goes through an ordered map and the tiebreak key is
/// the player id, so repeated runs produce identical output no matter how
/// the storage layer ordered the rows.
fn xp_entries(
    records: Vec<PlacementRecord>,
    kind: LeaderboardKind,
) -> Vec<LeaderboardEntry<XpPlayerRef>> {
    let in_scope = |r: &PlacementRecord| match kind {
        LeaderboardKind::XpAll => true,
        LeaderboardKind::XpMode(mode) => r.mode == mode,
        LeaderboardKind::XpWeapon(weapon) => r.weapon == weapon,
        LeaderboardKind::User | LeaderboardKind::Team => false,
    };

    let mut best: BTreeMap<PlayerId, PlacementRecord> = BTreeMap::new();
    for record in records.into_iter().filter(in_scope) {
        let keep_current = best.get(&record.player_id).is_some_and(|current| {
            // Equal power: keep the earlier placement, then the smaller id.
            current.power > record.power
                || (current.power == record.power
                    && (current.recorded_at, &current.id) <= (record.recorded_at, &record.id))
        });
        if !keep_current {
            best.insert(record.player_id.clone(), record);
        }
    }

    best.into_values()
        .map(|record| {
            let key = record.player_id.as_str().to_string();
            LeaderboardEntry::new(
                record.id.clone(),
                XpPlayerRef {
                    player_id: record.player_id,
                    player_name: record.player_name,
                    mode: record.mode,
                    weapon: record.weapon,
                },
                record.power,
            )
            .with_tiebreak_key(key)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, RankedMode};
    use crate::storage::JsonlWriter;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn test_storage(dir: &TempDir) -> StorageConfig {
        StorageConfig::new(dir.path().to_path_buf())
    }

    fn record(player: &str, mode: RankedMode, weapon: u32, power: f64, secs: i64) -> PlacementRecord {
        PlacementRecord::new(
            EntityId::from(player),
            player.to_string(),
            mode,
            weapon,
            power,
            Utc.timestamp_opt(secs, 0).unwrap(),
        )
    }

    fn user_entry(id: &str, name: &str, power: f64) -> LeaderboardEntry<UserRef> {
        LeaderboardEntry::new(
            EntityId::from(id),
            UserRef {
                player_id: EntityId::from(name),
                username: name.to_string(),
                discord_id: None,
            },
            power,
        )
    }

    fn write_placements(storage: &StorageConfig, records: &[PlacementRecord]) {
        JsonlWriter::for_entity(storage, EntityType::Placement)
            .write_all(records)
            .unwrap();
    }

    #[test]
    fn test_user_board_ranked() {
        let tmp = TempDir::new().unwrap();
        let storage = test_storage(&tmp);

        JsonlWriter::for_entity(&storage, EntityType::UserEntry)
            .write_all(&[
                user_entry("e1", "alice", 1100.0),
                user_entry("e2", "bob", 1900.0),
                user_entry("e3", "carol", 1500.0),
            ])
            .unwrap();

        let board = load(LeaderboardKind::User, &storage).unwrap();
        match board {
            Leaderboard::User(rows) => {
                assert_eq!(rows.len(), 3);
                assert_eq!(rows[0].entry.subject.username, "bob");
                assert_eq!(rows[0].placement_rank, 1);
                assert_eq!(rows[2].entry.subject.username, "alice");
                assert_eq!(rows[2].placement_rank, 3);
            }
            other => panic!("expected user board, got {:?}", other),
        }
    }

    #[test]
    fn test_board_empty_storage() {
        let tmp = TempDir::new().unwrap();
        let storage = test_storage(&tmp);

        let board = load(LeaderboardKind::Team, &storage).unwrap();
        assert!(board.is_empty());
    }

    #[test]
    fn test_xp_mode_board_filters_and_takes_best() {
        let tmp = TempDir::new().unwrap();
        let storage = test_storage(&tmp);

        write_placements(
            &storage,
            &[
                record("alice", RankedMode::Sz, 310, 2500.0, 1),
                record("alice", RankedMode::Sz, 310, 2800.0, 2),
                record("alice", RankedMode::Tc, 310, 2950.0, 3), // other mode
                record("bob", RankedMode::Sz, 40, 2600.0, 4),
            ],
        );

        let board = load(LeaderboardKind::XpMode(RankedMode::Sz), &storage).unwrap();
        match board {
            Leaderboard::Xp(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].entry.subject.player_name, "alice");
                assert_eq!(rows[0].entry.power, 2800.0);
                assert_eq!(rows[1].entry.subject.player_name, "bob");
            }
            other => panic!("expected XP board, got {:?}", other),
        }
    }

    #[test]
    fn test_xp_weapon_board_filters_by_weapon() {
        let tmp = TempDir::new().unwrap();
        let storage = test_storage(&tmp);

        write_placements(
            &storage,
            &[
                record("alice", RankedMode::Sz, 310, 2500.0, 1),
                record("bob", RankedMode::Rm, 40, 2700.0, 2),
            ],
        );

        let board = load(LeaderboardKind::XpWeapon(40), &storage).unwrap();
        match board {
            Leaderboard::Xp(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].entry.subject.weapon, 40);
            }
            other => panic!("expected XP board, got {:?}", other),
        }
    }

    #[test]
    fn test_xp_all_board_one_entry_per_player() {
        let tmp = TempDir::new().unwrap();
        let storage = test_storage(&tmp);

        write_placements(
            &storage,
            &[
                record("alice", RankedMode::Sz, 310, 2500.0, 1),
                record("alice", RankedMode::Cb, 310, 3000.0, 2),
                record("bob", RankedMode::Tc, 40, 2600.0, 3),
            ],
        );

        let board = load(LeaderboardKind::XpAll, &storage).unwrap();
        match board {
            Leaderboard::Xp(rows) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[0].entry.subject.player_name, "alice");
                assert_eq!(rows[0].entry.power, 3000.0);
                assert_eq!(rows[0].entry.subject.mode, RankedMode::Cb);
            }
            other => panic!("expected XP board, got {:?}", other),
        }
    }

    #[test]
    fn test_xp_board_deterministic_across_storage_order() {
        let tmp_a = TempDir::new().unwrap();
        let tmp_b = TempDir::new().unwrap();
        let storage_a = test_storage(&tmp_a);
        let storage_b = test_storage(&tmp_b);

        let records = vec![
            record("alice", RankedMode::Sz, 310, 2600.0, 1),
            record("bob", RankedMode::Sz, 40, 2600.0, 2),
            record("carol", RankedMode::Sz, 1010, 2600.0, 3),
        ];
        let mut reversed = records.clone();
        reversed.reverse();

        write_placements(&storage_a, &records);
        write_placements(&storage_b, &reversed);

        let board_a = load(LeaderboardKind::XpAll, &storage_a).unwrap();
        let board_b = load(LeaderboardKind::XpAll, &storage_b).unwrap();

        assert_eq!(
            serde_json::to_string(&board_a).unwrap(),
            serde_json::to_string(&board_b).unwrap()
        );
    }

    #[test]
    fn test_invalid_power_rejected_at_boundary() {
        let tmp = TempDir::new().unwrap();
        let storage = test_storage(&tmp);

        JsonlWriter::for_entity(&storage, EntityType::UserEntry)
            .write_all(&[user_entry("e1", "alice", -5.0)])
            .unwrap();

        let err = load(LeaderboardKind::User, &storage).unwrap_err();
        assert!(matches!(err, BoardError::InvalidPower(p) if p == -5.0));
    }

    #[test]
    fn test_player_peaks() {
        let tmp = TempDir::new().unwrap();
        let storage = test_storage(&tmp);

        write_placements(
            &storage,
            &[
                record("alice", RankedMode::Sz, 310, 2500.0, 1),
                record("alice", RankedMode::Sz, 310, 2900.0, 2),
                record("alice", RankedMode::Tc, 310, 2300.0, 3),
                record("bob", RankedMode::Sz, 40, 3100.0, 4), // someone else
            ],
        );

        let peaks = player_peaks(&storage, &EntityId::from("alice")).unwrap();
        assert_eq!(peaks.get(RankedMode::Sz), Some(2900.0));
        assert_eq!(peaks.get(RankedMode::Tc), Some(2300.0));
        assert_eq!(peaks.len(), 2);
    }

    #[test]
    fn test_player_peaks_no_history() {
        let tmp = TempDir::new().unwrap();
        let storage = test_storage(&tmp);

        let peaks = player_peaks(&storage, &EntityId::from("ghost")).unwrap();
        assert!(peaks.is_empty());
    }

    #[test]
    fn test_player_placements_newest_first() {
        let tmp = TempDir::new().unwrap();
        let storage = test_storage(&tmp);

        write_placements(
            &storage,
            &[
                record("alice", RankedMode::Sz, 310, 2500.0, 100),
                record("alice", RankedMode::Tc, 310, 2300.0, 300),
                record("alice", RankedMode::Rm, 310, 2400.0, 200),
            ],
        );

        let history = player_placements(&storage, &EntityId::from("alice")).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].mode, RankedMode::Tc);
        assert_eq!(history[1].mode, RankedMode::Rm);
        assert_eq!(history[2].mode, RankedMode::Sz);
    }

    #[test]
    fn test_board_truncate() {
        let tmp = TempDir::new().unwrap();
        let storage = test_storage(&tmp);

        JsonlWriter::for_entity(&storage, EntityType::UserEntry)
            .write_all(&[
                user_entry("e1", "alice", 1100.0),
                user_entry("e2", "bob", 1900.0),
                user_entry("e3", "carol", 1500.0),
            ])
            .unwrap();

        let mut board = load(LeaderboardKind::User, &storage).unwrap();
        board.truncate(2);
        assert_eq!(board.len(), 2);
    }
}
