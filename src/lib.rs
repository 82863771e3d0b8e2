//! # Ladder Tracker
//!
//! A local competitive ladder tracker serving ranked leaderboards and
//! per-player peak power stats.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (placements, entries, modes, etc.)
//! - **calculate**: The ranking and peak aggregation kernel (pure functions)
//! - **boards**: Leaderboard assembly and boundary validation
//! - **storage**: Filesystem JSONL operations
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod boards;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
