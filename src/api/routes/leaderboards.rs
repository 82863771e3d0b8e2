use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::boards::{self, Leaderboard};
use crate::models::LeaderboardKind;

#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    #[serde(rename = "type")]
    pub kind: LeaderboardKind,
    pub total_entries: usize,
    pub entries: Leaderboard,
}

pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    // Absent type falls back to the default board; an unrecognised tag is
    // a client error, not a silent fallback.
    let kind = match params.kind.as_deref() {
        None => LeaderboardKind::default(),
        Some(tag) => tag
            .parse::<LeaderboardKind>()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?,
    };

    let mut board = boards::load(kind, &state.storage)?;
    let total_entries = board.len();
    if let Some(limit) = params.limit {
        board.truncate(limit);
    }

    Ok(Json(LeaderboardResponse {
        kind,
        total_entries,
        entries: board,
    }))
}
