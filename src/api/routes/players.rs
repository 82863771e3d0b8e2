use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::boards;
use crate::models::{PeakPowers, PlacementRecord, PlayerId};

#[derive(Debug, Serialize)]
pub struct PeaksResponse {
    pub player_id: PlayerId,
    pub peaks: PeakPowers,
}

pub async fn peaks(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PeaksResponse>, ApiError> {
    let player_id = PlayerId::from(id);
    let peaks = boards::player_peaks(&state.storage, &player_id)?;

    Ok(Json(PeaksResponse { player_id, peaks }))
}

#[derive(Debug, Serialize)]
pub struct PlacementsResponse {
    pub player_id: PlayerId,
    pub total_placements: usize,
    pub placements: Vec<PlacementRecord>,
}

pub async fn placements(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PlacementsResponse>, ApiError> {
    let player_id = PlayerId::from(id);
    let placements = boards::player_placements(&state.storage, &player_id)?;

    if placements.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No placements for player: {}",
            player_id
        )));
    }

    Ok(Json(PlacementsResponse {
        player_id,
        total_placements: placements.len(),
        placements,
    }))
}
