use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::Standing, service::StandingsService};
use crate::{
    series::types::RoundQuery,
    shared::{AppError, AppState},
};

fn standings_service(state: &AppState) -> StandingsService {
    StandingsService::new(
        Arc::clone(&state.series_repository),
        Arc::clone(&state.player_repository),
    )
}

/// HTTP handler for the ranked standings table
///
/// GET /standings?round=N
#[instrument(name = "get_standings", skip(state))]
pub async fn get_standings(
    State(state): State<AppState>,
    Query(query): Query<RoundQuery>,
) -> Result<Json<Vec<Standing>>, AppError> {
    let standings = standings_service(&state)
        .compute_standings(query.round)
        .await?;

    info!(ranked_players = standings.len(), round = ?query.round, "Standings served");
    Ok(Json(standings))
}

/// GET /standings/:player_id
#[instrument(name = "get_player_standing", skip(state))]
pub async fn get_player_standing(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<Standing>, AppError> {
    Ok(Json(
        standings_service(&state)
            .get_player_standing(&player_id)
            .await?,
    ))
}
