use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::PlayerModel, service::PlayerService, types::RegisterPlayerRequest};
use crate::shared::{AppError, AppState};

/// HTTP handler for registering a player
///
/// POST /players
#[instrument(name = "register_player", skip(state, request))]
pub async fn register_player(
    State(state): State<AppState>,
    Json(request): Json<RegisterPlayerRequest>,
) -> Result<(StatusCode, Json<PlayerModel>), AppError> {
    info!(email = %request.email, "Registering player");

    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let player = service.register_player(request).await?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /players
#[instrument(name = "list_players", skip(state))]
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlayerModel>>, AppError> {
    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let players = service.list_players().await?;

    info!(player_count = players.len(), "Players listed");
    Ok(Json(players))
}

/// GET /players/:id
#[instrument(name = "get_player", skip(state))]
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerModel>, AppError> {
    let service = PlayerService::new(Arc::clone(&state.player_repository));
    Ok(Json(service.get_player(&player_id).await?))
}
