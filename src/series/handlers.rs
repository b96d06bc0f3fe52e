use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::SeriesService,
    types::{RoundQuery, SeriesResponse, SubmitSeriesRequest},
};
use crate::shared::{AppError, AppState};

fn series_service(state: &AppState) -> SeriesService {
    SeriesService::new(
        Arc::clone(&state.series_repository),
        Arc::clone(&state.player_repository),
    )
}

/// HTTP handler for submitting a three-game series
///
/// POST /series
#[instrument(name = "submit_series", skip(state, request))]
pub async fn submit_series(
    State(state): State<AppState>,
    Json(request): Json<SubmitSeriesRequest>,
) -> Result<(StatusCode, Json<SeriesResponse>), AppError> {
    info!(
        player_id = %request.player_id,
        round_number = request.round_number,
        "Submitting series"
    );

    let series = series_service(&state).submit_series(request).await?;
    Ok((StatusCode::CREATED, Json(series)))
}

/// GET /series?round=N
#[instrument(name = "list_series", skip(state))]
pub async fn list_series(
    State(state): State<AppState>,
    Query(query): Query<RoundQuery>,
) -> Result<Json<Vec<SeriesResponse>>, AppError> {
    Ok(Json(series_service(&state).list_series(query.round).await?))
}

/// GET /players/:id/series
#[instrument(name = "list_player_series", skip(state))]
pub async fn list_player_series(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<SeriesResponse>>, AppError> {
    Ok(Json(
        series_service(&state)
            .list_player_series(&player_id)
            .await?,
    ))
}
