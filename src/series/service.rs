use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

use super::{
    models::SeriesModel,
    repository::SeriesRepository,
    types::{SeriesResponse, SubmitSeriesRequest},
};
use crate::{player::repository::PlayerRepository, shared::AppError};

/// Service for recording and reading submitted series
pub struct SeriesService {
    repository: Arc<dyn SeriesRepository + Send + Sync>,
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl SeriesService {
    pub fn new(
        repository: Arc<dyn SeriesRepository + Send + Sync>,
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            player_repository,
        }
    }

    /// Validates scores and records the series.
    ///
    /// Several series for the same player and round are all kept; how many
    /// entries a round allows is not decided here.
    #[instrument(skip(self, request))]
    pub async fn submit_series(
        &self,
        request: SubmitSeriesRequest,
    ) -> Result<SeriesResponse, AppError> {
        request.validate()?;

        if self
            .player_repository
            .get_player(&request.player_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Player {} not found",
                request.player_id
            )));
        }

        let series = SeriesModel::new(
            request.player_id,
            request.round_number,
            [request.game_1, request.game_2, request.game_3],
        );
        self.repository.insert_series(&series).await?;

        info!(
            series_id = %series.id,
            player_id = %series.player_id,
            round_number = series.round_number,
            total_score = series.total_score(),
            "Series recorded"
        );

        Ok(series.into())
    }

    #[instrument(skip(self))]
    pub async fn list_series(&self, round: Option<i32>) -> Result<Vec<SeriesResponse>, AppError> {
        validate_round(round)?;

        let series = self.repository.list_series(round).await?;
        debug!(series_count = series.len(), "Series retrieved");

        Ok(series.into_iter().map(SeriesResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn list_player_series(
        &self,
        player_id: &str,
    ) -> Result<Vec<SeriesResponse>, AppError> {
        if self.player_repository.get_player(player_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Player {} not found", player_id)));
        }

        let series = self.repository.list_series_for_player(player_id).await?;
        Ok(series.into_iter().map(SeriesResponse::from).collect())
    }
}

/// Round filters must name a real round
pub fn validate_round(round: Option<i32>) -> Result<(), AppError> {
    match round {
        Some(r) if r < 1 => Err(AppError::Validation(
            "round: must be at least 1".to_string(),
        )),
        _ => Ok(()),
    }
}
