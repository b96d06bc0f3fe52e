use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    aggregator::aggregate_standings,
    models::{PlayerInfo, Standing},
    StandingsError,
};
use crate::{player::repository::PlayerRepository, series::repository::SeriesRepository};

/// Reads the series log and roster, then ranks players.
///
/// Holds no state of its own: every call recomputes from storage.
pub struct StandingsService {
    series_repository: Arc<dyn SeriesRepository + Send + Sync>,
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl StandingsService {
    pub fn new(
        series_repository: Arc<dyn SeriesRepository + Send + Sync>,
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        Self {
            series_repository,
            player_repository,
        }
    }

    /// Full standings, or the standings of a single round
    #[instrument(skip(self))]
    pub async fn compute_standings(
        &self,
        round: Option<i32>,
    ) -> Result<Vec<Standing>, StandingsError> {
        if matches!(round, Some(r) if r < 1) {
            return Err(StandingsError::Validation(
                "round: must be at least 1".to_string(),
            ));
        }

        let series = self
            .series_repository
            .list_series(round)
            .await
            .map_err(|e| {
                warn!(error = %e, "Series read failed, aborting standings");
                StandingsError::SeriesUnavailable(e.to_string())
            })?;

        let roster: HashMap<String, PlayerInfo> = self
            .player_repository
            .list_players()
            .await
            .map_err(|e| {
                warn!(error = %e, "Roster read failed, aborting standings");
                StandingsError::RosterUnavailable(e.to_string())
            })?
            .iter()
            .map(|player| (player.id.clone(), PlayerInfo::from(player)))
            .collect();

        debug!(
            series_count = series.len(),
            roster_size = roster.len(),
            "Aggregating standings"
        );
        let standings = aggregate_standings(&series, &roster);

        info!(ranked_players = standings.len(), "Standings computed");
        Ok(standings)
    }

    /// The overall standing row for one player
    #[instrument(skip(self))]
    pub async fn get_player_standing(&self, player_id: &str) -> Result<Standing, StandingsError> {
        self.compute_standings(None)
            .await?
            .into_iter()
            .find(|standing| standing.player_id == player_id)
            .ok_or_else(|| StandingsError::PlayerNotRanked(player_id.to_string()))
    }
}
