use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::SeriesModel;
use crate::shared::AppError;

/// Trait for the append-only series log
#[async_trait]
pub trait SeriesRepository {
    async fn insert_series(&self, series: &SeriesModel) -> Result<(), AppError>;
    /// All series in submission order, optionally restricted to one round
    async fn list_series(&self, round: Option<i32>) -> Result<Vec<SeriesModel>, AppError>;
    async fn list_series_for_player(&self, player_id: &str)
        -> Result<Vec<SeriesModel>, AppError>;
}

/// In-memory implementation of SeriesRepository for development and testing
#[derive(Default)]
pub struct InMemorySeriesRepository {
    series: RwLock<Vec<SeriesModel>>,
}

impl InMemorySeriesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory log with pre-recorded series
    pub fn with_series(series: Vec<SeriesModel>) -> Self {
        Self {
            series: RwLock::new(series),
        }
    }
}

#[async_trait]
impl SeriesRepository for InMemorySeriesRepository {
    #[instrument(skip(self, series))]
    async fn insert_series(&self, series: &SeriesModel) -> Result<(), AppError> {
        debug!(
            series_id = %series.id,
            player_id = %series.player_id,
            round_number = series.round_number,
            "Appending series in memory"
        );

        let mut log = self.series.write().await;
        if log.iter().any(|s| s.id == series.id) {
            warn!(series_id = %series.id, "Series already exists in memory");
            return Err(AppError::Conflict("Series already exists".to_string()));
        }
        log.push(series.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_series(&self, round: Option<i32>) -> Result<Vec<SeriesModel>, AppError> {
        let log = self.series.read().await;
        let series: Vec<SeriesModel> = log
            .iter()
            .filter(|s| round.map_or(true, |r| s.round_number == r))
            .cloned()
            .collect();

        debug!(series_count = series.len(), "Series listed from memory");
        Ok(series)
    }

    #[instrument(skip(self))]
    async fn list_series_for_player(
        &self,
        player_id: &str,
    ) -> Result<Vec<SeriesModel>, AppError> {
        let log = self.series.read().await;
        Ok(log
            .iter()
            .filter(|s| s.player_id == player_id)
            .cloned()
            .collect())
    }
}

/// Raw row shape of the series table
#[derive(Debug, FromRow)]
struct SeriesRow {
    id: String,
    player_id: String,
    round_number: i32,
    game_1: i32,
    game_2: i32,
    game_3: i32,
    submitted_at: DateTime<Utc>,
}

impl TryFrom<SeriesRow> for SeriesModel {
    type Error = AppError;

    fn try_from(row: SeriesRow) -> Result<Self, Self::Error> {
        let series = SeriesModel {
            id: row.id,
            player_id: row.player_id,
            round_number: row.round_number,
            game_1: row.game_1,
            game_2: row.game_2,
            game_3: row.game_3,
            submitted_at: row.submitted_at,
        };

        if !series.is_within_limits() {
            warn!(series_id = %series.id, "Stored series is outside score limits");
            return Err(AppError::DatabaseError(format!(
                "Series {} has out-of-range values",
                series.id
            )));
        }

        Ok(series)
    }
}

fn into_models(rows: Vec<SeriesRow>) -> Result<Vec<SeriesModel>, AppError> {
    rows.into_iter().map(SeriesModel::try_from).collect()
}

/// PostgreSQL implementation of the series log
pub struct PostgresSeriesRepository {
    pool: PgPool,
}

impl PostgresSeriesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeriesRepository for PostgresSeriesRepository {
    #[instrument(skip(self, series))]
    async fn insert_series(&self, series: &SeriesModel) -> Result<(), AppError> {
        debug!(series_id = %series.id, player_id = %series.player_id, "Inserting series in database");

        sqlx::query(
            "INSERT INTO series (id, player_id, round_number, game_1, game_2, game_3, submitted_at) VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&series.id)
        .bind(&series.player_id)
        .bind(series.round_number)
        .bind(series.game_1)
        .bind(series.game_2)
        .bind(series.game_3)
        .bind(series.submitted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to insert series in database");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_series(&self, round: Option<i32>) -> Result<Vec<SeriesModel>, AppError> {
        let rows = sqlx::query_as::<_, SeriesRow>(
            "SELECT id, player_id, round_number, game_1, game_2, game_3, submitted_at FROM series \
             WHERE ($1::INTEGER IS NULL OR round_number = $1) ORDER BY submitted_at, id",
        )
        .bind(round)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to list series from database");
            AppError::DatabaseError(e.to_string())
        })?;

        debug!(series_count = rows.len(), "Series listed from database");
        into_models(rows)
    }

    #[instrument(skip(self))]
    async fn list_series_for_player(
        &self,
        player_id: &str,
    ) -> Result<Vec<SeriesModel>, AppError> {
        let rows = sqlx::query_as::<_, SeriesRow>(
            "SELECT id, player_id, round_number, game_1, game_2, game_3, submitted_at FROM series \
             WHERE player_id = $1 ORDER BY submitted_at, id",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, player_id = %player_id, "Failed to list player series from database");
            AppError::DatabaseError(e.to_string())
        })?;

        into_models(rows)
    }
}
