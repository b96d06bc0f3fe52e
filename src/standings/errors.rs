use thiserror::Error;

use crate::shared::AppError;

#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("Could not read recorded series: {0}")]
    SeriesUnavailable(String),

    #[error("Could not read player roster: {0}")]
    RosterUnavailable(String),

    #[error("Player {0} has no recorded series")]
    PlayerNotRanked(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<StandingsError> for AppError {
    fn from(error: StandingsError) -> Self {
        match error {
            StandingsError::SeriesUnavailable(_) | StandingsError::RosterUnavailable(_) => {
                AppError::DatabaseError(error.to_string())
            }
            StandingsError::PlayerNotRanked(_) => AppError::NotFound(error.to_string()),
            StandingsError::Validation(msg) => AppError::Validation(msg),
        }
    }
}
