use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::models::SeriesModel;

/// Request payload for submitting a series
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitSeriesRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub player_id: String,

    #[validate(range(min = 1, message = "must be at least 1"))]
    pub round_number: i32,

    #[validate(range(min = 0, max = 300, message = "must be between 0 and 300"))]
    pub game_1: i32,

    #[validate(range(min = 0, max = 300, message = "must be between 0 and 300"))]
    pub game_2: i32,

    #[validate(range(min = 0, max = 300, message = "must be between 0 and 300"))]
    pub game_3: i32,
}

/// Optional round filter shared by the series and standings listings
#[derive(Debug, Default, Deserialize)]
pub struct RoundQuery {
    pub round: Option<i32>,
}

/// Series as returned by the API, with the derived total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResponse {
    pub id: String,
    pub player_id: String,
    pub round_number: i32,
    pub game_1: i32,
    pub game_2: i32,
    pub game_3: i32,
    pub total_score: i32,
    pub submitted_at: DateTime<Utc>,
}

impl From<SeriesModel> for SeriesResponse {
    fn from(series: SeriesModel) -> Self {
        Self {
            total_score: series.total_score(),
            id: series.id,
            player_id: series.player_id,
            round_number: series.round_number,
            game_1: series.game_1,
            game_2: series.game_2,
            game_3: series.game_3,
            submitted_at: series.submitted_at,
        }
    }
}
