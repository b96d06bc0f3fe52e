use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Highest possible single-game score in ten-pin bowling
pub const MAX_GAME_SCORE: i32 = 300;
pub const MIN_GAME_SCORE: i32 = 0;
pub const GAMES_PER_SERIES: u32 = 3;

/// One submitted entry of three games for one player in one round.
///
/// Series are append-only: once stored they are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesModel {
    pub id: String,
    pub player_id: String,
    pub round_number: i32,
    pub game_1: i32,
    pub game_2: i32,
    pub game_3: i32,
    pub submitted_at: DateTime<Utc>,
}

impl SeriesModel {
    /// Creates a new series with a generated ID, stamped now
    pub fn new(player_id: String, round_number: i32, games: [i32; 3]) -> Self {
        let [game_1, game_2, game_3] = games;
        Self {
            id: Uuid::new_v4().to_string(),
            player_id,
            round_number,
            game_1,
            game_2,
            game_3,
            submitted_at: Utc::now(),
        }
    }

    pub fn games(&self) -> [i32; 3] {
        [self.game_1, self.game_2, self.game_3]
    }

    /// Pinfall across the three games, 0..=900
    pub fn total_score(&self) -> i32 {
        self.games().iter().sum()
    }

    pub fn best_game(&self) -> i32 {
        self.games().into_iter().max().unwrap_or_default()
    }

    /// True when every game is in 0..=300 and the round is positive
    pub fn is_within_limits(&self) -> bool {
        self.round_number >= 1
            && self
                .games()
                .iter()
                .all(|game| (MIN_GAME_SCORE..=MAX_GAME_SCORE).contains(game))
    }
}
