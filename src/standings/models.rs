use serde::{Deserialize, Serialize};

use crate::player::models::PlayerModel;

/// Name shown for series whose player can no longer be resolved
pub const UNKNOWN_PLAYER_NAME: &str = "Unknown player";

/// Display details for a player, keyed by player id in the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInfo {
    pub name: String,
    pub email: String,
}

impl From<&PlayerModel> for PlayerInfo {
    fn from(player: &PlayerModel) -> Self {
        Self {
            name: player.name.clone(),
            email: player.email.clone(),
        }
    }
}

/// One ranked row per player, derived from all of that player's series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub position: u32,
    pub player_id: String,
    pub player_name: String,
    pub player_email: String,
    pub total_score: i64,
    pub games_played: u32,
    pub series_count: u32,
    pub average_score: f64,
    pub best_game: i32,
    pub best_series: i32,
}
