pub mod aggregator;
pub mod models;
pub mod service;

mod errors;
mod handlers;

pub use aggregator::aggregate_standings;
pub use errors::StandingsError;
pub use handlers::{get_player_standing, get_standings};
pub use models::{PlayerInfo, Standing, UNKNOWN_PLAYER_NAME};
pub use service::StandingsService;
