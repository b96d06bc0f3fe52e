// Library crate for the bowling tournament server
// This file exposes the public API for integration tests

pub mod admin;
pub mod config;
pub mod player;
pub mod router;
pub mod series;
pub mod shared;
pub mod standings;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use player::{models::PlayerModel, repository::PlayerRepository};
pub use router::build_router;
pub use series::{models::SeriesModel, repository::SeriesRepository};
pub use shared::{AppError, AppState};
pub use standings::{aggregate_standings, Standing, StandingsService};
