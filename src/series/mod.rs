// Public API - what other modules can use
pub use handlers::{list_player_series, list_series, submit_series};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
