// Public API - what other modules can use
pub use handlers::{get_player, list_players, register_player};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
