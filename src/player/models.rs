use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for players table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PlayerModel {
    pub id: String,            // UUID v4 as string
    pub name: String,
    pub email: String,         // Stored lowercased, unique
    pub phone: Option<String>,
    pub paid: bool,            // Entry fee received
    pub registered_at: DateTime<Utc>,
}

impl PlayerModel {
    /// Creates a new unpaid player with a generated ID
    pub fn new(name: String, email: String, phone: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email: normalize_email(&email),
            phone,
            paid: false,
            registered_at: Utc::now(),
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
