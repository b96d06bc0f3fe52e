use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::PlayerModel;
use crate::shared::AppError;

/// Trait for player repository operations
#[async_trait]
pub trait PlayerRepository {
    /// Fails with `AppError::Conflict` when the email is already registered
    async fn create_player(&self, player: &PlayerModel) -> Result<(), AppError>;
    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError>;
    /// All players ordered by registration time, then id
    async fn list_players(&self) -> Result<Vec<PlayerModel>, AppError>;
    /// Returns the updated player, or `None` when no such player exists
    async fn set_payment_status(
        &self,
        player_id: &str,
        paid: bool,
    ) -> Result<Option<PlayerModel>, AppError>;
}

/// In-memory implementation of PlayerRepository for development and testing
pub struct InMemoryPlayerRepository {
    players: RwLock<HashMap<String, PlayerModel>>,
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPlayerRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an in-memory repository with pre-registered players
    pub fn with_players(players: Vec<PlayerModel>) -> Self {
        let player_map = players
            .into_iter()
            .map(|player| (player.id.clone(), player))
            .collect();

        Self {
            players: RwLock::new(player_map),
        }
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    #[instrument(skip(self, player))]
    async fn create_player(&self, player: &PlayerModel) -> Result<(), AppError> {
        debug!(player_id = %player.id, email = %player.email, "Creating player in memory");

        let mut players = self.players.write().await;
        if players.contains_key(&player.id) {
            warn!(player_id = %player.id, "Player already exists in memory");
            return Err(AppError::Conflict("Player already exists".to_string()));
        }
        if players.values().any(|p| p.email == player.email) {
            warn!(email = %player.email, "Email already registered in memory");
            return Err(AppError::Conflict("Email already registered".to_string()));
        }
        players.insert(player.id.clone(), player.clone());

        debug!(player_id = %player.id, "Player created successfully in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError> {
        let players = self.players.read().await;
        let player = players.get(player_id).cloned();

        match &player {
            Some(p) => debug!(player_id = %player_id, name = %p.name, "Player found in memory"),
            None => debug!(player_id = %player_id, "Player not found in memory"),
        }

        Ok(player)
    }

    #[instrument(skip(self))]
    async fn list_players(&self) -> Result<Vec<PlayerModel>, AppError> {
        let players = self.players.read().await;
        let mut player_list: Vec<PlayerModel> = players.values().cloned().collect();
        player_list.sort_by(|a, b| {
            a.registered_at
                .cmp(&b.registered_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        debug!(player_count = player_list.len(), "Players listed from memory");
        Ok(player_list)
    }

    #[instrument(skip(self))]
    async fn set_payment_status(
        &self,
        player_id: &str,
        paid: bool,
    ) -> Result<Option<PlayerModel>, AppError> {
        let mut players = self.players.write().await;
        let updated = players.get_mut(player_id).map(|player| {
            player.paid = paid;
            player.clone()
        });

        if updated.is_none() {
            warn!(player_id = %player_id, "Player not found for payment update in memory");
        }

        Ok(updated)
    }
}

/// PostgreSQL implementation of player repository
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(
        error,
        sqlx::Error::Database(e) if e.code().as_deref() == Some("23505")
    )
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    #[instrument(skip(self, player))]
    async fn create_player(&self, player: &PlayerModel) -> Result<(), AppError> {
        debug!(player_id = %player.id, email = %player.email, "Creating player in database");

        sqlx::query(
            "INSERT INTO players (id, name, email, phone, paid, registered_at) VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&player.id)
        .bind(&player.name)
        .bind(&player.email)
        .bind(&player.phone)
        .bind(player.paid)
        .bind(player.registered_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                warn!(email = %player.email, "Email already registered");
                AppError::Conflict("Email already registered".to_string())
            } else {
                warn!(error = %e, "Failed to create player in database");
                AppError::DatabaseError(e.to_string())
            }
        })?;

        debug!(player_id = %player.id, "Player created successfully in database");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError> {
        sqlx::query_as::<_, PlayerModel>(
            "SELECT id, name, email, phone, paid, registered_at FROM players WHERE id = $1",
        )
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, player_id = %player_id, "Failed to fetch player from database");
            AppError::DatabaseError(e.to_string())
        })
    }

    #[instrument(skip(self))]
    async fn list_players(&self) -> Result<Vec<PlayerModel>, AppError> {
        let players = sqlx::query_as::<_, PlayerModel>(
            "SELECT id, name, email, phone, paid, registered_at FROM players ORDER BY registered_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to list players from database");
            AppError::DatabaseError(e.to_string())
        })?;

        debug!(player_count = players.len(), "Players listed from database");
        Ok(players)
    }

    #[instrument(skip(self))]
    async fn set_payment_status(
        &self,
        player_id: &str,
        paid: bool,
    ) -> Result<Option<PlayerModel>, AppError> {
        sqlx::query_as::<_, PlayerModel>(
            "UPDATE players SET paid = $2 WHERE id = $1 RETURNING id, name, email, phone, paid, registered_at",
        )
        .bind(player_id)
        .bind(paid)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, player_id = %player_id, "Failed to update payment status");
            AppError::DatabaseError(e.to_string())
        })
    }
}
