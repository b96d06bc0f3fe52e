use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use super::{models::PlayerModel, repository::PlayerRepository, types::RegisterPlayerRequest};
use crate::shared::AppError;

/// Service for player registration and lookups
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn PlayerRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new player
    #[instrument(skip(self, request))]
    pub async fn register_player(
        &self,
        request: RegisterPlayerRequest,
    ) -> Result<PlayerModel, AppError> {
        let request = request.normalized();
        request.validate()?;

        let player = PlayerModel::new(request.name, request.email, request.phone);
        self.repository.create_player(&player).await?;

        info!(player_id = %player.id, name = %player.name, "Player registered");
        Ok(player)
    }

    #[instrument(skip(self))]
    pub async fn get_player(&self, player_id: &str) -> Result<PlayerModel, AppError> {
        self.repository
            .get_player(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {} not found", player_id)))
    }

    #[instrument(skip(self))]
    pub async fn list_players(&self) -> Result<Vec<PlayerModel>, AppError> {
        self.repository.list_players().await
    }

    /// Marks the entry fee as paid or unpaid
    #[instrument(skip(self))]
    pub async fn set_payment_status(
        &self,
        player_id: &str,
        paid: bool,
    ) -> Result<PlayerModel, AppError> {
        let player = self
            .repository
            .set_payment_status(player_id, paid)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {} not found", player_id)))?;

        info!(player_id = %player_id, paid, "Payment status updated");
        Ok(player)
    }
}
