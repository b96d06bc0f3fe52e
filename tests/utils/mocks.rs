use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bowling_tournament::{
    player::repository::InMemoryPlayerRepository, AppError, PlayerModel, PlayerRepository,
    SeriesModel, SeriesRepository,
};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Player repository whose roster reads fail, while single-player lookups
/// and writes still go through to an in-memory store
pub struct FailingRosterRepository {
    inner: InMemoryPlayerRepository,
    list_calls: Arc<AtomicUsize>,
}

impl FailingRosterRepository {
    pub fn new() -> Self {
        Self {
            inner: InMemoryPlayerRepository::new(),
            list_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlayerRepository for FailingRosterRepository {
    async fn create_player(&self, player: &PlayerModel) -> Result<(), AppError> {
        self.inner.create_player(player).await
    }

    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError> {
        self.inner.get_player(player_id).await
    }

    async fn list_players(&self) -> Result<Vec<PlayerModel>, AppError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::DatabaseError("roster table unreachable".to_string()))
    }

    async fn set_payment_status(
        &self,
        player_id: &str,
        paid: bool,
    ) -> Result<Option<PlayerModel>, AppError> {
        self.inner.set_payment_status(player_id, paid).await
    }
}

/// Series log that cannot be read
pub struct UnavailableSeriesRepository;

#[async_trait]
impl SeriesRepository for UnavailableSeriesRepository {
    async fn insert_series(&self, _series: &SeriesModel) -> Result<(), AppError> {
        Err(AppError::DatabaseError("series table unreachable".to_string()))
    }

    async fn list_series(&self, _round: Option<i32>) -> Result<Vec<SeriesModel>, AppError> {
        Err(AppError::DatabaseError("series table unreachable".to_string()))
    }

    async fn list_series_for_player(
        &self,
        _player_id: &str,
    ) -> Result<Vec<SeriesModel>, AppError> {
        Err(AppError::DatabaseError("series table unreachable".to_string()))
    }
}
