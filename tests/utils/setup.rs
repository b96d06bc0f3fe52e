use axum::Router;
use std::sync::Arc;

use bowling_tournament::{
    admin::{AdminAuth, AdminTokenConfig},
    build_router,
    player::repository::InMemoryPlayerRepository,
    series::repository::InMemorySeriesRepository,
    AppState, PlayerRepository, SeriesRepository,
};

pub const ADMIN_PASSWORD: &str = "ten-pin";

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    pub series_repository: Arc<dyn SeriesRepository + Send + Sync>,
}

pub struct TestSetupBuilder {
    player_repository: Option<Arc<dyn PlayerRepository + Send + Sync>>,
    series_repository: Option<Arc<dyn SeriesRepository + Send + Sync>>,
    admin_password: Option<String>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            player_repository: None,
            series_repository: None,
            admin_password: Some(ADMIN_PASSWORD.to_string()),
        }
    }

    pub fn with_player_repository(
        mut self,
        repo: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        self.player_repository = Some(repo);
        self
    }

    pub fn with_series_repository(
        mut self,
        repo: Arc<dyn SeriesRepository + Send + Sync>,
    ) -> Self {
        self.series_repository = Some(repo);
        self
    }

    #[allow(dead_code)]
    pub fn without_admin_password(mut self) -> Self {
        self.admin_password = None;
        self
    }

    pub fn build(self) -> TestSetup {
        let player_repository = self
            .player_repository
            .unwrap_or_else(|| Arc::new(InMemoryPlayerRepository::new()));
        let series_repository = self
            .series_repository
            .unwrap_or_else(|| Arc::new(InMemorySeriesRepository::new()));

        let admin_auth = Arc::new(AdminAuth::new(
            AdminTokenConfig::new("integration-secret".to_string(), 1),
            self.admin_password,
        ));

        let state = AppState::new(
            Arc::clone(&player_repository),
            Arc::clone(&series_repository),
            admin_auth,
        );

        TestSetup {
            app: build_router(state),
            player_repository,
            series_repository,
        }
    }
}
