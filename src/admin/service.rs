use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    token::AdminTokenConfig,
    types::{AdminClaims, DashboardSummary, LoginResponse},
};
use crate::{
    player::repository::PlayerRepository,
    series::repository::SeriesRepository,
    shared::AppError,
    standings::{aggregate_standings, PlayerInfo},
};

/// Password login and token checks for the admin area
pub struct AdminAuth {
    token_config: AdminTokenConfig,
    password: Option<String>,
}

impl AdminAuth {
    pub fn new(token_config: AdminTokenConfig, password: Option<String>) -> Self {
        if password.is_none() {
            warn!("No admin password configured, admin login is disabled");
        }
        Self {
            token_config,
            password,
        }
    }

    #[instrument(skip(self, password))]
    pub fn login(&self, password: &str) -> Result<LoginResponse, AppError> {
        let expected = self.password.as_deref().ok_or_else(|| {
            AppError::Unauthorized("Admin login is disabled".to_string())
        })?;

        if password != expected {
            warn!("Rejected admin login with wrong password");
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let (token, expires_at) = self.token_config.create_token()?;
        info!(%expires_at, "Admin logged in");
        Ok(LoginResponse { token, expires_at })
    }

    pub fn authorize(&self, token: &str) -> Result<AdminClaims, AppError> {
        self.token_config.validate_token(token)
    }
}

/// Builds the admin dashboard from the live roster and series log
pub struct DashboardService {
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    series_repository: Arc<dyn SeriesRepository + Send + Sync>,
}

impl DashboardService {
    pub fn new(
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        series_repository: Arc<dyn SeriesRepository + Send + Sync>,
    ) -> Self {
        Self {
            player_repository,
            series_repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<DashboardSummary, AppError> {
        let players = self.player_repository.list_players().await?;
        let series = self.series_repository.list_series(None).await?;

        let paid_count = players.iter().filter(|p| p.paid).count();
        let rounds: BTreeSet<i32> = series.iter().map(|s| s.round_number).collect();

        let roster: HashMap<String, PlayerInfo> = players
            .iter()
            .map(|p| (p.id.clone(), PlayerInfo::from(p)))
            .collect();
        let leader = aggregate_standings(&series, &roster).into_iter().next();

        Ok(DashboardSummary {
            player_count: players.len(),
            paid_count,
            unpaid_count: players.len() - paid_count,
            series_count: series.len(),
            rounds_recorded: rounds.len(),
            leader,
        })
    }
}
