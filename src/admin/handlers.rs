use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    service::DashboardService,
    types::{AdminClaims, DashboardSummary, LoginRequest, LoginResponse},
};
use crate::{
    player::{models::PlayerModel, service::PlayerService, types::PaymentUpdateRequest},
    shared::{AppError, AppState},
};

/// HTTP handler for admin login
///
/// POST /admin/login
/// Returns a bearer token for the admin routes
#[instrument(name = "admin_login", skip(state, request))]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    Ok(Json(state.admin_auth.login(&request.password)?))
}

/// PATCH /admin/players/:id/payment
#[instrument(name = "update_payment", skip(state, claims, request))]
pub async fn update_payment(
    State(state): State<AppState>,
    Extension(claims): Extension<AdminClaims>,
    Path(player_id): Path<String>,
    Json(request): Json<PaymentUpdateRequest>,
) -> Result<Json<PlayerModel>, AppError> {
    info!(admin = %claims.sub, player_id = %player_id, paid = request.paid, "Updating payment status");

    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let player = service.set_payment_status(&player_id, request.paid).await?;

    Ok(Json(player))
}

/// GET /admin/dashboard
#[instrument(name = "admin_dashboard", skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardSummary>, AppError> {
    let service = DashboardService::new(
        Arc::clone(&state.player_repository),
        Arc::clone(&state.series_repository),
    );
    Ok(Json(service.summary().await?))
}
