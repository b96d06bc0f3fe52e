use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{admin, player, series, shared::AppState, standings};

/// Builds the full HTTP API over the given state
pub fn build_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin/players/:id/payment", patch(admin::update_payment))
        .route("/admin/dashboard", get(admin::dashboard))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::admin_auth,
        ));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/players",
            post(player::register_player).get(player::list_players),
        )
        .route("/players/:id", get(player::get_player))
        .route("/players/:id/series", get(series::list_player_series))
        .route("/series", post(series::submit_series).get(series::list_series))
        .route("/standings", get(standings::get_standings))
        .route("/standings/:player_id", get(standings::get_player_standing))
        .route("/admin/login", post(admin::login))
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
