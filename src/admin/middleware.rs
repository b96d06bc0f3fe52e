use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{debug, instrument, warn};

use crate::shared::{AppError, AppState};

/// Admin authentication middleware - validates Authorization Bearer header and adds AdminClaims to request.
/// Usage: .route_layer(middleware::from_fn_with_state(app_state.clone(), admin::admin_auth))
/// Handlers can then extract Extension(claims): Extension<AdminClaims>.
#[instrument(skip(state, req, next))]
pub async fn admin_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    debug!(uri = %req.uri(), "Admin authentication middleware triggered");

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| {
            warn!("Missing Authorization header in admin request");
            AppError::Unauthorized("Missing authorization header".to_string())
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Invalid Authorization header format (expected Bearer token)");
        AppError::Unauthorized("Invalid authorization header format".to_string())
    })?;

    let claims = match state.admin_auth.authorize(token) {
        Ok(claims) => claims,
        Err(e) => {
            warn!("Admin authentication failed: {}", e);
            return Err(e);
        }
    };

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
