use std::sync::Arc;

use bowling_tournament::{
    admin::{AdminAuth, AdminTokenConfig},
    build_router,
    player::repository::{InMemoryPlayerRepository, PostgresPlayerRepository},
    series::repository::{InMemorySeriesRepository, PostgresSeriesRepository},
    AppConfig, AppState,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bowling_tournament=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting bowling tournament server");

    let config = AppConfig::from_env()?;

    let admin_auth = Arc::new(AdminAuth::new(
        AdminTokenConfig::new(config.jwt_secret.clone(), config.admin_token_hours),
        config.admin_password.clone(),
    ));

    // Repositories are built once here and injected through AppState
    let app_state = match &config.database_url {
        Some(database_url) => {
            info!(
                host = database_url.split('@').next_back().unwrap_or("unknown"),
                "Connecting to PostgreSQL"
            );
            let pool = sqlx::PgPool::connect(database_url).await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Database migrations applied");

            AppState::new(
                Arc::new(PostgresPlayerRepository::new(pool.clone())),
                Arc::new(PostgresSeriesRepository::new(pool)),
                admin_auth,
            )
        }
        None => {
            warn!("DATABASE_URL not set, using in-memory storage (data is lost on restart)");
            AppState::new(
                Arc::new(InMemoryPlayerRepository::new()),
                Arc::new(InMemorySeriesRepository::new()),
                admin_auth,
            )
        }
    };

    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
