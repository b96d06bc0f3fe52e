use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_JWT_SECRET: &str = "dev-secret-change-in-production";
const DEFAULT_ADMIN_TOKEN_HOURS: i64 = 12;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Process configuration, read once at startup and handed to whoever needs it
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// When absent the server runs on in-memory repositories
    pub database_url: Option<String>,
    pub jwt_secret: String,
    /// When absent admin login is disabled
    pub admin_password: Option<String>,
    pub admin_token_hours: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr = non_empty("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let jwt_secret = match non_empty("JWT_SECRET") {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set, falling back to the development secret");
                DEFAULT_JWT_SECRET.to_string()
            }
        };

        let admin_token_hours = match non_empty("ADMIN_TOKEN_HOURS") {
            Some(raw) => {
                let hours: i64 = raw.parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::InvalidValue {
                        name: "ADMIN_TOKEN_HOURS",
                        reason: e.to_string(),
                    }
                })?;
                if hours < 1 {
                    return Err(ConfigError::InvalidValue {
                        name: "ADMIN_TOKEN_HOURS",
                        reason: "must be at least 1".to_string(),
                    });
                }
                hours
            }
            None => DEFAULT_ADMIN_TOKEN_HOURS,
        };

        Ok(Self {
            bind_addr,
            database_url: non_empty("DATABASE_URL"),
            jwt_secret,
            admin_password: non_empty("ADMIN_PASSWORD"),
            admin_token_hours,
        })
    }
}
