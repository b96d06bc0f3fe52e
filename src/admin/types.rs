use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::standings::Standing;

/// JWT claims for an authenticated admin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminClaims {
    pub sub: String,
    pub exp: usize, // Expiration timestamp (standard JWT claim)
    pub iat: usize, // Issued at timestamp (standard JWT claim)
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Numbers shown on the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub player_count: usize,
    pub paid_count: usize,
    pub unpaid_count: usize,
    pub series_count: usize,
    pub rounds_recorded: usize,
    pub leader: Option<Standing>,
}
