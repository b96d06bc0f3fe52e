// Public API - what other modules can use
pub use handlers::{dashboard, login, update_payment};
pub use middleware::admin_auth;
pub use service::{AdminAuth, DashboardService};
pub use token::AdminTokenConfig;
pub use types::{AdminClaims, DashboardSummary, LoginResponse};

// Internal modules
mod handlers;
mod middleware;
mod service;
mod token;
mod types;
