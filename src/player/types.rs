use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for registering a player
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterPlayerRequest {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(max = 40, message = "must be at most 40 characters"))]
    pub phone: Option<String>,
}

impl RegisterPlayerRequest {
    /// Trims surrounding whitespace; an empty phone becomes `None`
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        }
    }
}

/// Request payload for toggling the entry fee flag
#[derive(Debug, Deserialize, Serialize)]
pub struct PaymentUpdateRequest {
    pub paid: bool,
}
