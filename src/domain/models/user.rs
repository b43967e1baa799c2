use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Account as returned by the backend's `/auth/me`, `/auth/login` and `/auth/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Success body of login, register and refresh.
///
/// The tokens themselves never appear here; they travel as `Set-Cookie` headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token_type: String,
}
