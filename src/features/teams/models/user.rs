use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a team member account
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub team_id: Uuid,
    pub username: String,
    /// Argon2 PHC string, never the plaintext
    pub password: String,
    pub created_at: DateTime<Utc>,
}
