use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for game
#[derive(Debug, Clone, FromRow)]
pub struct Game {
    pub id: Uuid,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
