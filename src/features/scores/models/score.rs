use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for score
#[derive(Debug, Clone, FromRow)]
pub struct Score {
    pub id: Uuid,
    pub team_id: Uuid,
    pub game_id: Uuid,
    pub point: i32,
    pub created_at: DateTime<Utc>,
}

/// Score joined with the team that earned it
#[derive(Debug, Clone, FromRow)]
pub struct ScoreWithTeam {
    pub id: Uuid,
    pub game_id: Uuid,
    pub point: i32,
    pub created_at: DateTime<Utc>,
    pub team_id: Uuid,
    pub team_name: String,
    pub team_created_at: DateTime<Utc>,
}
